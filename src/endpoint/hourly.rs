use std::{borrow::Cow, collections::BTreeMap};

use serde::{Deserialize, Serialize};

use super::{DateType, Endpoint};
use crate::{currency::CurrencyCode, params::Params, rates::Rates};

/// The `hourly` endpoint: hourly rates of a currency over a range.
#[derive(Debug, Hash, Default, Clone, PartialEq, Eq)]
pub struct Hourly<'a> {
	/// The base currency.
	pub base: Option<CurrencyCode>,
	/// The quoted currency.
	pub currency: Option<CurrencyCode>,
	/// The first day, `YYYY-MM-DD`.
	pub start_date: Option<&'a str>,
	/// The last day, `YYYY-MM-DD`.
	pub end_date: Option<&'a str>,
	/// A math expression the service applies to every rate.
	pub math: Option<&'a str>,
	/// A preset in place of the dates.
	pub date_type: Option<DateType>,
}

impl<'a> Hourly<'a> {
	/// Creates a new [`Hourly`] request for `base` to `currency`.
	pub fn new(base: CurrencyCode, currency: CurrencyCode) -> Self {
		Self { base: Some(base), currency: Some(currency), ..Self::default() }
	}

	/// Sets the [`start_date`](Hourly::start_date) and [`end_date`](Hourly::end_date).
	pub fn range(mut self, start_date: &'a str, end_date: &'a str) -> Self {
		self.start_date = Some(start_date);
		self.end_date = Some(end_date);
		self
	}

	/// Sets the [`math`](Hourly::math) expression.
	pub fn math(mut self, math: impl Into<Option<&'a str>>) -> Self {
		self.math = math.into();
		self
	}

	/// Sets the [`date_type`](Hourly::date_type).
	pub fn date_type(mut self, date_type: impl Into<Option<DateType>>) -> Self {
		self.date_type = date_type.into();
		self
	}
}

impl Endpoint for Hourly<'_> {
	const NAME: &'static str = "hourly";
	type Output = HourlyPayload;

	#[inline] fn path(&self) -> Cow<'_, str> { Cow::Borrowed("/hourly") }

	fn params(&self) -> Params {
		Params::new()
			.with("base", self.base)
			.with("currency", self.currency)
			.with("start_date", self.start_date)
			.with("end_date", self.end_date)
			.with("math", self.math)
			.with("date_type", self.date_type)
	}
}

/// [`Hourly`] response data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyPayload<R = f64> {
	/// The base currency.
	pub base: String,
	/// The first day.
	#[serde(default)]
	pub start_date: Option<String>,
	/// The last day.
	#[serde(default)]
	pub end_date: Option<String>,
	/// Rates by hour, then by currency.
	pub rates: BTreeMap<String, Rates<R>>,
}
