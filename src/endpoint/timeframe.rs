use std::{borrow::Cow, collections::BTreeMap};

use serde::{Deserialize, Serialize};

use super::{DateType, Endpoint};
use crate::{currency::CurrencyCode, params::{Currencies, Params}, rates::Rates};

/// The `timeframe` endpoint: daily rates over a range.
#[derive(Debug, Hash, Default, Clone, PartialEq, Eq)]
pub struct Timeframe<'a> {
	/// The first day, `YYYY-MM-DD`.
	pub start_date: &'a str,
	/// The last day, `YYYY-MM-DD`.
	pub end_date: &'a str,
	/// The base currency, USD by the service's default.
	pub base: Option<CurrencyCode>,
	/// The currencies to get rates for, all of them if empty.
	pub currencies: Vec<CurrencyCode>,
}

impl<'a> Timeframe<'a> {
	/// Creates a new [`Timeframe`] request for all currencies.
	pub fn new(start_date: &'a str, end_date: &'a str) -> Self {
		Self { start_date, end_date, base: None, currencies: Vec::new() }
	}

	/// Sets the [`base`](Timeframe::base).
	pub fn base(mut self, base: impl Into<Option<CurrencyCode>>) -> Self {
		self.base = base.into();
		self
	}

	/// Sets the [`currencies`](Timeframe::currencies).
	pub fn currencies(mut self, currencies: impl IntoIterator<Item = CurrencyCode>) -> Self {
		self.currencies = currencies.into_iter().collect();
		self
	}
}

impl Endpoint for Timeframe<'_> {
	const NAME: &'static str = "timeframe";
	type Output = TimeframePayload;

	#[inline] fn path(&self) -> Cow<'_, str> { Cow::Borrowed("/timeframe") }

	fn params(&self) -> Params {
		Params::new()
			.with("start_date", self.start_date)
			.with("end_date", self.end_date)
			.with("base", self.base)
			.with("currencies", Currencies(&self.currencies))
	}
}

/// [`Timeframe`] response data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeframePayload<R = f64> {
	/// The base currency.
	pub base: String,
	/// The first day.
	pub start_date: String,
	/// The last day.
	pub end_date: String,
	/// Rates by day, then by currency.
	pub rates: BTreeMap<String, Rates<R>>,
}

/// The `change` endpoint: how rates moved between two days.
#[derive(Debug, Hash, Default, Clone, PartialEq, Eq)]
pub struct Change<'a> {
	/// The first day, `YYYY-MM-DD`.
	pub start_date: &'a str,
	/// The last day, `YYYY-MM-DD`.
	pub end_date: &'a str,
	/// The base currency, USD by the service's default.
	pub base: Option<CurrencyCode>,
	/// The currencies to get changes for, all of them if empty.
	pub currencies: Vec<CurrencyCode>,
	/// A preset in place of the dates.
	pub date_type: Option<DateType>,
}

impl<'a> Change<'a> {
	/// Creates a new [`Change`] request for all currencies.
	pub fn new(start_date: &'a str, end_date: &'a str) -> Self {
		Self { start_date, end_date, ..Self::default() }
	}

	/// Sets the [`base`](Change::base).
	pub fn base(mut self, base: impl Into<Option<CurrencyCode>>) -> Self {
		self.base = base.into();
		self
	}

	/// Sets the [`currencies`](Change::currencies).
	pub fn currencies(mut self, currencies: impl IntoIterator<Item = CurrencyCode>) -> Self {
		self.currencies = currencies.into_iter().collect();
		self
	}

	/// Sets the [`date_type`](Change::date_type).
	pub fn date_type(mut self, date_type: impl Into<Option<DateType>>) -> Self {
		self.date_type = date_type.into();
		self
	}
}

impl Endpoint for Change<'_> {
	const NAME: &'static str = "change";
	type Output = ChangePayload;

	#[inline] fn path(&self) -> Cow<'_, str> { Cow::Borrowed("/change") }

	fn params(&self) -> Params {
		Params::new()
			.with("start_date", self.start_date)
			.with("end_date", self.end_date)
			.with("base", self.base)
			.with("currencies", Currencies(&self.currencies))
			.with("date_type", self.date_type)
	}
}

/// [`Change`] response data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangePayload<R = f64> {
	/// The base currency.
	pub base: String,
	/// The first day.
	pub start_date: String,
	/// The last day.
	pub end_date: String,
	/// Changes by currency.
	pub change: BTreeMap<String, RateChange<R>>,
}

/// A currency's move in a [`ChangePayload`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateChange<R = f64> {
	/// The rate on the first day.
	pub start_rate: R,
	/// The rate on the last day.
	pub end_rate: R,
	/// `end_rate - start_rate`.
	pub change: R,
	/// The change, in percent of `start_rate`.
	pub change_pct: R,
}
