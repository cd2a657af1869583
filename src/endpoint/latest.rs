use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::Endpoint;
use crate::{currency::CurrencyCode, params::{encode_path_segment, Currencies, Params}, rates::Rates};

/// The [`latest`](https://forexrateapi.com/documentation) endpoint: live rates.
///
/// # Examples
/// ```
/// # use forexrateapi::{endpoint::Live, currency::list::*};
/// let request = Live::new().base(USD).currencies([AUD, CAD]);
/// ```
#[derive(Debug, Hash, Default, Clone, PartialEq, Eq)]
pub struct Live<'a> {
	/// The base currency, USD by the service's default.
	pub base: Option<CurrencyCode>,
	/// The currencies to get rates for, all of them if empty.
	pub currencies: Vec<CurrencyCode>,
	/// A math expression the service applies to every rate.
	pub math: Option<&'a str>,
}

impl<'a> Live<'a> {
	/// Creates a new [`Live`] request for all currencies.
	#[inline] pub fn new() -> Self { Self::default() }

	/// Sets the [`base`](Live::base).
	pub fn base(mut self, base: impl Into<Option<CurrencyCode>>) -> Self {
		self.base = base.into();
		self
	}

	/// Sets the [`currencies`](Live::currencies).
	pub fn currencies(mut self, currencies: impl IntoIterator<Item = CurrencyCode>) -> Self {
		self.currencies = currencies.into_iter().collect();
		self
	}

	/// Sets the [`math`](Live::math) expression.
	pub fn math(mut self, math: impl Into<Option<&'a str>>) -> Self {
		self.math = math.into();
		self
	}
}

impl Endpoint for Live<'_> {
	const NAME: &'static str = "latest";
	type Output = RatesPayload;

	#[inline] fn path(&self) -> Cow<'_, str> { Cow::Borrowed("/latest") }

	fn params(&self) -> Params {
		Params::new()
			.with("base", self.base)
			.with("currencies", Currencies(&self.currencies))
			.with("math", self.math)
	}
}

/// The historical endpoint: rates at a past date.
#[derive(Debug, Hash, Default, Clone, PartialEq, Eq)]
pub struct Historical<'a> {
	/// The date, `YYYY-MM-DD`. Sent as an escaped path segment, not validated.
	pub date: &'a str,
	/// The base currency, USD by the service's default.
	pub base: Option<CurrencyCode>,
	/// The currencies to get rates for, all of them if empty.
	pub currencies: Vec<CurrencyCode>,
}

impl<'a> Historical<'a> {
	/// Creates a new [`Historical`] request for all currencies.
	pub fn new(date: &'a str) -> Self {
		Self { date, base: None, currencies: Vec::new() }
	}

	/// Sets the [`base`](Historical::base).
	pub fn base(mut self, base: impl Into<Option<CurrencyCode>>) -> Self {
		self.base = base.into();
		self
	}

	/// Sets the [`currencies`](Historical::currencies).
	pub fn currencies(mut self, currencies: impl IntoIterator<Item = CurrencyCode>) -> Self {
		self.currencies = currencies.into_iter().collect();
		self
	}
}

impl Endpoint for Historical<'_> {
	const NAME: &'static str = "historical";
	type Output = RatesPayload;

	fn path(&self) -> Cow<'_, str> { Cow::Owned(format!("/{}", encode_path_segment(self.date))) }

	fn params(&self) -> Params {
		Params::new()
			.with("base", self.base)
			.with("currencies", Currencies(&self.currencies))
	}
}

/// [`Live`] and [`Historical`] response data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatesPayload<R = f64> {
	/// The base currency.
	pub base: String,
	/// When the rates were taken, in Unix seconds.
	pub timestamp: i64,
	/// The rates against [`base`](RatesPayload::base).
	pub rates: Rates<R>,
}
