use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::{DateType, Endpoint};
use crate::{currency::CurrencyCode, params::Params};

/// The `ohlc` endpoint: open, high, low and close rates of a currency over a period.
#[derive(Debug, Hash, Default, Clone, PartialEq, Eq)]
pub struct Ohlc<'a> {
	/// The base currency.
	pub base: Option<CurrencyCode>,
	/// The quoted currency.
	pub currency: Option<CurrencyCode>,
	/// The day, `YYYY-MM-DD`.
	pub date: Option<&'a str>,
	/// A preset period. The service gives it precedence over [`date`](Ohlc::date).
	pub date_type: Option<DateType>,
}

impl<'a> Ohlc<'a> {
	/// Creates a new [`Ohlc`] request for `base` to `currency`.
	pub fn new(base: CurrencyCode, currency: CurrencyCode) -> Self {
		Self { base: Some(base), currency: Some(currency), ..Self::default() }
	}

	/// Sets the [`date`](Ohlc::date).
	pub fn date(mut self, date: impl Into<Option<&'a str>>) -> Self {
		self.date = date.into();
		self
	}

	/// Sets the [`date_type`](Ohlc::date_type).
	pub fn date_type(mut self, date_type: impl Into<Option<DateType>>) -> Self {
		self.date_type = date_type.into();
		self
	}
}

impl Endpoint for Ohlc<'_> {
	const NAME: &'static str = "ohlc";
	type Output = OhlcPayload;

	#[inline] fn path(&self) -> Cow<'_, str> { Cow::Borrowed("/ohlc") }

	fn params(&self) -> Params {
		Params::new()
			.with("base", self.base)
			.with("currency", self.currency)
			.with("date", self.date)
			.with("date_type", self.date_type)
	}
}

/// [`Ohlc`] response data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OhlcPayload<R = f64> {
	/// The base currency.
	pub base: String,
	/// The quoted currency.
	pub currency: String,
	/// In Unix seconds.
	pub timestamp: i64,
	/// The summary.
	pub ohlc: Quote<R>,
}

/// Open, high, low and close rates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote<R = f64> {
	/// The rate at the start of the period.
	pub open: R,
	/// The highest rate.
	pub high: R,
	/// The lowest rate.
	pub low: R,
	/// The rate at the end of the period.
	pub close: R,
}
