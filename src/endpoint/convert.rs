use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::Endpoint;
use crate::{currency::CurrencyCode, params::{ParamValue, Params}};

/// The `convert` endpoint: converts an amount between currencies, now or at a past date.
///
/// The amount is any [`ParamValue`] number, [`f64`] by default or `Decimal` with the
/// `rust_decimal` feature.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Convert<'a, A = f64> {
	/// The source currency.
	pub from: Option<CurrencyCode>,
	/// The target currency.
	pub to: Option<CurrencyCode>,
	/// The amount in [`from`](Convert::from). Zero is sent as is.
	pub amount: Option<A>,
	/// The day, `YYYY-MM-DD`, latest if [`None`].
	pub date: Option<&'a str>,
}

impl<'a, A> Convert<'a, A> {
	/// Creates a new [`Convert`] request at the latest rates.
	pub fn new(from: CurrencyCode, to: CurrencyCode, amount: A) -> Self {
		Self { from: Some(from), to: Some(to), amount: Some(amount), date: None }
	}

	/// Sets the [`date`](Convert::date).
	pub fn date(mut self, date: impl Into<Option<&'a str>>) -> Self {
		self.date = date.into();
		self
	}
}

impl<A: ParamValue + Copy> Endpoint for Convert<'_, A> {
	const NAME: &'static str = "convert";
	type Output = ConvertPayload;

	#[inline] fn path(&self) -> Cow<'_, str> { Cow::Borrowed("/convert") }

	fn params(&self) -> Params {
		Params::new()
			.with("from", self.from)
			.with("to", self.to)
			.with("amount", self.amount)
			.with("date", self.date)
	}
}

/// [`Convert`] response data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertPayload<R = f64> {
	/// The base currency.
	#[serde(default)]
	pub base: Option<String>,
	/// The request, as understood by the service.
	pub query: ConvertQuery<R>,
	/// The rate used.
	pub info: ConvertInfo<R>,
	/// The converted amount.
	pub result: R,
}

/// [`ConvertPayload::query`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertQuery<R = f64> {
	/// The source currency.
	pub from: String,
	/// The target currency.
	pub to: String,
	/// The amount in the source currency.
	pub amount: R,
}

/// [`ConvertPayload::info`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertInfo<R = f64> {
	/// The rate from the source to the target currency.
	pub quote: R,
	/// When the rate was taken, in Unix seconds.
	pub timestamp: i64,
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::currency::list::*;

	#[test]
	fn test_float_amount() {
		let params = Convert::new(USD, EUR, 12.5f64).params();
		assert_eq!(params.get("amount"), Some("12.5"));
	}

	#[cfg(feature = "rust_decimal")]
	#[test]
	fn test_decimal_amount() {
		use rust_decimal::Decimal;
		let params = Convert::new(USD, EUR, Decimal::new(10050, 2)).date("2024-02-05").params();
		assert_eq!(params.get("amount"), Some("100.5"));
		assert_eq!(params.get("date"), Some("2024-02-05"));
	}
}
