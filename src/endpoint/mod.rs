//! The service's endpoints.
//!
//! Each endpoint is a typed options struct implementing [`Endpoint`]; fields map one-to-one to
//! query parameters. Send them with [`Client::send`](crate::Client::send) or the matching
//! [`Client`](crate::Client) method.

use std::{borrow::Cow, fmt::{self, Display, Formatter}};

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::params::{ParamValue, Params};

mod symbols;
pub use symbols::*;

mod latest;
pub use latest::*;

mod hourly;
pub use hourly::*;

mod ohlc;
pub use ohlc::*;

mod convert;
pub use convert::*;

mod timeframe;
pub use timeframe::*;

mod usage;
pub use usage::*;

/// An endpoint request.
pub trait Endpoint {
	/// Short name for logs.
	const NAME: &'static str;

	/// The [payload](crate::Body::payload) of a response from this endpoint.
	type Output: DeserializeOwned;

	/// The path under the region's base URL, starting with `/`.
	fn path(&self) -> Cow<'_, str>;

	/// The endpoint's query parameters, in wire order, without the API key.
	///
	/// Absent values are listed too; they are dropped before sending.
	fn params(&self) -> Params;
}

/// A date preset for the `date_type` parameter.
///
/// Where the service accepts both a date and a preset, the preset wins; that is up to the service.
#[derive(Debug, Hash, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateType {
	/// The most recent period.
	Recent,
	/// Yesterday.
	Yesterday,
	/// The past week.
	Week,
	/// The past month.
	Month,
	/// The past year.
	Year,
}

impl DateType {
	/// The wire value.
	pub const fn as_str(self) -> &'static str {
		match self {
			DateType::Recent => "recent",
			DateType::Yesterday => "yesterday",
			DateType::Week => "week",
			DateType::Month => "month",
			DateType::Year => "year",
		}
	}
}

impl Display for DateType {
	#[inline] fn fmt(&self, f: &mut Formatter) -> fmt::Result { self.as_str().fmt(f) }
}

impl ParamValue for DateType {
	#[inline] fn into_param(self) -> Option<String> { Some(self.as_str().to_owned()) }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{currency::list::*, response::Body};

	fn payload<T: DeserializeOwned>(json: &str) -> T {
		serde_json::from_str::<Body<T>>(json).unwrap().into_result().unwrap()
	}

	#[test]
	fn test_symbols_payload() {
		let symbols: SymbolsPayload = payload(r#"{"success":true,"symbols":{"EUR":"Euro","USD":"US Dollar"}}"#);
		assert_eq!(symbols.symbols["EUR"], "Euro");
	}

	#[test]
	fn test_rates_payload() {
		let rates: RatesPayload = payload(r#"{"success":true,"base":"USD","timestamp":1707091199,"rates":{"AUD":1.53,"CAD":1.35}}"#);
		assert_eq!(rates.base, "USD");
		assert_eq!(rates.timestamp, 1707091199);
		assert_eq!(rates.rates.get(CAD), Some(&1.35));
	}

	#[test]
	fn test_hourly_payload() {
		let hourly: HourlyPayload = payload(r#"{"success":true,"base":"USD","start_date":"2024-02-05","end_date":"2024-02-05","rates":{"2024-02-05 00:00:00":{"EUR":0.92}}}"#);
		assert_eq!(hourly.rates["2024-02-05 00:00:00"].get(EUR), Some(&0.92));
	}

	#[test]
	fn test_ohlc_payload() {
		let ohlc: OhlcPayload = payload(r#"{"success":true,"base":"USD","currency":"EUR","timestamp":1707091199,"ohlc":{"open":0.92,"high":0.93,"low":0.91,"close":0.925}}"#);
		assert_eq!(ohlc.ohlc, Quote { open: 0.92, high: 0.93, low: 0.91, close: 0.925 });
	}

	#[test]
	fn test_convert_payload() {
		let convert: ConvertPayload = payload(r#"{"success":true,"query":{"from":"USD","to":"EUR","amount":100},"info":{"quote":0.92,"timestamp":1707091199},"result":92}"#);
		assert_eq!(convert.base, None);
		assert_eq!(convert.query.amount, 100.);
		assert_eq!(convert.result, 92.);
	}

	#[test]
	fn test_timeframe_payload() {
		let timeframe: TimeframePayload = payload(r#"{"success":true,"base":"USD","start_date":"2024-02-05","end_date":"2024-02-06","rates":{"2024-02-05":{"AUD":1.53},"2024-02-06":{"AUD":1.54}}}"#);
		assert_eq!(timeframe.rates.len(), 2);
		assert_eq!(timeframe.rates["2024-02-06"].get(AUD), Some(&1.54));
	}

	#[test]
	fn test_change_payload() {
		let change: ChangePayload = payload(r#"{"success":true,"base":"USD","start_date":"2024-02-05","end_date":"2024-02-06","change":{"AUD":{"start_rate":1.5,"end_rate":1.53,"change":0.03,"change_pct":2}}}"#);
		assert_eq!(change.change["AUD"].change_pct, 2.);
	}

	#[test]
	fn test_usage_payload() {
		let usage: UsagePayload = payload(r#"{"success":true,"result":{"plan":"Free","used":12,"total":100,"remaining":88}}"#);
		assert_eq!(usage.result, Quota { plan: "Free".into(), used: 12, total: 100, remaining: 88 });
	}

	#[test]
	fn test_mistyped_payload_is_an_error() {
		let rates = r#"{"success":true,"base":"USD","timestamp":1707091199,"rates":{"EUR":"x"}}"#;
		assert!(serde_json::from_str::<Body<RatesPayload>>(rates).is_err());
		let usage = r#"{"success":true,"result":{"plan":"Free","used":12,"total":100,"remaining":"lots"}}"#;
		assert!(serde_json::from_str::<Body<UsagePayload>>(usage).is_err());
	}

	#[test]
	fn test_failure_has_no_payload() {
		let body: Body<RatesPayload> = serde_json::from_str(r#"{"success":false,"error":{"code":102,"info":"Invalid base currency."}}"#).unwrap();
		assert_eq!(body.payload, None);
		assert_eq!(body.error.map(|error| error.code), Some(102));
	}

	#[test]
	fn test_date_type_wire() {
		assert_eq!(DateType::Recent.into_param().as_deref(), Some("recent"));
		assert_eq!(DateType::Year.to_string(), "year");
		assert_eq!(serde_json::to_string(&DateType::Yesterday).unwrap(), "\"yesterday\"");
		assert_eq!(serde_json::from_str::<DateType>("\"week\"").unwrap(), DateType::Week);
	}
}
