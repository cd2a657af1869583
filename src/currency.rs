//! [Currency codes](CurrencyCode).

use std::{
	error::Error,
	fmt::{self, Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// [Currency code](https://en.wikipedia.org/wiki/ISO_4217).
///
/// Constants for the common codes live in [`list`].
#[derive(Debug, Hash, Clone, Copy, PartialEq, PartialOrd, Eq, Ord)]
pub struct CurrencyCode {
	/// The code in uppercase alpha ASCII bytes.
	code: [u8; 3],
}

/// The default currency code is [`USD`](list::USD).
///
/// It is also the base currency the service assumes when none is given.
impl Default for CurrencyCode {
	#[inline] fn default() -> Self { list::USD }
}

impl CurrencyCode {
	/// Creates a new [`CurrencyCode`], panicking on anything but three uppercase ASCII letters.
	///
	/// Meant for constants, where the panic becomes a compile error.
	pub const fn from_bytes(code: [u8; 3]) -> Self {
		assert!(
			code[0].is_ascii_uppercase() && code[1].is_ascii_uppercase() && code[2].is_ascii_uppercase(),
			"currency codes are three uppercase ASCII letters",
		);
		Self { code }
	}

	/// The code as a string slice.
	#[inline] pub fn as_str(&self) -> &str {
		// the bytes are uppercase ASCII, see the constructors
		std::str::from_utf8(&self.code).unwrap_or_default()
	}
}

impl TryFrom<[u8; 3]> for CurrencyCode {
	type Error = InvalidCurrencyCodeError;

	fn try_from(value: [u8; 3]) -> Result<Self, Self::Error> {
		if value.iter().all(u8::is_ascii_uppercase) {
			Ok(Self { code: value })
		} else {
			Err(InvalidCurrencyCodeError)
		}
	}
}

impl<'a> TryFrom<&'a [u8]> for CurrencyCode {
	type Error = InvalidCurrencyCodeError;

	fn try_from(value: &'a [u8]) -> Result<Self, Self::Error> {
		let value: [u8; 3] = value.try_into().map_err(|_| InvalidCurrencyCodeError)?;
		Self::try_from(value)
	}
}

impl<'a> TryFrom<&'a str> for CurrencyCode {
	type Error = InvalidCurrencyCodeError;

	#[inline] fn try_from(value: &'a str) -> Result<Self, Self::Error> { Self::try_from(value.as_bytes()) }
}

impl FromStr for CurrencyCode {
	type Err = InvalidCurrencyCodeError;

	#[inline] fn from_str(s: &str) -> Result<Self, Self::Err> { s.try_into() }
}

impl AsRef<str> for CurrencyCode {
	#[inline] fn as_ref(&self) -> &str { self.as_str() }
}

impl AsRef<[u8]> for CurrencyCode {
	#[inline] fn as_ref(&self) -> &[u8] { &self.code }
}

impl Display for CurrencyCode {
	#[inline] fn fmt(&self, f: &mut Formatter) -> fmt::Result { Display::fmt(self.as_str(), f) }
}

impl Serialize for CurrencyCode {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
		self.as_str().serialize(serializer)
	}
}

impl<'de> Deserialize<'de> for CurrencyCode {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: Deserializer<'de> {
		struct Visitor;

		impl<'de> serde::de::Visitor<'de> for Visitor {
			type Value = CurrencyCode;

			fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
				formatter.write_str("a currency code")
			}

			fn visit_str<E>(self, v: &str) -> Result<Self::Value, E> where E: serde::de::Error {
				v.parse().map_err(serde::de::Error::custom)
			}
		}

		deserializer.deserialize_str(Visitor)
	}
}

/// Invalid currency code error.
///
/// Valid currency codes are three uppercase alpha ASCII characters.
#[derive(Debug, Hash, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord)]
pub struct InvalidCurrencyCodeError;

impl Display for InvalidCurrencyCodeError {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		"invalid currency code".fmt(f)
	}
}

impl Error for InvalidCurrencyCodeError {}

pub mod list {
	//! [Currency](super::CurrencyCode) constants for the most traded currencies and metals.
	//!
	//! Anything else can be parsed, see [`CurrencyCode`](super::CurrencyCode)'s [`FromStr`](std::str::FromStr).

	macro_rules! define_currencies {
		($($currency:ident),* $(,)?) => {
			$(
				#[doc = concat!("The `", stringify!($currency), "` currency code.")]
				pub const $currency: super::CurrencyCode = super::CurrencyCode::from_bytes(*bstringify::bstringify!($currency));
			)*
			/// All the currencies defined in this module.
			pub const ARRAY: &[super::CurrencyCode] = &[ $( $currency ),* ];
		};
	}

	define_currencies!(
		AED, ARS, AUD, BRL, CAD, CHF, CLP, CNY, COP, CZK, DKK, EGP, EUR, GBP, HKD, HUF, IDR, ILS, INR, ISK,
		JPY, KRW, KWD, MXN, MYR, NGN, NOK, NZD, PHP, PKR, PLN, RON, RUB, SAR, SEK, SGD, THB, TRY, TWD, UAH,
		USD, VND, XAG, XAU, XPD, XPT, ZAR,
	);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse() {
		assert_eq!("USD".parse::<CurrencyCode>().unwrap(), list::USD);
		assert_eq!("XAU".parse::<CurrencyCode>().unwrap(), list::XAU);
		assert_eq!("usd".parse::<CurrencyCode>(), Err(InvalidCurrencyCodeError));
		assert_eq!("US".parse::<CurrencyCode>(), Err(InvalidCurrencyCodeError));
		assert_eq!("USDT".parse::<CurrencyCode>(), Err(InvalidCurrencyCodeError));
		assert_eq!("U5D".parse::<CurrencyCode>(), Err(InvalidCurrencyCodeError));
	}

	#[test]
	fn test_display() {
		assert_eq!(list::EUR.to_string(), "EUR");
		assert_eq!(format!("{:>5}", list::EUR), "  EUR");
	}

	#[test]
	fn test_list_is_sorted() {
		assert!(list::ARRAY.windows(2).all(|w| w[0] < w[1]));
	}

	#[test]
	fn test_serde() {
		let json = "\"USD\"";
		assert_eq!(serde_json::to_string(&list::USD).unwrap(), json);
		assert_eq!(serde_json::from_str::<CurrencyCode>(json).unwrap(), list::USD);
		assert!(serde_json::from_str::<CurrencyCode>("\"dollar\"").is_err());
	}
}
