//! Query parameters.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::currency::CurrencyCode;

/// Left as is in path segments: the unreserved characters.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');
/// Left as is in query names and values: [`PATH_SEGMENT`] plus the currency list separator.
const QUERY: &AsciiSet = &PATH_SEGMENT.remove(b',');

/// A value that can be sent as a query parameter.
///
/// [`None`] means the parameter is absent.
pub trait ParamValue {
	/// Converts into the wire representation.
	fn into_param(self) -> Option<String>;
}

impl ParamValue for String {
	#[inline] fn into_param(self) -> Option<String> { Some(self) }
}

impl<'a> ParamValue for &'a str {
	#[inline] fn into_param(self) -> Option<String> { Some(self.to_owned()) }
}

impl ParamValue for CurrencyCode {
	#[inline] fn into_param(self) -> Option<String> { Some(self.to_string()) }
}

macro_rules! display_param {
	($($ty:ty),*) => {
		$(
			impl ParamValue for $ty {
				#[inline] fn into_param(self) -> Option<String> { Some(self.to_string()) }
			}
		)*
	};
}
display_param!(f32, f64, i32, i64, u32, u64, usize, bool);

#[cfg(feature = "rust_decimal")]
impl ParamValue for rust_decimal::Decimal {
	#[inline] fn into_param(self) -> Option<String> { Some(self.normalize().to_string()) }
}

impl<T: ParamValue> ParamValue for Option<T> {
	#[inline] fn into_param(self) -> Option<String> { self.and_then(ParamValue::into_param) }
}

/// A list of currencies, sent as a single comma-joined parameter.
///
/// An empty list produces an empty value, which [sanitization](Params::sanitize) drops.
#[derive(Debug, Clone, Copy)]
pub struct Currencies<T>(pub T);

impl<T> ParamValue for Currencies<T> where T: IntoIterator, T::Item: AsRef<str> {
	fn into_param(self) -> Option<String> {
		let mut joined = String::new();
		for (i, currency) in self.0.into_iter().enumerate() {
			if i > 0 { joined.push(','); }
			joined.push_str(currency.as_ref());
		}
		Some(joined)
	}
}

/// Ordered query parameters, by wire name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Params(Vec<(&'static str, Option<String>)>);

impl Params {
	/// Creates an empty [`Params`].
	#[inline] pub const fn new() -> Self { Self(Vec::new()) }

	/// Appends a parameter.
	pub fn with(mut self, name: &'static str, value: impl ParamValue) -> Self {
		self.0.push((name, value.into_param()));
		self
	}

	/// Appends all of `other`'s parameters, keeping their order.
	pub fn append(mut self, other: Params) -> Self {
		self.0.extend(other.0);
		self
	}

	/// Returns the parameters without the absent or empty ones.
	///
	/// Values like `0` or `false` are kept. The input is left untouched.
	pub fn sanitize(&self) -> Self {
		self.0.iter()
			.filter(|(_, value)| value.as_deref().is_some_and(|value| !value.is_empty()))
			.cloned()
			.collect()
	}

	/// Gets the first present value of the parameter.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.0.iter()
			.filter(|&&(n, _)| n == name)
			.find_map(|(_, value)| value.as_deref())
	}

	/// Whether the parameter is listed, with or without a value.
	pub fn contains(&self, name: &str) -> bool {
		self.0.iter().any(|&(n, _)| n == name)
	}

	/// Iterates over the parameters in order.
	pub fn iter(&self) -> impl Iterator<Item = (&'static str, Option<&str>)> {
		self.0.iter().map(|(name, value)| (*name, value.as_deref()))
	}

	/// Gets the count of parameters.
	#[inline] pub fn len(&self) -> usize { self.0.len() }
	/// Gets whether there are no parameters.
	#[inline] pub fn is_empty(&self) -> bool { self.0.is_empty() }

	/// Appends the present parameters to `url` as a query string.
	///
	/// Values are percent-encoded, except for unreserved characters and commas.
	pub fn write_query(&self, url: &mut String) {
		let mut sep = '?';
		for (name, value) in self.0.iter().filter_map(|(name, value)| Some((name, value.as_deref()?))) {
			url.push(sep);
			url.extend(utf8_percent_encode(name, QUERY));
			url.push('=');
			url.extend(utf8_percent_encode(value, QUERY));
			sep = '&';
		}
	}
}

impl FromIterator<(&'static str, Option<String>)> for Params {
	fn from_iter<T: IntoIterator<Item = (&'static str, Option<String>)>>(iter: T) -> Self {
		Self(iter.into_iter().collect())
	}
}

/// Percent-encodes `segment` for use as a single path segment.
pub(crate) fn encode_path_segment(segment: &str) -> String {
	utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::currency::list::*;

	fn sample() -> Params {
		Params::new()
			.with("api_key", "key")
			.with("base", None::<CurrencyCode>)
			.with("currencies", "")
			.with("amount", 0u32)
			.with("math", false)
			.with("date", "2024-02-05")
	}

	#[test]
	fn test_sanitize() {
		let sanitized = sample().sanitize();
		let names: Vec<_> = sanitized.iter().map(|(name, _)| name).collect();
		assert_eq!(names, ["api_key", "amount", "math", "date"]);
		assert_eq!(sanitized.get("amount"), Some("0"));
		assert_eq!(sanitized.get("math"), Some("false"));
		assert!(!sanitized.contains("base"));
		assert!(!sanitized.contains("currencies"));
	}

	#[test]
	fn test_sanitize_idempotent() {
		let once = sample().sanitize();
		assert_eq!(once.sanitize(), once);
	}

	#[test]
	fn test_sanitize_keeps_input() {
		let params = sample();
		let _ = params.sanitize();
		assert_eq!(params.len(), 6);
		assert!(params.contains("base"));
	}

	#[test]
	fn test_currencies() {
		assert_eq!(Currencies([AUD, CAD, GBP]).into_param().as_deref(), Some("AUD,CAD,GBP"));
		assert_eq!(Currencies([JPY, AUD]).into_param().as_deref(), Some("JPY,AUD"));
		assert_eq!(Currencies(["EUR"]).into_param().as_deref(), Some("EUR"));
		assert_eq!(Currencies(Vec::<CurrencyCode>::new()).into_param().as_deref(), Some(""));
	}

	#[test]
	fn test_empty_currencies_elided() {
		let params = Params::new().with("currencies", Currencies(&[] as &[CurrencyCode])).sanitize();
		assert!(params.is_empty());
	}

	#[test]
	fn test_numbers() {
		assert_eq!(100.0f64.into_param().as_deref(), Some("100"));
		assert_eq!(0.25f64.into_param().as_deref(), Some("0.25"));
		assert_eq!(0u32.into_param().as_deref(), Some("0"));
	}

	#[test]
	fn test_write_query() {
		let mut url = String::from("https://example.com/v1/latest");
		Params::new()
			.with("api_key", "a b&c")
			.with("base", USD)
			.with("currencies", Currencies([AUD, CAD]))
			.with("math", None::<&str>)
			.write_query(&mut url);
		assert_eq!(url, "https://example.com/v1/latest?api_key=a%20b%26c&base=USD&currencies=AUD,CAD");
	}

	#[test]
	fn test_write_query_non_ascii() {
		let mut url = String::new();
		Params::new().with("math", "*1,5 €").write_query(&mut url);
		assert_eq!(url, "?math=%2A1,5%20%E2%82%AC");
	}

	#[test]
	fn test_encode_path_segment() {
		assert_eq!(encode_path_segment("2024-02-05"), "2024-02-05");
		assert_eq!(encode_path_segment("2024-02-05?a#b/c,d"), "2024-02-05%3Fa%23b%2Fc%2Cd");
	}

	#[test]
	fn test_write_query_empty() {
		let mut url = String::from("https://example.com/v1/usage");
		Params::new().write_query(&mut url);
		assert_eq!(url, "https://example.com/v1/usage");
	}
}
