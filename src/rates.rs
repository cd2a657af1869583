//! Currency rates container.

use std::{collections::BTreeMap, fmt, ops::{Div, Mul}};

use serde::{Deserialize, Serialize};

use crate::currency::CurrencyCode;

/// Currency rates, keyed by currency code as sent by the service.
///
/// Keys are kept as strings so codes unknown to [`CurrencyCode`] still come through.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rates<RATE = f64>(BTreeMap<String, RATE>);

impl<RATE> Rates<RATE> {
	/// Creates a new [`Rates`] value.
	#[inline] pub const fn new() -> Self { Self(BTreeMap::new()) }

	/// Gets the count of rates.
	#[inline] pub fn len(&self) -> usize { self.0.len() }
	/// Gets whether there are no rates.
	#[inline] pub fn is_empty(&self) -> bool { self.0.is_empty() }

	/// Iterates over currency rates, ordered by currency.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &RATE)> {
		self.0.iter().map(|(currency, rate)| (currency.as_str(), rate))
	}

	/// Inserts a currency rate, returning the rate it replaced.
	pub fn insert(&mut self, currency: CurrencyCode, rate: RATE) -> Option<RATE> {
		self.0.insert(currency.to_string(), rate)
	}

	/// Gets the rate for the given currency, if exists.
	pub fn get(&self, currency: CurrencyCode) -> Option<&RATE> {
		self.0.get(currency.as_str())
	}

	/// Converts an amount between currencies.
	///
	/// Returns [`None`] if either the `from` or `to` currencies are missing.
	pub fn convert(&self, amount: &RATE, from: CurrencyCode, to: CurrencyCode) -> Option<RATE>
	where for<'x> &'x RATE: Div<&'x RATE, Output = RATE>, for<'x> &'x RATE: Mul<RATE, Output = RATE> {
		let from_value = self.get(from)?;
		let to_value = self.get(to)?;
		Some(amount * (to_value / from_value))
	}
}

impl<RATE> Default for Rates<RATE> { #[inline] fn default() -> Self { Self::new() } }

impl<RATE> FromIterator<(CurrencyCode, RATE)> for Rates<RATE> {
	fn from_iter<T: IntoIterator<Item = (CurrencyCode, RATE)>>(iter: T) -> Self {
		Self(iter.into_iter().map(|(currency, rate)| (currency.to_string(), rate)).collect())
	}
}

impl<RATE: fmt::Debug> fmt::Debug for Rates<RATE> {
	#[inline] fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.debug_map().entries(self.0.iter()).finish() }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::currency::list::*;

	#[test]
	fn test_convert() {
		let rates: Rates = [(USD, 1.0), (EUR, 0.9), (ILS, 3.1)].into_iter().collect();
		assert_eq!(rates.convert(&1234.0, USD, USD), Some(1234.));
		assert_eq!(rates.convert(&1234.0, EUR, EUR), Some(1234.));
		assert_eq!(rates.convert(&1234.0, ILS, ILS), Some(1234.));
		assert_eq!(rates.convert(&1.0, ILS, EUR), Some(1. * (0.9 / 3.1)));
		assert_eq!(rates.convert(&1.0, EUR, ILS), Some(1. * (3.1 / 0.9)));
		assert_eq!(rates.convert(&1.0, EUR, GBP), None);
	}

	#[test]
	fn test_deserialize() {
		let rates: Rates = serde_json::from_str(r#"{"EUR":0.92,"BTC":0.000015}"#).unwrap();
		assert_eq!(rates.len(), 2);
		assert_eq!(rates.get(EUR), Some(&0.92));
		assert_eq!(rates.iter().next(), Some(("BTC", &0.000015)));
	}

	#[test]
	fn test_decimal() {
		use rust_decimal::Decimal;
		let rates: Rates<Decimal> = serde_json::from_str(r#"{"USD":1,"EUR":0.5}"#).unwrap();
		assert_eq!(rates.convert(&Decimal::from(10), USD, EUR), Some(Decimal::from(5)));
	}
}
