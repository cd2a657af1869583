use std::{borrow::Cow, collections::BTreeMap};

use serde::{Deserialize, Serialize};

use super::Endpoint;
use crate::params::Params;

/// The [`symbols`](https://forexrateapi.com/documentation) endpoint: all supported currencies.
#[derive(Debug, Hash, Default, Clone, Copy, PartialEq, Eq)]
pub struct Symbols;

impl Endpoint for Symbols {
	const NAME: &'static str = "symbols";
	type Output = SymbolsPayload;

	#[inline] fn path(&self) -> Cow<'_, str> { Cow::Borrowed("/symbols") }
	#[inline] fn params(&self) -> Params { Params::new() }
}

/// [`Symbols`] response data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolsPayload {
	/// Currency names, by currency code.
	pub symbols: BTreeMap<String, String>,
}
