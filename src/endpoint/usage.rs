use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::Endpoint;
use crate::params::Params;

/// The `usage` endpoint: the API key's quota.
#[derive(Debug, Hash, Default, Clone, Copy, PartialEq, Eq)]
pub struct Usage;

impl Endpoint for Usage {
	const NAME: &'static str = "usage";
	type Output = UsagePayload;

	#[inline] fn path(&self) -> Cow<'_, str> { Cow::Borrowed("/usage") }
	#[inline] fn params(&self) -> Params { Params::new() }
}

/// [`Usage`] response data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsagePayload {
	/// The quota.
	pub result: Quota,
}

/// Request quota of an API key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quota {
	/// The plan name.
	pub plan: String,
	/// Requests made this period.
	pub used: u64,
	/// Requests allowed this period.
	pub total: u64,
	/// Requests left this period.
	pub remaining: u64,
}
