//! [`Region`]

use std::fmt::{self, Display, Formatter};

/// A hosting region of the service.
///
/// The region only decides the base URL requests are sent to.
#[derive(Debug, Hash, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord)]
pub enum Region {
	/// The primary, US-hosted servers.
	#[default]
	Us,
	/// The secondary, EU-hosted servers.
	Eu,
}

impl Region {
	/// All regions, primary first.
	pub const ALL: [Region; 2] = [Region::Us, Region::Eu];

	/// The base URL of the region, without a trailing slash.
	pub const fn base_url(self) -> &'static str {
		match self {
			Region::Us => "https://api.forexrateapi.com/v1",
			Region::Eu => "https://api-eu.forexrateapi.com/v1",
		}
	}

	/// The server name of the region, as accepted by [`Region::from_name`].
	pub const fn name(self) -> &'static str {
		match self {
			Region::Us => "us",
			Region::Eu => "eu",
		}
	}

	/// Looks up a region by its server name (`us` or `eu`).
	///
	/// Unknown names resolve to the primary region ([`Region::Us`]) rather than failing.
	/// A warning is logged when that happens since it usually means a typo in configuration.
	pub fn from_name(name: &str) -> Self {
		match name {
			"us" => Region::Us,
			"eu" => Region::Eu,
			unknown => {
				tracing::warn!(server = unknown, fallback = Region::Us.name(), "unknown server, falling back to the primary region");
				Region::Us
			}
		}
	}
}

impl Display for Region {
	#[inline] fn fmt(&self, f: &mut Formatter) -> fmt::Result { self.name().fmt(f) }
}
