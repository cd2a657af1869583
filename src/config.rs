//! Client [`Config`].

use std::{env, fmt, time::Duration};

use crate::{error::Error, region::Region};

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "FOREXRATEAPI_API_KEY";
/// Environment variable holding the server name, see [`Region::from_name`].
pub const ENV_SERVER: &str = "FOREXRATEAPI_SERVER";
/// Environment variable holding the request timeout, in whole seconds.
pub const ENV_TIMEOUT_SECS: &str = "FOREXRATEAPI_TIMEOUT_SECS";

/// Client configuration.
///
/// The default has an empty API key, which the service will reject.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Config {
	/// The [API key](https://forexrateapi.com/documentation).
	///
	/// Not validated locally.
	pub api_key: String,
	/// The region requests are sent to.
	pub region: Region,
	/// Per-request timeout. [`None`] leaves it to the HTTP client.
	pub timeout: Option<Duration>,
}

impl Config {
	/// Creates a new [`Config`] for the primary region.
	pub fn new(api_key: impl Into<String>) -> Self {
		Self { api_key: api_key.into(), ..Self::default() }
	}

	/// Reads the configuration from the environment.
	///
	/// [`ENV_API_KEY`] is required, [`ENV_SERVER`] and [`ENV_TIMEOUT_SECS`] are optional.
	pub fn from_env() -> Result<Self, Error> {
		Self::from_lookup(|name| env::var(name).ok())
	}

	fn from_lookup(lookup: impl Fn(&'static str) -> Option<String>) -> Result<Self, Error> {
		let api_key = lookup(ENV_API_KEY)
			.filter(|key| !key.is_empty())
			.ok_or(Error::MissingApiKey(ENV_API_KEY))?;
		let region = lookup(ENV_SERVER)
			.map(|server| Region::from_name(&server))
			.unwrap_or_default();
		let timeout = lookup(ENV_TIMEOUT_SECS)
			.map(|secs| secs.trim().parse().map(Duration::from_secs).map_err(|_| Error::InvalidEnv(ENV_TIMEOUT_SECS)))
			.transpose()?;
		Ok(Self { api_key, region, timeout })
	}
}

// Keeps the key out of logs.
impl fmt::Debug for Config {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_struct("Config")
			.field("api_key", &"…")
			.field("region", &self.region)
			.field("timeout", &self.timeout)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use super::*;

	fn lookup(vars: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
		let vars: HashMap<_, _> = vars.iter().map(|&(k, v)| (k, v.to_owned())).collect();
		move |name| vars.get(name).cloned()
	}

	#[test]
	fn test_from_env_key_only() {
		let config = Config::from_lookup(lookup(&[(ENV_API_KEY, "secret")])).unwrap();
		assert_eq!(config, Config::new("secret"));
	}

	#[test]
	fn test_from_env_all() {
		let config = Config::from_lookup(lookup(&[
			(ENV_API_KEY, "secret"),
			(ENV_SERVER, "eu"),
			(ENV_TIMEOUT_SECS, "30"),
		])).unwrap();
		assert_eq!(config.region, Region::Eu);
		assert_eq!(config.timeout, Some(Duration::from_secs(30)));
	}

	#[test]
	fn test_from_env_unknown_server() {
		let config = Config::from_lookup(lookup(&[(ENV_API_KEY, "secret"), (ENV_SERVER, "mars")])).unwrap();
		assert_eq!(config.region, Region::Us);
	}

	#[test]
	fn test_from_env_missing_key() {
		assert!(matches!(Config::from_lookup(lookup(&[])), Err(Error::MissingApiKey(ENV_API_KEY))));
		assert!(matches!(Config::from_lookup(lookup(&[(ENV_API_KEY, "")])), Err(Error::MissingApiKey(_))));
	}

	#[test]
	fn test_from_env_bad_timeout() {
		let result = Config::from_lookup(lookup(&[(ENV_API_KEY, "secret"), (ENV_TIMEOUT_SECS, "soon")]));
		assert!(matches!(result, Err(Error::InvalidEnv(ENV_TIMEOUT_SECS))));
	}

	#[test]
	fn test_debug_hides_key() {
		assert!(!format!("{:?}", Config::new("secret")).contains("secret"));
	}
}
