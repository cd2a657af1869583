//! [`Client`]

use crate::{
	config::Config,
	endpoint::{
		Change, ChangePayload, Convert, ConvertPayload, Endpoint, Historical, Hourly, HourlyPayload, Live, Ohlc,
		OhlcPayload, RatesPayload, Symbols, SymbolsPayload, Timeframe, TimeframePayload, Usage, UsagePayload,
	},
	error::Error,
	params::{ParamValue, Params},
	region::Region,
	response::Response,
};

/// A configured client for the service.
///
/// Every call sends one `GET` and returns the [`Response`] without looking at it.
/// Clones share the HTTP connection pool but not the configuration.
///
/// # Examples
/// ```no_run
/// # use forexrateapi::{Client, endpoint::Live, currency::list::*};
/// # async fn run() -> Result<(), forexrateapi::Error> {
/// let client = Client::new("…");
/// let body = client.fetch_live(&Live::new().base(USD).currencies([EUR, GBP])).await?.body().await?;
/// if let Some(rates) = body.payload {
/// 	println!("{:?}", rates.rates.get(EUR));
/// }
/// # Ok(()) }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Client {
	http: reqwest::Client,
	config: Config,
}

impl Client {
	/// Creates a new [`Client`] for the primary region.
	pub fn new(api_key: impl Into<String>) -> Self {
		Self::with_config(Config::new(api_key))
	}

	/// Creates a new [`Client`] with the given configuration.
	pub fn with_config(config: Config) -> Self {
		Self::with_http(reqwest::Client::new(), config)
	}

	/// Creates a new [`Client`] on top of an existing HTTP client.
	pub fn with_http(http: reqwest::Client, config: Config) -> Self {
		Self { http, config }
	}

	/// Creates a new [`Client`] configured from the environment, see [`Config::from_env`].
	pub fn from_env() -> Result<Self, Error> {
		Config::from_env().map(Self::with_config)
	}

	/// The configuration.
	#[inline] pub fn config(&self) -> &Config { &self.config }

	/// Sets the API key for all following requests.
	pub fn set_api_key(&mut self, api_key: impl Into<String>) -> &mut Self {
		self.config.api_key = api_key.into();
		self
	}

	/// Sets the region by server name, see [`Region::from_name`].
	///
	/// Unknown names select the primary region.
	pub fn set_server(&mut self, server: &str) -> &mut Self {
		self.set_region(Region::from_name(server))
	}

	/// Sets the region.
	pub fn set_region(&mut self, region: Region) -> &mut Self {
		self.config.region = region;
		self
	}

	/// The full parameters of a request to `endpoint`, sanitized.
	pub fn params<E: Endpoint>(&self, endpoint: &E) -> Params {
		Params::new()
			.with("api_key", self.config.api_key.as_str())
			.append(endpoint.params())
			.sanitize()
	}

	/// The URL of a request to `endpoint`.
	pub fn url<E: Endpoint>(&self, endpoint: &E) -> String {
		let mut url = String::from(self.config.region.base_url());
		url.push_str(&endpoint.path());
		self.params(endpoint).write_query(&mut url);
		url
	}

	/// Builds the request to `endpoint` without sending it.
	pub fn request<E: Endpoint>(&self, endpoint: &E) -> Result<reqwest::Request, Error> {
		let mut builder = self.http.get(self.url(endpoint));
		if let Some(timeout) = self.config.timeout {
			builder = builder.timeout(timeout);
		}
		Ok(builder.build()?)
	}

	/// Sends a request to `endpoint`.
	pub async fn send<E: Endpoint>(&self, endpoint: &E) -> Result<Response<E::Output>, Error> {
		let request = self.request(endpoint)?;
		tracing::debug!(endpoint = E::NAME, path = %endpoint.path(), region = %self.config.region, "sending request");
		let response = self.http.execute(request).await?;
		tracing::debug!(endpoint = E::NAME, status = %response.status(), "received response");
		Ok(Response::new(response))
	}

	/// All supported currencies.
	pub async fn fetch_symbols(&self) -> Result<Response<SymbolsPayload>, Error> {
		self.send(&Symbols).await
	}

	/// Live rates.
	pub async fn fetch_live(&self, request: &Live<'_>) -> Result<Response<RatesPayload>, Error> {
		self.send(request).await
	}

	/// Rates at a past date.
	pub async fn fetch_historical(&self, request: &Historical<'_>) -> Result<Response<RatesPayload>, Error> {
		self.send(request).await
	}

	/// Hourly rates over a range.
	pub async fn hourly(&self, request: &Hourly<'_>) -> Result<Response<HourlyPayload>, Error> {
		self.send(request).await
	}

	/// Open, high, low and close rates.
	pub async fn ohlc(&self, request: &Ohlc<'_>) -> Result<Response<OhlcPayload>, Error> {
		self.send(request).await
	}

	/// Converts an amount between currencies.
	pub async fn convert<A: ParamValue + Copy>(&self, request: &Convert<'_, A>) -> Result<Response<ConvertPayload>, Error> {
		self.send(request).await
	}

	/// Daily rates over a range.
	pub async fn timeframe(&self, request: &Timeframe<'_>) -> Result<Response<TimeframePayload>, Error> {
		self.send(request).await
	}

	/// Rate changes between two days.
	pub async fn change(&self, request: &Change<'_>) -> Result<Response<ChangePayload>, Error> {
		self.send(request).await
	}

	/// The API key's quota.
	pub async fn usage(&self) -> Result<Response<UsagePayload>, Error> {
		self.send(&Usage).await
	}
}
