//! [`Error`] type.

/// An error from the API or from the HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// HTTP error, including malformed request URLs.
	#[error("http error: {0}")]
	HttpError(#[from] reqwest::Error),
	/// The response body is not the expected JSON.
	#[error("failed to parse the response: {0}")]
	ResponseParseError(#[from] serde_json::Error),
	/// The service reported a failure (`success: false`).
	#[error("api error {code}: {info}")]
	ApiError {
		/// The service's error code.
		code: u32,
		/// The service's error description.
		info: String,
	},
	/// The service reported a failure without an error object.
	#[error("the service reported a failure without details")]
	UnknownApiError,
	/// The service reported success but the response lacks the endpoint's data.
	#[error("the response is missing its data")]
	MissingPayload,
	/// No API key in the environment.
	#[error("missing API key, set the {0} environment variable")]
	MissingApiKey(&'static str),
	/// An environment variable holds an unusable value.
	#[error("invalid value for the {0} environment variable")]
	InvalidEnv(&'static str),
}
