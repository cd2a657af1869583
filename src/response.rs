//! [`Response`] and the common [`Body`] shape.

use std::marker::PhantomData;

use serde::{de::{self, DeserializeOwned}, Deserialize, Deserializer, Serialize};
use serde_json as json;

use crate::error::Error;

/// A response as returned by the HTTP client, typed by the endpoint it came from.
///
/// Nothing about it is interpreted: non-success statuses are returned as-is.
/// Decode the body with [`Response::body`] and branch on [`Body::success`].
#[derive(Debug)]
pub struct Response<T> {
	inner: reqwest::Response,
	payload: PhantomData<fn() -> T>,
}

impl<T> Response<T> {
	pub(crate) fn new(inner: reqwest::Response) -> Self {
		Self { inner, payload: PhantomData }
	}

	/// The HTTP status.
	#[inline] pub fn status(&self) -> reqwest::StatusCode { self.inner.status() }

	/// The HTTP headers.
	#[inline] pub fn headers(&self) -> &reqwest::header::HeaderMap { self.inner.headers() }

	/// The underlying HTTP response.
	#[inline] pub fn into_inner(self) -> reqwest::Response { self.inner }

	/// Retypes the payload, e.g. to decode rates as `Decimal` instead of [`f64`].
	#[inline] pub fn cast<U>(self) -> Response<U> { Response::new(self.inner) }
}

impl<T: DeserializeOwned> Response<T> {
	/// Reads and decodes the body.
	pub async fn body(self) -> Result<Body<T>, Error> {
		let bytes = self.inner.bytes().await?;
		Ok(serde_json::from_slice(&bytes)?)
	}
}

/// The body shape shared by every endpoint.
///
/// The endpoint's own fields go to [`payload`](Body::payload), which is [`None`]
/// when they are missing, typically alongside an [`error`](Body::error).
/// On success, fields of the wrong shape fail the decoding; on failure they are ignored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Body<T> {
	/// Whether the request succeeded.
	pub success: bool,
	/// Failure details.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error: Option<ApiError>,
	/// The endpoint's data.
	#[serde(flatten)]
	pub payload: Option<T>,
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Body<T> {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: Deserializer<'de> {
		#[derive(Deserialize)]
		struct Raw {
			success: bool,
			#[serde(default)]
			error: Option<ApiError>,
			#[serde(flatten)]
			rest: json::Map<String, json::Value>,
		}

		let Raw { success, error, rest } = Raw::deserialize(deserializer)?;
		let payload = if rest.is_empty() {
			None
		} else if success {
			Some(T::deserialize(json::Value::Object(rest)).map_err(<D::Error as de::Error>::custom)?)
		} else {
			T::deserialize(json::Value::Object(rest)).ok()
		};
		Ok(Self { success, error, payload })
	}
}

impl<T> Body<T> {
	/// Turns a failure body into [`Error::ApiError`], and a success body into its payload.
	pub fn into_result(self) -> Result<T, Error> {
		match (self.success, self.error, self.payload) {
			(_, Some(ApiError { code, info }), _) => Err(Error::ApiError { code, info }),
			(true, None, Some(payload)) => Ok(payload),
			(false, None, _) => Err(Error::UnknownApiError),
			(true, None, None) => Err(Error::MissingPayload),
		}
	}
}

/// Failure details in a [`Body`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
	/// The service's error code.
	pub code: u32,
	/// The service's error description.
	#[serde(default)]
	pub info: String,
}
