//! [ForexRateAPI](https://forexrateapi.com/) client library.
//!
//! Create a [`Client`], then call one method per endpoint with the endpoint's options struct
//! from [`endpoint`]. Responses come back as they were received; decode the body with
//! [`Response::body`] and check [`Body::success`], or use [`Body::into_result`].
//!
//! Absent options are never sent: [`None`] fields and empty currency lists are dropped from
//! the query, while values such as `0` are kept.

#![deny(missing_docs)]

pub mod client;
pub mod config;
pub mod currency;
pub mod endpoint;
pub mod error;
pub mod params;
pub mod rates;
pub mod region;
pub mod response;

pub use client::Client;
pub use config::Config;
pub use currency::CurrencyCode;
pub use endpoint::{DateType, Endpoint};
pub use error::Error;
pub use rates::Rates;
pub use region::Region;
pub use response::{ApiError, Body, Response};
