//! Remote rail API provider.
//!
//! Wraps the third-party `TrainBetweenStation` endpoint:
//! - one GET per search, key and station codes in the URL path
//! - the JSON envelope carries its own `ResponseCode`/`Status` pair, which
//!   must read "200"/"SUCCESS" even when the HTTP status is 200
//! - entries carry no classes or fares; those come from the train-type
//!   heuristics during normalization

mod client;
mod convert;
mod types;

#[cfg(test)]
pub(crate) mod fake;

pub use client::{DEFAULT_BASE_URL, RailApiClient, RailApiConfig, RemoteRailProvider};
pub use convert::convert_envelope;
pub use types::{RemoteTrain, TrainsBetweenStations};
