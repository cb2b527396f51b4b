//! Train search with provider fallback and caching.
//!
//! Providers are tried in a fixed order (remote API, curated routes,
//! generic fallback) and the answer is cached per route and date. Class
//! filtering is applied on every call, after the cache.

mod filter;
mod service;


pub use filter::filter_by_class;
pub use service::{SearchError, TrainSearchService, search_key};
