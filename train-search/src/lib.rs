//! Train search server.
//!
//! Answers "which trains run from A to B?" by asking a chain of data
//! sources in order (remote rail API, curated routes, generic fallback),
//! caching each answer for a few minutes.

pub mod cache;
pub mod config;
pub mod domain;
pub mod providers;
pub mod rail_api;
pub mod search;
pub mod stations;
pub mod web;
