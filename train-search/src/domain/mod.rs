//! Domain types for train search.
//!
//! Every provider normalizes into these types, so the orchestrator and
//! HTTP layer never see a provider's raw schema.

mod search;
mod station;
mod train;

pub use search::{SearchParams, SearchResponse, resolve_class_code};
pub use station::{InvalidStationCode, Station, StationCode, StationRecord, normalize_code};
pub use train::{ClassCode, Train, TrainClass};
