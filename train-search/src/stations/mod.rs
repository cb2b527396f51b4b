//! Station autocomplete.
//!
//! Provides substring lookup over a static station dataset loaded once at
//! startup. Independent of train search.

mod error;
mod index;
mod region;

pub use error::StationError;
pub use index::{MAX_RESULTS, StationIndex};
pub use region::{DEFAULT_STATE, UNKNOWN_ZONE, state_for, zone_for};
