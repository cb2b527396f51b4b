//! Application state for the web layer.

use std::sync::Arc;

use crate::search::TrainSearchService;
use crate::stations::StationIndex;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Train search with its response cache
    pub search: Arc<TrainSearchService>,

    /// Station autocomplete index
    pub stations: Arc<StationIndex>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(search: TrainSearchService, stations: StationIndex) -> Self {
        Self {
            search: Arc::new(search),
            stations: Arc::new(stations),
        }
    }
}
