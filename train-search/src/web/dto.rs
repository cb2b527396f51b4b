//! Data transfer objects for web requests and responses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{SearchParams, Station};

/// Query for station autocomplete.
#[derive(Debug, Deserialize)]
pub struct StationSearchRequest {
    /// Partial name or code
    #[serde(default)]
    pub q: String,
}

/// Station autocomplete results.
#[derive(Debug, Serialize)]
pub struct StationSearchResponse {
    pub stations: Vec<Station>,
}

/// Query for a train search.
#[derive(Debug, Deserialize)]
pub struct TrainSearchRequest {
    pub from: String,
    pub to: String,

    /// Travel date as YYYY-MM-DD (defaults to today)
    pub date: Option<String>,

    /// Class alias such as "sleeper" or "3ac"; "all" or absent means no filter
    pub class: Option<String>,

    pub quota: Option<String>,
}

impl TrainSearchRequest {
    /// Convert to search parameters, using `today` when no date was given.
    pub fn into_params(self, today: NaiveDate) -> Result<SearchParams, String> {
        let date = match self.date.as_deref().map(str::trim) {
            None | Some("") => today,
            Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|_| format!("Invalid date: {raw} (expected YYYY-MM-DD)"))?,
        };

        let mut params = SearchParams::new(self.from, self.to, date);
        params.class = self.class;
        params.quota = self.quota;
        Ok(params)
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
