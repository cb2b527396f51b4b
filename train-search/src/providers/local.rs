//! Curated route database bundled with the service.
//!
//! Maps route keys like `"DBG-NDLS"` to hand-maintained train lists. A
//! search checks the exact key, then the reversed key, and returns the first
//! match without merging directions.

use std::collections::HashMap;

use futures::FutureExt;
use serde::Deserialize;
use tracing::trace;

use crate::domain::{ClassCode, SearchParams, Train, TrainClass, normalize_code};

use super::error::ProviderError;
use super::heuristics::TrainProfile;
use super::normalize::{DEFAULT_DURATION, DEFAULT_TRAIN_TYPE, Normalize, or_default, running_days};
use super::{Attempt, TrainProvider};

/// Embedded route dataset.
const BUILTIN_ROUTES: &str = include_str!("../../data/local_routes.json");

/// Build the route key for a pair of normalized station codes.
pub fn route_key(from: &str, to: &str) -> String {
    format!("{from}-{to}")
}

/// A class entry as stored in the route dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct LocalClassRecord {
    pub code: ClassCode,
    pub fare: u32,
    pub availability: Option<String>,
    pub seats: Option<u32>,
}

/// A train as stored in the route dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct LocalTrainRecord {
    pub number: String,
    pub name: String,
    pub from: String,
    pub to: String,
    pub departure: String,
    pub arrival: String,
    pub duration: Option<String>,
    pub days: Option<Vec<String>>,
    #[serde(rename = "type")]
    pub train_type: Option<String>,
    pub distance: Option<u32>,
    #[serde(default)]
    pub classes: Vec<LocalClassRecord>,
    pub amenities: Option<Vec<String>>,
}

impl Normalize for LocalTrainRecord {
    fn normalize(&self, _params: &SearchParams) -> Train {
        let classes = if self.classes.is_empty() {
            TrainProfile::classify(self.train_type.as_deref(), &self.name).classes()
        } else {
            self.classes
                .iter()
                .map(|c| {
                    let class =
                        TrainClass::new(c.code, c.fare, or_default(c.availability.as_deref(), "AVAILABLE"));
                    match c.seats {
                        Some(seats) => class.with_seats(seats),
                        None => class,
                    }
                })
                .collect()
        };
        let (days, running_days) = running_days(self.days.as_deref());

        Train {
            train_number: self.number.clone(),
            train_name: self.name.clone(),
            from: self.from.clone(),
            to: self.to.clone(),
            departure_time: self.departure.clone(),
            arrival_time: self.arrival.clone(),
            duration: or_default(self.duration.as_deref(), DEFAULT_DURATION),
            days,
            classes,
            train_type: or_default(self.train_type.as_deref(), DEFAULT_TRAIN_TYPE),
            running_days,
            distance: self.distance,
            amenities: self.amenities.clone().unwrap_or_default(),
        }
    }
}

/// Static route → trains table.
#[derive(Debug, Clone)]
pub struct LocalRouteDatabase {
    routes: HashMap<String, Vec<LocalTrainRecord>>,
}

impl LocalRouteDatabase {
    /// Load the dataset compiled into the binary.
    pub fn builtin() -> Result<Self, ProviderError> {
        Self::from_json(BUILTIN_ROUTES)
    }

    /// Parse a JSON object of route key → train records.
    ///
    /// Keys are normalized like search input; two keys that normalize to the
    /// same route are an error.
    pub fn from_json(json: &str) -> Result<Self, ProviderError> {
        let raw: HashMap<String, Vec<LocalTrainRecord>> =
            serde_json::from_str(json).map_err(|e| ProviderError::Dataset(e.to_string()))?;

        let mut routes = HashMap::with_capacity(raw.len());
        for (key, trains) in raw {
            let normalized = normalize_code(&key)
                .ok_or_else(|| ProviderError::Dataset("blank route key".to_string()))?;
            if routes.insert(normalized.clone(), trains).is_some() {
                return Err(ProviderError::Dataset(format!(
                    "duplicate route {normalized} (from key {key:?})"
                )));
            }
        }

        Ok(Self { routes })
    }

    /// Records for a route, trying the exact then the reversed direction.
    pub fn lookup(&self, from: &str, to: &str) -> Option<&[LocalTrainRecord]> {
        self.routes
            .get(&route_key(from, to))
            .or_else(|| self.routes.get(&route_key(to, from)))
            .map(Vec::as_slice)
    }

    /// Number of curated routes.
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    fn trains_for(&self, params: &SearchParams) -> Option<Vec<Train>> {
        let from = normalize_code(&params.from)?;
        let to = normalize_code(&params.to)?;

        let Some(records) = self.lookup(&from, &to) else {
            trace!(route = %route_key(&from, &to), "no curated route");
            return None;
        };

        Some(records.iter().map(|r| r.normalize(params)).collect())
    }
}

impl TrainProvider for LocalRouteDatabase {
    fn name(&self) -> &'static str {
        "local"
    }

    fn attempt<'a>(&'a self, params: &'a SearchParams) -> Attempt<'a> {
        futures::future::ready(Ok(self.trains_for(params))).boxed()
    }
}
