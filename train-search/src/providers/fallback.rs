//! Synthetic schedules used when no other source knows the route.

use futures::FutureExt;

use crate::domain::{ClassCode, SearchParams, Train, TrainClass};

use super::normalize::{DAILY, Normalize};
use super::{Attempt, TrainProvider};

/// A canned train; only the endpoints vary per search.
#[derive(Debug, Clone, Copy)]
pub struct FallbackTemplate {
    pub number: &'static str,
    pub name: &'static str,
    pub departure: &'static str,
    pub arrival: &'static str,
    pub duration: &'static str,
    pub train_type: &'static str,
    pub classes: &'static [(ClassCode, u32)],
    pub amenities: &'static [&'static str],
}

pub const TEMPLATES: [FallbackTemplate; 2] = [
    FallbackTemplate {
        number: "99001",
        name: "PASSENGER EXPRESS",
        departure: "06:00",
        arrival: "18:30",
        duration: "12h 30m",
        train_type: "Express",
        classes: &[
            (ClassCode::Sleeper, 450),
            (ClassCode::Ac3Tier, 1200),
            (ClassCode::Ac2Tier, 1750),
        ],
        amenities: &["Charging Point"],
    },
    FallbackTemplate {
        number: "99002",
        name: "SUPERFAST EXPRESS",
        departure: "22:15",
        arrival: "09:45",
        duration: "11h 30m",
        train_type: "Superfast",
        classes: &[
            (ClassCode::Sleeper, 520),
            (ClassCode::Ac3Tier, 1380),
            (ClassCode::Ac2Tier, 1990),
            (ClassCode::AcFirst, 3350),
        ],
        amenities: &["Pantry Car", "Charging Point", "Bedding"],
    },
];

impl Normalize for FallbackTemplate {
    fn normalize(&self, params: &SearchParams) -> Train {
        Train {
            train_number: self.number.to_string(),
            train_name: self.name.to_string(),
            from: params.from.trim().to_uppercase(),
            to: params.to.trim().to_uppercase(),
            departure_time: self.departure.to_string(),
            arrival_time: self.arrival.to_string(),
            duration: self.duration.to_string(),
            days: vec![DAILY.to_string()],
            classes: self
                .classes
                .iter()
                .map(|&(code, fare)| TrainClass::new(code, fare, "AVAILABLE"))
                .collect(),
            train_type: self.train_type.to_string(),
            running_days: DAILY.to_string(),
            distance: None,
            amenities: self.amenities.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Always-applicable last resort.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericFallback;

impl GenericFallback {
    pub fn trains(&self, params: &SearchParams) -> Vec<Train> {
        TEMPLATES.iter().map(|t| t.normalize(params)).collect()
    }
}

impl TrainProvider for GenericFallback {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn attempt<'a>(&'a self, params: &'a SearchParams) -> Attempt<'a> {
        futures::future::ready(Ok(Some(self.trains(params)))).boxed()
    }
}
