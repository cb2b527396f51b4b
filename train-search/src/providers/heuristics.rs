//! Train-type heuristics for sources that don't publish classes or fares.
//!
//! Trains are sorted into three tiers by keywords in their type and name.
//! Each tier has a fixed class/fare schedule and amenity list.

use crate::domain::{ClassCode, TrainClass};

/// Availability text attached to heuristic classes.
const DEFAULT_AVAILABILITY: &str = "AVAILABLE";

/// Fare tier of a train.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainTier {
    /// Rajdhani, Shatabdi, Duronto, Vande Bharat, Tejas and other superfast services.
    Premium,
    /// Express and mail trains.
    Express,
    /// Everything else (passenger, MEMU, DEMU...).
    Generic,
}

/// Tier plus whether the train is an all-seated day train.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainProfile {
    pub tier: TrainTier,
    pub chair_car: bool,
}

const CHAIR_CAR_KEYWORDS: &[&str] = &["SHATABDI", "SHTB", "SHT", "VANDE", "TEJAS"];
const PREMIUM_KEYWORDS: &[&str] = &[
    "RAJDHANI", "RAJ", "DURONTO", "DRNT", "SUPERFAST", "SUF", "SF",
];
const EXPRESS_KEYWORDS: &[&str] = &["EXPRESS", "EXP", "MAIL", "MEX"];

impl TrainProfile {
    /// Classify a train from its (optional) type label and name.
    pub fn classify(train_type: Option<&str>, name: &str) -> Self {
        let words: Vec<String> = train_type
            .unwrap_or_default()
            .split(|c: char| !c.is_ascii_alphanumeric())
            .chain(name.split(|c: char| !c.is_ascii_alphanumeric()))
            .filter(|w| !w.is_empty())
            .map(str::to_ascii_uppercase)
            .collect();
        let has = |keywords: &[&str]| words.iter().any(|w| keywords.contains(&w.as_str()));

        if has(CHAIR_CAR_KEYWORDS) {
            Self {
                tier: TrainTier::Premium,
                chair_car: true,
            }
        } else if has(PREMIUM_KEYWORDS) {
            Self {
                tier: TrainTier::Premium,
                chair_car: false,
            }
        } else if has(EXPRESS_KEYWORDS) {
            Self {
                tier: TrainTier::Express,
                chair_car: false,
            }
        } else {
            Self {
                tier: TrainTier::Generic,
                chair_car: false,
            }
        }
    }

    /// Standard class schedule for this profile. Never empty.
    pub fn classes(&self) -> Vec<TrainClass> {
        let schedule: &[(ClassCode, u32)] = match (self.tier, self.chair_car) {
            (TrainTier::Premium, true) => {
                &[(ClassCode::ChairCar, 1250), (ClassCode::ExecutiveChair, 2450)]
            }
            (TrainTier::Premium, false) => &[
                (ClassCode::Ac3Tier, 1850),
                (ClassCode::Ac2Tier, 2650),
                (ClassCode::AcFirst, 4450),
            ],
            (TrainTier::Express, _) => &[
                (ClassCode::Sleeper, 580),
                (ClassCode::Ac3Tier, 1520),
                (ClassCode::Ac2Tier, 2180),
                (ClassCode::AcFirst, 3650),
            ],
            (TrainTier::Generic, _) => &[
                (ClassCode::General, 165),
                (ClassCode::Sleeper, 390),
                (ClassCode::Ac3Tier, 1050),
            ],
        };

        schedule
            .iter()
            .map(|&(code, fare)| TrainClass::new(code, fare, DEFAULT_AVAILABILITY))
            .collect()
    }

    /// On-board amenities typical for this tier.
    pub fn amenities(&self) -> Vec<String> {
        let amenities: &[&str] = match self.tier {
            TrainTier::Premium => &[
                "Pantry Car",
                "Bedding",
                "Charging Point",
                "Meals Included",
            ],
            TrainTier::Express => &["Pantry Car", "Charging Point"],
            TrainTier::Generic => &[],
        };
        amenities.iter().map(|a| a.to_string()).collect()
    }
}
