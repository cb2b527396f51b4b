//! Canonical train model shared by every provider.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Travel class codes. The vocabulary is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassCode {
    #[serde(rename = "SL")]
    Sleeper,
    #[serde(rename = "3A")]
    Ac3Tier,
    #[serde(rename = "2A")]
    Ac2Tier,
    #[serde(rename = "1A")]
    AcFirst,
    #[serde(rename = "CC")]
    ChairCar,
    #[serde(rename = "EC")]
    ExecutiveChair,
    #[serde(rename = "2S")]
    SecondSitting,
    #[serde(rename = "3E")]
    Ac3Economy,
    #[serde(rename = "GN")]
    General,
}

impl ClassCode {
    pub const ALL: [ClassCode; 9] = [
        ClassCode::Sleeper,
        ClassCode::Ac3Tier,
        ClassCode::Ac2Tier,
        ClassCode::AcFirst,
        ClassCode::ChairCar,
        ClassCode::ExecutiveChair,
        ClassCode::SecondSitting,
        ClassCode::Ac3Economy,
        ClassCode::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClassCode::Sleeper => "SL",
            ClassCode::Ac3Tier => "3A",
            ClassCode::Ac2Tier => "2A",
            ClassCode::AcFirst => "1A",
            ClassCode::ChairCar => "CC",
            ClassCode::ExecutiveChair => "EC",
            ClassCode::SecondSitting => "2S",
            ClassCode::Ac3Economy => "3E",
            ClassCode::General => "GN",
        }
    }

    /// Human-readable class name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ClassCode::Sleeper => "Sleeper",
            ClassCode::Ac3Tier => "AC 3 Tier",
            ClassCode::Ac2Tier => "AC 2 Tier",
            ClassCode::AcFirst => "AC First Class",
            ClassCode::ChairCar => "AC Chair Car",
            ClassCode::ExecutiveChair => "Executive Chair Car",
            ClassCode::SecondSitting => "Second Sitting",
            ClassCode::Ac3Economy => "AC 3 Economy",
            ClassCode::General => "General",
        }
    }
}

impl fmt::Display for ClassCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A bookable class on a train.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainClass {
    pub code: ClassCode,
    pub name: String,
    /// Fare in whole currency units.
    pub fare: u32,
    /// Free-text status such as "AVAILABLE-0042" or "WL 12".
    pub availability: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seats: Option<u32>,
}

impl TrainClass {
    /// A class with its standard display name.
    pub fn new(code: ClassCode, fare: u32, availability: impl Into<String>) -> Self {
        Self {
            code,
            name: code.display_name().to_string(),
            fare,
            availability: availability.into(),
            seats: None,
        }
    }

    pub fn with_seats(mut self, seats: u32) -> Self {
        self.seats = Some(seats);
        self
    }
}

/// A train in canonical form.
///
/// Providers never hand out a `Train` without at least one class; the
/// normalizers fill in a class schedule when the source has none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Train {
    pub train_number: String,
    pub train_name: String,
    pub from: String,
    pub to: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub duration: String,
    /// Weekday abbreviations ("Mon", "Tue", ...) or `["Daily"]`.
    pub days: Vec<String>,
    pub classes: Vec<TrainClass>,
    #[serde(rename = "type")]
    pub train_type: String,
    pub running_days: String,
    /// Route length in kilometres, when known.
    pub distance: Option<u32>,
    pub amenities: Vec<String>,
}

impl Train {
    /// Whether this train offers the given class code.
    pub fn has_class(&self, code: &str) -> bool {
        self.classes.iter().any(|c| c.code.as_str() == code)
    }
}
