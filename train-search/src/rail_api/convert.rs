//! Conversion from rail API DTOs to the canonical train model.

use crate::domain::{SearchParams, Train};
use crate::providers::{
    DEFAULT_DURATION, DEFAULT_TRAIN_TYPE, Normalize, ProviderError, TrainProfile, or_default,
    running_days,
};

use super::types::{RemoteTrain, TrainsBetweenStations};

impl Normalize for RemoteTrain {
    fn normalize(&self, params: &SearchParams) -> Train {
        let name = or_default(self.train_name.as_deref(), "");
        let profile = TrainProfile::classify(self.train_type.as_deref(), &name);
        let (days, running_days) = running_days(None);

        Train {
            train_number: or_default(self.train_no.as_deref(), ""),
            train_name: name,
            from: or_default(self.source.as_deref(), params.from.trim()).to_uppercase(),
            to: or_default(self.destination.as_deref(), params.to.trim()).to_uppercase(),
            departure_time: or_default(self.departure_time.as_deref(), ""),
            arrival_time: or_default(self.arrival_time.as_deref(), ""),
            duration: format_travel_time(self.travel_time.as_deref()),
            days,
            classes: profile.classes(),
            train_type: or_default(self.train_type.as_deref(), DEFAULT_TRAIN_TYPE),
            running_days,
            distance: None,
            amenities: profile.amenities(),
        }
    }
}

/// Render the API's travel time as "Xh Ym".
///
/// Accepts "HH:MM"; any other non-blank text passes through unchanged.
fn format_travel_time(raw: Option<&str>) -> String {
    let raw = or_default(raw, DEFAULT_DURATION);
    match raw.split_once(':') {
        Some((h, m)) => match (h.trim().parse::<u32>(), m.trim().parse::<u32>()) {
            (Ok(h), Ok(m)) => format!("{h}h {m}m"),
            _ => raw,
        },
        None => raw,
    }
}

/// Validate an envelope and convert its trains.
///
/// A failure envelope is an error; a success envelope with no trains yields
/// an empty list.
pub fn convert_envelope(
    envelope: TrainsBetweenStations,
    params: &SearchParams,
) -> Result<Vec<Train>, ProviderError> {
    if !envelope.is_success() {
        return Err(ProviderError::Upstream {
            code: envelope.code(),
            status: envelope.status.unwrap_or_default(),
            message: envelope.message.unwrap_or_else(|| "no message".to_string()),
        });
    }

    Ok(envelope
        .trains
        .unwrap_or_default()
        .iter()
        .map(|t| t.normalize(params))
        .collect())
}
