//! Normalization from provider-specific shapes into the canonical [`Train`].

use crate::domain::{SearchParams, Train};

/// Duration used when a source omits it.
pub const DEFAULT_DURATION: &str = "0h 0m";

/// Train type used when a source omits it.
pub const DEFAULT_TRAIN_TYPE: &str = "Express";

/// Running-days label for trains without a weekday list.
pub const DAILY: &str = "Daily";

/// A raw provider record that can be turned into a canonical train.
///
/// Each provider implements this for its own record type, so adding a data
/// source means adding one impl rather than touching the orchestrator.
pub trait Normalize {
    /// Build a canonical train. `params` supplies route context for sources
    /// whose records don't name their endpoints.
    fn normalize(&self, params: &SearchParams) -> Train;
}

/// Use the value if present and non-blank, else the default.
pub(crate) fn or_default(value: Option<&str>, default: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

/// Days list and its display form. An absent or empty list means daily.
pub(crate) fn running_days(days: Option<&[String]>) -> (Vec<String>, String) {
    match days {
        Some(days) if !days.is_empty() && !days.iter().any(|d| d == DAILY) => {
            (days.to_vec(), days.join(", "))
        }
        _ => (vec![DAILY.to_string()], DAILY.to_string()),
    }
}
