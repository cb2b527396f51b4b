//! Class filtering.

use crate::domain::Train;

/// Keep the trains offering class `code`.
pub fn filter_by_class(trains: &[Train], code: &str) -> Vec<Train> {
    trains.iter().filter(|t| t.has_class(code)).cloned().collect()
}
