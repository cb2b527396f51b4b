//! Station autocomplete index.

use std::path::Path;

use tracing::debug;

use crate::domain::{Station, StationRecord, normalize_code};

use super::error::StationError;
use super::region::{state_for, zone_for};

/// Maximum number of stations returned by a search.
pub const MAX_RESULTS: usize = 15;

/// Embedded default dataset.
const BUILTIN_STATIONS: &str = include_str!("../../data/stations.json");

/// Read-only station lookup, loaded once at startup.
#[derive(Debug, Clone)]
pub struct StationIndex {
    stations: Vec<Station>,
}

impl StationIndex {
    /// Load the dataset compiled into the binary.
    pub fn builtin() -> Result<Self, StationError> {
        Self::from_json(BUILTIN_STATIONS)
    }

    /// Load a dataset from a JSON file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StationError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Parse a JSON array of `{code, name}` records.
    pub fn from_json(json: &str) -> Result<Self, StationError> {
        let records: Vec<StationRecord> =
            serde_json::from_str(json).map_err(|e| StationError::Json {
                message: e.to_string(),
            })?;
        Ok(Self::from_records(records))
    }

    /// Build the index from raw records, skipping any with a blank code.
    pub fn from_records(records: Vec<StationRecord>) -> Self {
        let stations = records
            .into_iter()
            .filter_map(|r| {
                let Some(code) = normalize_code(&r.code) else {
                    debug!(name = %r.name, "skipping station record without a code");
                    return None;
                };
                Some(Station {
                    state: state_for(&r.name).to_string(),
                    zone: zone_for(&code).to_string(),
                    code,
                    name: r.name,
                })
            })
            .collect();

        Self { stations }
    }

    /// Find stations whose name or code contains `query`, ignoring case.
    ///
    /// Results keep dataset order and are capped at [`MAX_RESULTS`].
    pub fn search(&self, query: &str) -> Vec<Station> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        self.stations
            .iter()
            .filter(|s| {
                s.name.to_lowercase().contains(&query)
                    || s.code.to_lowercase().contains(&query)
            })
            .take(MAX_RESULTS)
            .cloned()
            .collect()
    }

    /// Look up a station by code, ignoring case and surrounding whitespace.
    pub fn get(&self, code: &str) -> Option<&Station> {
        let code = normalize_code(code)?;
        self.stations.iter().find(|s| s.code == code)
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn record(code: &str, name: &str) -> StationRecord {
        StationRecord {
            code: code.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn builtin_dataset_loads() {
        let index = StationIndex::builtin().unwrap();
        assert!(index.len() > 50);
        let dbg = index.get("dbg").unwrap();
        assert_eq!(dbg.name, "Darbhanga Junction");
        assert_eq!(dbg.state, "Bihar");
        assert_eq!(dbg.zone, "ECR");
    }

    #[test]
    fn search_del_matches_name_or_code() {
        let index = StationIndex::builtin().unwrap();
        let results = index.search("DEL");

        assert!(!results.is_empty());
        assert!(results.len() <= MAX_RESULTS);
        for s in &results {
            assert!(
                s.name.to_uppercase().contains("DEL") || s.code.contains("DEL"),
                "{} ({}) does not match",
                s.name,
                s.code
            );
        }
        assert!(results.iter().any(|s| s.code == "NDLS"));
    }

    #[test]
    fn search_matches_code_case_insensitively() {
        let index = StationIndex::builtin().unwrap();
        let results = index.search("hwh");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Howrah Junction");
        assert_eq!(results[0].state, "West Bengal");
    }

    #[test]
    fn search_caps_results() {
        let records = (0..40)
            .map(|i| record(&format!("A{i:02}"), &format!("Alpha Halt {i}")))
            .collect();
        let index = StationIndex::from_records(records);

        assert_eq!(index.search("alpha").len(), MAX_RESULTS);
        assert_eq!(index.search("A05").len(), 1);
    }

    #[test]
    fn blank_or_unmatched_query_is_empty() {
        let index = StationIndex::builtin().unwrap();
        assert!(index.search("").is_empty());
        assert!(index.search("   ").is_empty());
        assert!(index.search("zzzzqq").is_empty());
    }

    #[test]
    fn unknown_city_and_zone_use_defaults() {
        let index = StationIndex::from_records(vec![record("qqq", "Nowhere Halt")]);
        let s = &index.search("nowhere")[0];
        assert_eq!(s.code, "QQQ");
        assert_eq!(s.state, "India");
        assert_eq!(s.zone, "Unknown");
    }

    #[test]
    fn blank_codes_are_skipped() {
        let index = StationIndex::from_records(vec![
            record("NDLS", "New Delhi"),
            record("", "Empty"),
            record("   ", "Spaces"),
        ]);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn single_letter_code_is_indexed() {
        let index = StationIndex::from_json(r#"[{"code": "R", "name": "Raipur Junction"}]"#).unwrap();

        let results = index.search("raipur");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].code, "R");
        assert_eq!(results[0].state, "Chhattisgarh");
        assert_eq!(results[0].zone, "SECR");
        assert_eq!(index.get("r").unwrap().name, "Raipur Junction");
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"code": "PNBE", "name": "Patna Junction"}}, {{"code": "GAYA", "name": "Gaya Junction"}}]"#
        )
        .unwrap();

        let index = StationIndex::load(file.path()).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.search("patna")[0].zone, "ECR");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();

        let err = StationIndex::load(file.path()).unwrap_err();
        assert!(matches!(err, StationError::Json { .. }));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = StationIndex::load("/nonexistent/stations.json").unwrap_err();
        assert!(matches!(err, StationError::Io(_)));
    }
}
