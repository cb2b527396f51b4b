//! Search request and response types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::train::{ClassCode, Train};

/// Parameters of a train search.
///
/// `date` only participates in the cache key; it does not filter which
/// trains exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub from: String,
    pub to: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub quota: Option<String>,
}

impl SearchParams {
    pub fn new(from: impl Into<String>, to: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            date,
            class: None,
            quota: None,
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_quota(mut self, quota: impl Into<String>) -> Self {
        self.quota = Some(quota.into());
        self
    }

    /// A copy with the class filter removed.
    pub fn without_class(&self) -> Self {
        Self {
            class: None,
            ..self.clone()
        }
    }

    /// The class code to filter by, or `None` when every class is wanted.
    pub fn class_filter(&self) -> Option<String> {
        let class = self.class.as_deref()?.trim();
        if class.is_empty() || class.eq_ignore_ascii_case("all") {
            return None;
        }
        Some(resolve_class_code(class))
    }
}

/// Map a user-facing class name to a class code.
///
/// Known aliases map onto the fixed vocabulary; anything else is uppercased
/// and used verbatim.
pub fn resolve_class_code(input: &str) -> String {
    let code = match input.trim().to_ascii_lowercase().as_str() {
        "sleeper" => ClassCode::Sleeper,
        "3ac" => ClassCode::Ac3Tier,
        "2ac" => ClassCode::Ac2Tier,
        "1ac" => ClassCode::AcFirst,
        "cc" => ClassCode::ChairCar,
        "2s" => ClassCode::SecondSitting,
        "3e" => ClassCode::Ac3Economy,
        _ => return input.trim().to_uppercase(),
    };
    code.as_str().to_string()
}

/// Result of a train search.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub success: bool,
    pub trains: Vec<Train>,
    pub search_params: SearchParams,
    pub total_results: usize,
    pub timestamp: DateTime<Utc>,
}

impl SearchResponse {
    pub fn success(trains: Vec<Train>, params: SearchParams, timestamp: DateTime<Utc>) -> Self {
        Self {
            success: true,
            total_results: trains.len(),
            trains,
            search_params: params,
            timestamp,
        }
    }

    pub fn failure(params: SearchParams, timestamp: DateTime<Utc>) -> Self {
        Self {
            success: false,
            trains: Vec::new(),
            search_params: params,
            total_results: 0,
            timestamp,
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Resolution never yields lowercase letters.
        #[test]
        fn resolved_code_is_uppercase(s in "[a-zA-Z0-9]{1,8}") {
            let code = resolve_class_code(&s);
            prop_assert_eq!(code.clone(), code.to_uppercase());
        }

        /// Inputs outside the alias table come back as their uppercased literal.
        #[test]
        fn unknown_inputs_uppercased(s in "[a-z]{4,8}".prop_filter("not an alias", |s| s != "sleeper")) {
            prop_assert_eq!(resolve_class_code(&s), s.to_uppercase());
        }
    }
}
