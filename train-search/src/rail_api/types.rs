//! Rail API response DTOs.
//!
//! These map directly to the `TrainBetweenStation` JSON envelope. Fields are
//! optional because the API drops them rather than sending nulls.

use serde::Deserialize;
use serde_json::Value;

/// Code the API reports on success.
pub const SUCCESS_CODE: &str = "200";

/// Status the API reports on success.
pub const SUCCESS_STATUS: &str = "SUCCESS";

/// Envelope returned by `TrainBetweenStation`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrainsBetweenStations {
    /// "200" on success. Sometimes sent as a number.
    pub response_code: Option<Value>,

    /// "SUCCESS" on success.
    pub status: Option<String>,

    /// Number of trains in `trains`.
    pub total_trains: Option<u32>,

    /// Trains running between the two stations.
    pub trains: Option<Vec<RemoteTrain>>,

    /// Error description on failure.
    pub message: Option<String>,
}

impl TrainsBetweenStations {
    /// Response code as text, whatever JSON type it arrived as.
    pub fn code(&self) -> String {
        match &self.response_code {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code() == SUCCESS_CODE && self.status.as_deref() == Some(SUCCESS_STATUS)
    }
}

/// One train entry in the envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RemoteTrain {
    pub train_no: Option<String>,
    pub train_name: Option<String>,
    /// Origin station code.
    pub source: Option<String>,
    /// Destination station code.
    pub destination: Option<String>,
    pub departure_time: Option<String>,
    pub arrival_time: Option<String>,
    /// Journey time such as "17:35" or "17h 35m".
    pub travel_time: Option<String>,
    /// Category code such as "SUF", "RAJ", "MEX".
    pub train_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_success_envelope() {
        let json = r#"{
            "ResponseCode": "200",
            "Status": "SUCCESS",
            "TotalTrains": 1,
            "Trains": [
                {
                    "TrainNo": "12565",
                    "TrainName": "BIHAR S KRANTI",
                    "Source": "DBG",
                    "ArrivalTime": "08:15",
                    "Destination": "NDLS",
                    "DepartureTime": "14:40",
                    "TravelTime": "17:35",
                    "TrainType": "SUF"
                }
            ]
        }"#;

        let envelope: TrainsBetweenStations = serde_json::from_str(json).unwrap();
        assert!(envelope.is_success());
        assert_eq!(envelope.total_trains, Some(1));

        let trains = envelope.trains.unwrap();
        assert_eq!(trains[0].train_no.as_deref(), Some("12565"));
        assert_eq!(trains[0].train_type.as_deref(), Some("SUF"));
    }

    #[test]
    fn numeric_response_code() {
        let envelope: TrainsBetweenStations =
            serde_json::from_str(r#"{"ResponseCode": 200, "Status": "SUCCESS"}"#).unwrap();
        assert_eq!(envelope.code(), "200");
        assert!(envelope.is_success());
    }

    #[test]
    fn failure_envelope() {
        let envelope: TrainsBetweenStations = serde_json::from_str(
            r#"{"ResponseCode": "204", "Status": "FAILED", "Message": "No trains"}"#,
        )
        .unwrap();
        assert!(!envelope.is_success());
        assert!(envelope.trains.is_none());
    }
}
