//! Rail API HTTP client.
//!
//! Issues one `TrainBetweenStation` request per search. The API key travels
//! in the URL path, not a header.

use futures::FutureExt;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use tracing::{debug, trace};

use crate::domain::{SearchParams, StationCode, Train};
use crate::providers::{Attempt, ProviderError, TrainProvider};

use super::convert::convert_envelope;
use super::types::TrainsBetweenStations;

/// Default base URL for the rail API.
pub const DEFAULT_BASE_URL: &str = "https://indianrailapi.com/api/v2";

/// Configuration for the rail API client.
#[derive(Debug, Clone, Default)]
pub struct RailApiConfig {
    /// API key; the provider stays idle without one
    pub api_key: Option<String>,
    /// Base URL for the API
    pub base_url: String,
    /// Real-API mode switch
    pub enabled: bool,
    /// Request timeout in seconds; `None` waits indefinitely
    pub timeout_secs: Option<u64>,
}

impl RailApiConfig {
    /// Create an enabled config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            base_url: DEFAULT_BASE_URL.to_string(),
            enabled: true,
            timeout_secs: None,
        }
    }

    /// A config that never calls the API.
    pub fn disabled() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            ..Self::default()
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Toggle real-API mode.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Whether the remote provider should be attempted at all.
    pub fn is_active(&self) -> bool {
        self.enabled && self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }
}

/// Rail API client.
#[derive(Debug, Clone)]
pub struct RailApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RailApiClient {
    /// Create a new client. Fails if the config has no API key.
    pub fn new(config: RailApiConfig) -> Result<Self, ProviderError> {
        let api_key = config
            .api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or(ProviderError::Unauthorized)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn url(&self, from: &StationCode, to: &StationCode) -> String {
        format!(
            "{}/TrainBetweenStation/apikey/{}/From/{}/To/{}",
            self.base_url, self.api_key, from, to
        )
    }

    /// Fetch the raw envelope for trains between two stations.
    pub async fn trains_between(
        &self,
        from: &StationCode,
        to: &StationCode,
    ) -> Result<TrainsBetweenStations, ProviderError> {
        let response = self.http.get(self.url(from, to)).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(ProviderError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| ProviderError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

/// Remote provider backed by [`RailApiClient`].
///
/// Holds no client when the config is inactive, in which case every attempt
/// is "not applicable".
#[derive(Debug, Clone)]
pub struct RemoteRailProvider {
    client: Option<RailApiClient>,
}

impl RemoteRailProvider {
    pub fn new(config: RailApiConfig) -> Result<Self, ProviderError> {
        let client = if config.is_active() {
            Some(RailApiClient::new(config)?)
        } else {
            None
        };
        Ok(Self { client })
    }

    pub fn is_active(&self) -> bool {
        self.client.is_some()
    }

    async fn fetch(&self, params: &SearchParams) -> Result<Option<Vec<Train>>, ProviderError> {
        let Some(client) = &self.client else {
            return Ok(None);
        };
        // Only codes that are safe to put in the request path go to the API.
        let (Ok(from), Ok(to)) = (
            StationCode::parse_normalized(&params.from),
            StationCode::parse_normalized(&params.to),
        ) else {
            trace!(from = %params.from, to = %params.to, "not an API station code");
            return Ok(None);
        };

        let envelope = client.trains_between(&from, &to).await?;
        let reported = envelope.total_trains;
        let trains = convert_envelope(envelope, params)?;
        debug!(%from, %to, count = trains.len(), ?reported, "rail API answered");

        Ok((!trains.is_empty()).then_some(trains))
    }
}

impl TrainProvider for RemoteRailProvider {
    fn name(&self) -> &'static str {
        "remote"
    }

    fn attempt<'a>(&'a self, params: &'a SearchParams) -> Attempt<'a> {
        self.fetch(params).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rail_api::fake::serve;
    use axum::{Router, extract::Path, http::StatusCode, routing::get};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use chrono::NaiveDate;

    fn params(from: &str, to: &str) -> SearchParams {
        SearchParams::new(from, to, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    }


    const SUCCESS_BODY: &str = r#"{
        "ResponseCode": "200",
        "Status": "SUCCESS",
        "TotalTrains": 1,
        "Trains": [{
            "TrainNo": "12309",
            "TrainName": "RAJENDRA NAGAR RAJDHANI",
            "Source": "PNBE",
            "Destination": "NDLS",
            "DepartureTime": "19:25",
            "ArrivalTime": "07:40",
            "TravelTime": "12:15",
            "TrainType": "RAJ"
        }]
    }"#;

    #[test]
    fn config_builder() {
        let config = RailApiConfig::new("test-key")
            .with_base_url("http://localhost:8080")
            .with_timeout(10);

        assert_eq!(config.api_key.as_deref(), Some("test-key"));
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, Some(10));
        assert!(config.is_active());
    }

    #[test]
    fn config_defaults() {
        let config = RailApiConfig::new("test-key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, None);
    }

    #[test]
    fn inactive_without_key_or_mode() {
        assert!(!RailApiConfig::disabled().is_active());
        assert!(!RailApiConfig::new("key").with_enabled(false).is_active());
        assert!(!RailApiConfig::new("  ").is_active());
    }

    #[test]
    fn url_carries_key_and_codes() {
        let client =
            RailApiClient::new(RailApiConfig::new("k123").with_base_url("http://api.test/v2/"))
                .unwrap();
        let url = client.url(
            &StationCode::parse("DBG").unwrap(),
            &StationCode::parse("NDLS").unwrap(),
        );
        assert_eq!(url, "http://api.test/v2/TrainBetweenStation/apikey/k123/From/DBG/To/NDLS");
    }

    #[tokio::test]
    async fn disabled_provider_is_not_applicable() {
        let provider = RemoteRailProvider::new(RailApiConfig::disabled()).unwrap();
        assert!(!provider.is_active());
        assert!(provider.attempt(&params("PNBE", "NDLS")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn non_code_input_skips_the_api() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let router = Router::new().fallback(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            async { SUCCESS_BODY }
        });
        let base = serve(router).await;
        let provider =
            RemoteRailProvider::new(RailApiConfig::new("secret").with_base_url(base)).unwrap();

        for (from, to) in [("Darbhanga", "New Delhi"), ("DBG", "KSRBEN"), ("N/A", "NDLS")] {
            assert!(provider.attempt(&params(from, to)).await.unwrap().is_none());
        }
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn single_letter_code_reaches_the_api() {
        let router = Router::new().route(
            "/TrainBetweenStation/apikey/:key/From/:from/To/:to",
            get(|Path((_, from, _)): Path<(String, String, String)>| async move {
                assert_eq!(from, "R");
                SUCCESS_BODY
            }),
        );
        let base = serve(router).await;
        let provider =
            RemoteRailProvider::new(RailApiConfig::new("secret").with_base_url(base)).unwrap();

        let trains = provider.attempt(&params("r", "NDLS")).await.unwrap().unwrap();
        assert_eq!(trains.len(), 1);
    }

    #[tokio::test]
    async fn successful_response_is_normalized() {
        let router = Router::new().route(
            "/TrainBetweenStation/apikey/:key/From/:from/To/:to",
            get(|Path((key, from, to)): Path<(String, String, String)>| async move {
                assert_eq!(key, "secret");
                assert_eq!((from.as_str(), to.as_str()), ("PNBE", "NDLS"));
                SUCCESS_BODY
            }),
        );
        let base = serve(router).await;
        let provider =
            RemoteRailProvider::new(RailApiConfig::new("secret").with_base_url(base)).unwrap();

        let trains = provider.attempt(&params("pnbe", "ndls")).await.unwrap().unwrap();
        assert_eq!(trains.len(), 1);
        assert_eq!(trains[0].train_number, "12309");
        assert_eq!(trains[0].duration, "12h 15m");
        assert!(trains[0].has_class("1A"));
    }

    #[tokio::test]
    async fn http_error_is_reported() {
        let router = Router::new().fallback(|| async { (StatusCode::BAD_GATEWAY, "upstream down") });
        let base = serve(router).await;
        let provider =
            RemoteRailProvider::new(RailApiConfig::new("secret").with_base_url(base)).unwrap();

        let err = provider.attempt(&params("PNBE", "NDLS")).await.unwrap_err();
        assert!(matches!(err, ProviderError::Api { status: 502, .. }));
    }

    #[tokio::test]
    async fn malformed_json_is_reported() {
        let router = Router::new().fallback(|| async { "<html>maintenance</html>" });
        let base = serve(router).await;
        let provider =
            RemoteRailProvider::new(RailApiConfig::new("secret").with_base_url(base)).unwrap();

        let err = provider.attempt(&params("PNBE", "NDLS")).await.unwrap_err();
        assert!(matches!(err, ProviderError::Json { .. }));
    }

    #[tokio::test]
    async fn failure_envelope_is_reported() {
        let router = Router::new()
            .fallback(|| async { r#"{"ResponseCode": "204", "Status": "FAILED"}"# });
        let base = serve(router).await;
        let provider =
            RemoteRailProvider::new(RailApiConfig::new("secret").with_base_url(base)).unwrap();

        let err = provider.attempt(&params("PNBE", "NDLS")).await.unwrap_err();
        assert!(matches!(err, ProviderError::Upstream { .. }));
    }

    #[tokio::test]
    async fn empty_train_list_is_not_applicable() {
        let router = Router::new().fallback(|| async {
            r#"{"ResponseCode": "200", "Status": "SUCCESS", "TotalTrains": 0, "Trains": []}"#
        });
        let base = serve(router).await;
        let provider =
            RemoteRailProvider::new(RailApiConfig::new("secret").with_base_url(base)).unwrap();

        assert!(provider.attempt(&params("PNBE", "NDLS")).await.unwrap().is_none());
    }
}
