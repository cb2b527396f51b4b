//! Provider error types.

/// Errors from a train data provider.
///
/// None of these reach search callers: the orchestrator logs them and moves
/// on to the next provider.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid API key or unauthorized
    #[error("unauthorized (check RAIL_API_KEY)")]
    Unauthorized,

    /// API returned a non-success HTTP status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// API answered 2xx but its envelope reports a failure
    #[error("upstream reported {code}/{status}: {message}")]
    Upstream {
        code: String,
        status: String,
        message: String,
    },

    /// Response body was not the expected JSON shape
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// A bundled dataset could not be parsed
    #[error("dataset error: {0}")]
    Dataset(String),
}

impl ProviderError {
    /// Start of the offending response body, when one was captured.
    pub fn body(&self) -> Option<&str> {
        match self {
            ProviderError::Json { body, .. } => body.as_deref(),
            _ => None,
        }
    }
}
