//! Process configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::cache::CacheConfig;
use crate::rail_api::{DEFAULT_BASE_URL, RailApiConfig};

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Error from reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a whole number of seconds, got {value:?}")]
    InvalidSeconds { var: &'static str, value: String },

    #[error("{var} must be a socket address, got {value:?}")]
    InvalidAddr { var: &'static str, value: String },
}

/// Everything the server binary needs to start.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub rail_api: RailApiConfig,
    /// Station dataset on disk; the embedded dataset is used when unset
    pub stations_path: Option<PathBuf>,
    pub cache: CacheConfig,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut rail_api = RailApiConfig::disabled()
            .with_base_url(var("RAIL_API_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into()))
            .with_enabled(var("USE_REAL_API").is_some_and(|v| is_truthy(&v)));
        rail_api.api_key = var("RAIL_API_KEY");
        if let Some(secs) = parse_seconds("RAIL_API_TIMEOUT_SECS", var("RAIL_API_TIMEOUT_SECS"))? {
            rail_api = rail_api.with_timeout(secs);
        }

        let mut cache = CacheConfig::default();
        if let Some(secs) = parse_seconds("SEARCH_CACHE_TTL_SECS", var("SEARCH_CACHE_TTL_SECS"))? {
            cache.ttl = Duration::from_secs(secs);
        }

        let bind_value = var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = bind_value
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidAddr {
                var: "BIND_ADDR",
                value: bind_value.clone(),
            })?;

        Ok(Self {
            rail_api,
            stations_path: var("STATIONS_PATH").map(PathBuf::from),
            cache,
            bind_addr,
        })
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "true" | "1" | "yes")
}

fn parse_seconds(var: &'static str, value: Option<String>) -> Result<Option<u64>, ConfigError> {
    value
        .map(|v| {
            v.parse()
                .map_err(|_| ConfigError::InvalidSeconds { var, value: v })
        })
        .transpose()
}
