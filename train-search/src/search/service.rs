//! Train search orchestration.
//!
//! A search is a single pass: cache lookup, then providers in priority
//! order until one answers, then class filtering. Nothing escapes as an
//! error; failures become a `success = false` response.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tracing::{debug, error, trace, warn};

use crate::cache::{SearchCache, SearchKey};
use crate::domain::{SearchParams, SearchResponse, Train, normalize_code};
use crate::providers::{GenericFallback, LocalRouteDatabase, ProviderError, TrainProvider};
use crate::rail_api::{RailApiConfig, RemoteRailProvider};

use super::filter::filter_by_class;

/// Error from a search pass. Never returned to callers of
/// [`TrainSearchService::search_trains`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum SearchError {
    /// Origin or destination is blank
    #[error("invalid search request: {0}")]
    InvalidRequest(String),

    /// A provider panicked
    #[error("search aborted: {0}")]
    Panicked(String),
}

/// Build the cache key for a search. Any non-blank origin and destination
/// is accepted; only blank ones are rejected.
pub fn search_key(params: &SearchParams) -> Result<SearchKey, SearchError> {
    let code = |field: &str, value: &str| {
        normalize_code(value)
            .ok_or_else(|| SearchError::InvalidRequest(format!("{field} is blank")))
    };
    Ok((code("from", &params.from)?, code("to", &params.to)?, params.date))
}

/// Train search over an ordered list of providers with a response cache.
pub struct TrainSearchService {
    providers: Vec<Box<dyn TrainProvider>>,
    cache: SearchCache,
}

impl TrainSearchService {
    /// Create a service. Providers are tried in the order given.
    pub fn new(providers: Vec<Box<dyn TrainProvider>>, cache: SearchCache) -> Self {
        Self { providers, cache }
    }

    /// The standard chain: remote API, curated routes, generic fallback.
    pub fn with_default_providers(
        remote: RailApiConfig,
        cache: SearchCache,
    ) -> Result<Self, ProviderError> {
        let providers: Vec<Box<dyn TrainProvider>> = vec![
            Box::new(RemoteRailProvider::new(remote)?),
            Box::new(LocalRouteDatabase::builtin()?),
            Box::new(GenericFallback),
        ];
        Ok(Self::new(providers, cache))
    }

    /// Provider names in priority order.
    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// The response cache.
    pub fn cache(&self) -> &SearchCache {
        &self.cache
    }

    /// Search for trains. Always returns a response; on failure it has
    /// `success = false` and no trains.
    pub async fn search_trains(&self, params: &SearchParams) -> Arc<SearchResponse> {
        let outcome = AssertUnwindSafe(self.try_search(params))
            .catch_unwind()
            .await
            .unwrap_or_else(|panic| {
                let message = panic
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| panic.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                Err(SearchError::Panicked(message))
            });

        outcome.unwrap_or_else(|e| {
            error!(from = %params.from, to = %params.to, error = %e, "train search failed");
            Arc::new(SearchResponse::failure(params.clone(), self.cache.now()))
        })
    }

    async fn try_search(&self, params: &SearchParams) -> Result<Arc<SearchResponse>, SearchError> {
        let key = search_key(params)?;

        // Cached responses are unfiltered; the class filter runs per call.
        let unfiltered = match self.cache.get(&key).await {
            Some(hit) => {
                debug!(from = %key.0, to = %key.1, date = %key.2, "search cache hit");
                hit
            }
            None => {
                debug!(from = %key.0, to = %key.1, date = %key.2, "search cache miss");
                let trains = self.fetch(params).await;
                let response = Arc::new(SearchResponse::success(
                    trains,
                    params.without_class(),
                    self.cache.now(),
                ));
                self.cache.put(key, response.clone()).await;
                response
            }
        };

        let Some(code) = params.class_filter() else {
            return Ok(unfiltered);
        };

        let trains = filter_by_class(&unfiltered.trains, &code);
        trace!(class = %code, kept = trains.len(), "class filter applied");
        Ok(Arc::new(SearchResponse::success(
            trains,
            params.clone(),
            unfiltered.timestamp,
        )))
    }

    /// Ask each provider in turn; the first non-empty answer wins.
    async fn fetch(&self, params: &SearchParams) -> Vec<Train> {
        for provider in &self.providers {
            match provider.attempt(params).await {
                Ok(Some(mut trains)) => {
                    trains.retain(|t| !t.classes.is_empty());
                    if trains.is_empty() {
                        trace!(provider = provider.name(), "provider returned no usable trains");
                        continue;
                    }
                    debug!(provider = provider.name(), count = trains.len(), "provider answered");
                    return trains;
                }
                Ok(None) => trace!(provider = provider.name(), "provider not applicable"),
                Err(e) => warn!(
                    provider = provider.name(),
                    error = %e,
                    body = e.body().unwrap_or_default(),
                    "provider failed"
                ),
            }
        }

        Vec::new()
    }
}
