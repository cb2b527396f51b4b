//! Train data sources.
//!
//! Every source implements [`TrainProvider`]. The search service holds them
//! in priority order and takes the first applicable, non-empty answer:
//!
//! - `Ok(Some(trains))`: the source has an answer
//! - `Ok(None)`: the source has no opinion on this route
//! - `Err(_)`: the source failed; logged and treated like `Ok(None)`

mod error;
mod fallback;
mod heuristics;
mod local;
mod normalize;

use futures::future::BoxFuture;

use crate::domain::{SearchParams, Train};

pub use error::ProviderError;
pub use fallback::{FallbackTemplate, GenericFallback, TEMPLATES};
pub use heuristics::{TrainProfile, TrainTier};
pub use local::{LocalClassRecord, LocalRouteDatabase, LocalTrainRecord, route_key};
pub use normalize::{DAILY, DEFAULT_DURATION, DEFAULT_TRAIN_TYPE, Normalize};

pub(crate) use normalize::{or_default, running_days};

/// Pending result of a provider attempt.
pub type Attempt<'a> = BoxFuture<'a, Result<Option<Vec<Train>>, ProviderError>>;

/// A source of trains for a route.
pub trait TrainProvider: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Look up trains for the route in `params`.
    fn attempt<'a>(&'a self, params: &'a SearchParams) -> Attempt<'a>;
}
