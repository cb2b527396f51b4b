//! Caching layer for search responses.
//!
//! Entries are keyed by (from, to, date) and stay fresh for a fixed TTL
//! measured by an injectable [`Clock`]. Stale entries are never swept; they
//! read as misses until the next successful search overwrites them.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use moka::future::Cache as MokaCache;

use crate::domain::SearchResponse;

/// Cache key for searches: (origin, destination, travel date), with origin
/// and destination normalized by [`crate::domain::normalize_code`].
pub type SearchKey = (String, String, NaiveDate);

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        let by = TimeDelta::from_std(by).unwrap_or(TimeDelta::MAX);
        *now = now.checked_add_signed(by).unwrap_or(DateTime::<Utc>::MAX_UTC);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// How long an entry counts as fresh.
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(5 * 60),
        }
    }
}

/// A stored response with its creation time.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub response: Arc<SearchResponse>,
    pub created_at: DateTime<Utc>,
}

/// In-memory search cache.
pub struct SearchCache {
    /// Unbounded and without built-in expiry: freshness is decided by `clock`.
    entries: MokaCache<SearchKey, CacheEntry>,

    ttl: TimeDelta,

    clock: Arc<dyn Clock>,
}

impl SearchCache {
    /// Create a cache on the system clock.
    pub fn new(config: &CacheConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a cache on a caller-supplied clock.
    pub fn with_clock(config: &CacheConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: MokaCache::builder().build(),
            ttl: TimeDelta::from_std(config.ttl).unwrap_or(TimeDelta::MAX),
            clock,
        }
    }

    /// Current time according to the cache's clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Fetch a fresh entry. Stale entries read as misses but stay stored.
    pub async fn get(&self, key: &SearchKey) -> Option<Arc<SearchResponse>> {
        let entry = self.entries.get(key).await?;
        let age = self.now().signed_duration_since(entry.created_at);
        (age < self.ttl).then_some(entry.response)
    }

    /// Store a response, replacing any previous entry for the key.
    pub async fn put(&self, key: SearchKey, response: Arc<SearchResponse>) {
        let entry = CacheEntry {
            response,
            created_at: self.now(),
        };
        self.entries.insert(key, entry).await;
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.entries.invalidate_all();
    }

    /// Number of stored entries, fresh or stale.
    pub async fn entry_count(&self) -> u64 {
        self.entries.run_pending_tasks().await;
        self.entries.entry_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap()
    }

    fn key(from: &str, to: &str) -> SearchKey {
        (
            from.to_string(),
            to.to_string(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    fn response(clock: &ManualClock) -> Arc<SearchResponse> {
        let params = crate::domain::SearchParams::new(
            "DBG",
            "NDLS",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );
        Arc::new(SearchResponse::success(vec![], params, clock.now()))
    }

    fn cache_with_clock() -> (SearchCache, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(start()));
        let cache = SearchCache::with_clock(&CacheConfig::default(), clock.clone());
        (cache, clock)
    }

    #[test]
    fn default_config() {
        assert_eq!(CacheConfig::default().ttl, Duration::from_secs(300));
    }

    #[tokio::test]
    async fn hit_within_ttl_returns_same_object() {
        let (cache, clock) = cache_with_clock();
        let stored = response(&clock);
        cache.put(key("DBG", "NDLS"), stored.clone()).await;

        clock.advance(Duration::from_secs(299));
        let hit = cache.get(&key("DBG", "NDLS")).await.unwrap();
        assert!(Arc::ptr_eq(&hit, &stored));
    }

    #[tokio::test]
    async fn entry_expires_at_ttl() {
        let (cache, clock) = cache_with_clock();
        cache.put(key("DBG", "NDLS"), response(&clock)).await;

        clock.advance(Duration::from_secs(300));
        assert!(cache.get(&key("DBG", "NDLS")).await.is_none());

        // Stale entries are not swept.
        assert_eq!(cache.entry_count().await, 1);
    }

    #[tokio::test]
    async fn put_overwrites_and_refreshes() {
        let (cache, clock) = cache_with_clock();
        cache.put(key("DBG", "NDLS"), response(&clock)).await;
        clock.advance(Duration::from_secs(400));

        let fresh = response(&clock);
        cache.put(key("DBG", "NDLS"), fresh.clone()).await;
        let hit = cache.get(&key("DBG", "NDLS")).await.unwrap();
        assert!(Arc::ptr_eq(&hit, &fresh));
        assert_eq!(cache.entry_count().await, 1);
    }

    #[tokio::test]
    async fn keys_are_independent() {
        let (cache, clock) = cache_with_clock();
        cache.put(key("DBG", "NDLS"), response(&clock)).await;
        assert!(cache.get(&key("NDLS", "DBG")).await.is_none());
    }

    #[tokio::test]
    async fn clear_drops_everything() {
        let (cache, clock) = cache_with_clock();
        cache.put(key("DBG", "NDLS"), response(&clock)).await;
        cache.put(key("MAS", "SBC"), response(&clock)).await;

        cache.clear();
        assert!(cache.get(&key("DBG", "NDLS")).await.is_none());
        assert!(cache.get(&key("MAS", "SBC")).await.is_none());
    }

    #[test]
    fn manual_clock_advances() {
        let clock = ManualClock::new(start());
        clock.advance(Duration::from_secs(90));
        assert_eq!(clock.now(), start() + TimeDelta::seconds(90));
    }
}
