//! TTL cache capability shared by the fetcher, the fingerprint builder and the
//! matching engine.
//!
//! Each cache class ([`CacheLayer`]) is a [`TtlCache`] over an injected
//! [`CacheBackend`] and [`Clock`]. Staleness is decided on read; nothing is
//! evicted in the background.

mod clock;
mod memory;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::config::CacheConfig;
use crate::github::RawDeveloperData;
use crate::models::{MatchResult, TechFingerprint};

pub use clock::{Clock, ManualClock, SystemClock};
pub use memory::MemoryCacheBackend;

/// A cached payload together with the time it was written.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<T> {
    pub value: T,
    pub stored_at: DateTime<Utc>,
}

impl<T> CacheEntry<T> {
    pub fn new(value: T, stored_at: DateTime<Utc>) -> Self {
        Self { value, stored_at }
    }

    /// `now - stored_at < ttl`. Entries stamped in the future count as fresh.
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        let elapsed = (now - self.stored_at).to_std().unwrap_or_default();
        elapsed < ttl
    }
}

/// Key/value storage behind a [`TtlCache`].
///
/// Implementations do not need locking semantics beyond memory safety:
/// concurrent writes to one key may race and the last writer wins.
#[async_trait]
pub trait CacheBackend<T>: Send + Sync
where
    T: Clone + Send + Sync + 'static,
{
    async fn get(&self, key: &str) -> Option<CacheEntry<T>>;
    async fn set(&self, key: String, entry: CacheEntry<T>);
}

/// A single cache class with a fixed TTL.
pub struct TtlCache<T>
where
    T: Clone + Send + Sync + 'static,
{
    name: &'static str,
    backend: Arc<dyn CacheBackend<T>>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
}

impl<T> Clone for TtlCache<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            backend: Arc::clone(&self.backend),
            clock: Arc::clone(&self.clock),
            ttl: self.ttl,
        }
    }
}

impl<T> TtlCache<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(
        name: &'static str,
        backend: Arc<dyn CacheBackend<T>>,
        clock: Arc<dyn Clock>,
        ttl: Duration,
    ) -> Self {
        Self {
            name,
            backend,
            clock,
            ttl,
        }
    }

    /// Process-local cache class using [`MemoryCacheBackend`].
    pub fn in_memory(name: &'static str, clock: Arc<dyn Clock>, ttl: Duration) -> Self {
        Self::new(name, Arc::new(MemoryCacheBackend::new()), clock, ttl)
    }

    /// Returns the cached value if present and still fresh.
    pub async fn get(&self, key: &str) -> Option<T> {
        let entry = self.backend.get(key).await?;
        if self.is_fresh(&entry) {
            tracing::debug!(cache = self.name, key, "Cache hit");
            Some(entry.value)
        } else {
            tracing::debug!(cache = self.name, key, "Cache entry stale");
            None
        }
    }

    pub async fn set(&self, key: impl Into<String>, value: T) {
        let entry = CacheEntry::new(value, self.clock.now());
        self.backend.set(key.into(), entry).await;
    }

    pub fn is_fresh(&self, entry: &CacheEntry<T>) -> bool {
        entry.is_fresh(self.clock.now(), self.ttl)
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }
}

/// The three independent cache classes.
#[derive(Clone)]
pub struct CacheLayer {
    pub raw_data: TtlCache<RawDeveloperData>,
    pub fingerprints: TtlCache<TechFingerprint>,
    pub matches: TtlCache<MatchResult>,
}

impl CacheLayer {
    pub fn in_memory(config: &CacheConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            raw_data: TtlCache::in_memory("raw_data", clock.clone(), config.raw_data_ttl()),
            fingerprints: TtlCache::in_memory(
                "fingerprint",
                clock.clone(),
                config.fingerprint_ttl(),
            ),
            matches: TtlCache::in_memory("match", clock, config.match_ttl()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_entry_freshness_boundary() {
        let entry = CacheEntry::new((), start());
        let ttl = Duration::from_secs(60);

        assert!(entry.is_fresh(start() + chrono::Duration::seconds(59), ttl));
        assert!(!entry.is_fresh(start() + chrono::Duration::seconds(60), ttl));
    }

    #[test]
    fn test_future_entry_is_fresh() {
        let entry = CacheEntry::new((), start() + chrono::Duration::minutes(5));
        assert!(entry.is_fresh(start(), Duration::from_secs(1)));
    }

    #[tokio::test]
    async fn test_ttl_cache_expires_on_read() {
        let clock = Arc::new(ManualClock::new(start()));
        let backend = Arc::new(MemoryCacheBackend::new());
        let cache = TtlCache::new(
            "test",
            backend.clone() as Arc<dyn CacheBackend<String>>,
            clock.clone(),
            Duration::from_secs(3600),
        );

        cache.set("alice", "payload".to_string()).await;
        assert_eq!(cache.get("alice").await.as_deref(), Some("payload"));

        clock.advance(chrono::Duration::hours(1));
        assert!(cache.get("alice").await.is_none());
        // Stale entries are not physically removed.
        assert_eq!(backend.len(), 1);
    }

    #[tokio::test]
    async fn test_overwrite_refreshes_timestamp() {
        let clock = Arc::new(ManualClock::new(start()));
        let cache = TtlCache::in_memory("test", clock.clone(), Duration::from_secs(60));

        cache.set("k", 1u32).await;
        clock.advance(chrono::Duration::seconds(90));
        assert!(cache.get("k").await.is_none());

        cache.set("k", 2u32).await;
        assert_eq!(cache.get("k").await, Some(2));
    }

    #[tokio::test]
    async fn test_cache_classes_are_independent() {
        let clock: Arc<dyn Clock> = Arc::new(ManualClock::new(start()));
        let layer = CacheLayer::in_memory(&CacheConfig::default(), clock);

        layer
            .fingerprints
            .set("octocat", TechFingerprint::default())
            .await;
        assert!(layer.raw_data.get("octocat").await.is_none());
        assert!(layer.fingerprints.get("octocat").await.is_some());
        assert_eq!(layer.matches.ttl(), Duration::from_secs(6 * 60 * 60));
    }
}
