//! In-process TTL cache for resolved weather records

use crate::error::LookupError;
use crate::types::{CacheKey, CacheStats, WeatherRecord};
use moka::future::Cache;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Bounded, time-expiring cache in front of the persistent store.
///
/// Entries expire after the configured TTL and are evicted under capacity
/// pressure; the cache is never a source of truth. A process restart
/// clears it.
pub struct WeatherCache {
    inner: Cache<CacheKey, WeatherRecord>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl WeatherCache {
    pub fn new(capacity: u64, ttl: Duration) -> Self {
        let inner = Cache::builder()
            .max_capacity(capacity)
            .time_to_live(ttl)
            .build();

        Self {
            inner,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Fast-path probe, counting hits and misses
    pub async fn get(&self, key: &CacheKey) -> Option<WeatherRecord> {
        let found = self.inner.get(key).await;
        match found {
            Some(_) => self.hits.fetch_add(1, Ordering::Relaxed),
            None => self.misses.fetch_add(1, Ordering::Relaxed),
        };
        found
    }

    /// Store a record under its key
    pub async fn insert(&self, key: CacheKey, record: WeatherRecord) {
        self.inner.insert(key, record).await;
    }

    /// Resolve through the cache, running `init` at most once per key
    /// across concurrent callers; late arrivals wait on the in-flight
    /// resolution and share its result. Failed resolutions are not
    /// cached, so the next caller retries.
    pub async fn get_or_try_fetch<F>(
        &self,
        key: CacheKey,
        init: F,
    ) -> Result<WeatherRecord, Arc<LookupError>>
    where
        F: Future<Output = Result<WeatherRecord, LookupError>>,
    {
        self.inner.try_get_with(key, init).await
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.inner.entry_count(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::sync::atomic::AtomicUsize;

    fn test_key(city: &str) -> CacheKey {
        CacheKey {
            city: city.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 8, 14).unwrap(),
        }
    }

    fn test_record(city: &str) -> WeatherRecord {
        WeatherRecord {
            city: city.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 8, 14).unwrap(),
            min_temp: 10.0,
            max_temp: 20.0,
            avg_temp: 15.0,
            humidity: 60,
        }
    }

    #[tokio::test]
    async fn test_get_counts_hits_and_misses() {
        let cache = WeatherCache::new(100, Duration::from_secs(3600));
        let key = test_key("London");

        assert!(cache.get(&key).await.is_none());
        cache.insert(key.clone(), test_record("London")).await;
        assert!(cache.get(&key).await.is_some());

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
    }

    #[tokio::test]
    async fn test_entries_expire_after_ttl() {
        let cache = WeatherCache::new(100, Duration::from_millis(200));
        let key = test_key("London");

        cache.insert(key.clone(), test_record("London")).await;
        assert!(cache.get(&key).await.is_some());

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(cache.get(&key).await.is_none());
    }

    #[tokio::test]
    async fn test_concurrent_fetches_coalesce() {
        let cache = WeatherCache::new(100, Duration::from_secs(3600));
        let key = test_key("London");
        let calls = AtomicUsize::new(0);

        let fetch = || {
            cache.get_or_try_fetch(key.clone(), async {
                calls.fetch_add(1, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(20)).await;
                Ok(test_record("London"))
            })
        };

        let (a, b) = tokio::join!(fetch(), fetch());
        assert_eq!(a.unwrap(), test_record("London"));
        assert_eq!(b.unwrap(), test_record("London"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_fetches_are_not_cached() {
        let cache = WeatherCache::new(100, Duration::from_secs(3600));
        let key = test_key("London");

        let err = cache
            .get_or_try_fetch(key.clone(), async { Err(LookupError::NotFound) })
            .await
            .unwrap_err();
        assert!(matches!(*err, LookupError::NotFound));

        let record = cache
            .get_or_try_fetch(key.clone(), async { Ok(test_record("London")) })
            .await
            .unwrap();
        assert_eq!(record, test_record("London"));
    }
}
