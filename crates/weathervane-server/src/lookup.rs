//! Read-through lookup pipeline: memory cache, persistent store, upstream

use crate::cache::WeatherCache;
use crate::error::LookupError;
use crate::types::{CacheKey, CacheStats, WeatherRecord};
use chrono::NaiveDate;
use openweather_api::OpenWeatherClient;
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{debug, warn};
use weathervane_db::weather;

/// Composes the memory cache, the persistent store, and the upstream
/// client into one lookup pipeline.
///
/// Constructed once at startup and shared through the server state; the
/// cache lives exactly as long as the service.
pub struct WeatherService {
    pool: SqlitePool,
    upstream: OpenWeatherClient,
    cache: WeatherCache,
}

impl WeatherService {
    pub fn new(pool: SqlitePool, upstream: OpenWeatherClient, cache: WeatherCache) -> Self {
        Self {
            pool,
            upstream,
            cache,
        }
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Resolve one day's weather for a city.
    ///
    /// Probes the memory cache, then the store, then the upstream; each
    /// layer populates the one above it on the way out. Cold keys resolve
    /// under single flight: concurrent lookups of one uncached key issue
    /// exactly one upstream fetch and share its result.
    pub async fn lookup(
        &self,
        city: &str,
        date_str: &str,
    ) -> Result<WeatherRecord, Arc<LookupError>> {
        let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
            .map_err(|_| Arc::new(LookupError::BadDate(date_str.to_string())))?;
        let key = CacheKey {
            city: city.to_string(),
            date,
        };

        if let Some(record) = self.cache.get(&key).await {
            debug!(city = %city, date = %date, "Memory cache hit");
            return Ok(record);
        }

        let stored = weather::get(&self.pool, city, date)
            .await
            .map_err(|e| Arc::new(LookupError::from(e)))?;
        if let Some(row) = stored {
            debug!(city = %city, date = %date, "Store hit");
            let record = WeatherRecord::from(row);
            self.cache.insert(key, record.clone()).await;
            return Ok(record);
        }

        self.cache
            .get_or_try_fetch(key.clone(), self.fetch_and_store(key))
            .await
    }

    /// Cold-path resolution: upstream fetch, conflict-ignoring store
    /// write, read-back of the canonical row. The read-back keeps the
    /// memory cache consistent with the store when an insert race is
    /// lost to another request.
    async fn fetch_and_store(&self, key: CacheKey) -> Result<WeatherRecord, LookupError> {
        let observation = match self.upstream.current(&key.city, key.date).await {
            Ok(obs) => obs,
            Err(e) => {
                warn!(city = %key.city, date = %key.date, error = %e, "Upstream fetch failed");
                return Err(LookupError::NotFound);
            }
        };

        let record = WeatherRecord::from_observation(key.city.clone(), key.date, &observation);
        weather::insert_if_absent(&self.pool, &record.to_new_row()).await?;
        debug!(city = %key.city, date = %key.date, "Stored upstream record");

        match weather::get(&self.pool, &key.city, key.date).await? {
            Some(row) => Ok(WeatherRecord::from(row)),
            None => Ok(record),
        }
    }
}
