//! Data types for the weathervane service

use chrono::NaiveDate;
use openweather_api::Observation;
use serde::{Deserialize, Serialize};
use weathervane_db::{NewWeatherRecord, WeatherRow};

/// Key identifying one day's readings for one city.
///
/// The city string is used exactly as received; two spellings of the same
/// city are two keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub city: String,
    pub date: NaiveDate,
}

/// A fully resolved weather record for one (city, date)
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherRecord {
    pub city: String,
    pub date: NaiveDate,
    pub min_temp: f64,
    pub max_temp: f64,
    pub avg_temp: f64,
    pub humidity: i64,
}

/// Daily average as the midpoint of the min/max readings
pub fn average_temp(min_temp: f64, max_temp: f64) -> f64 {
    (min_temp + max_temp) / 2.0
}

impl WeatherRecord {
    /// Build a record from provider readings; the average is always
    /// computed here, never taken from an input.
    pub fn from_observation(city: String, date: NaiveDate, obs: &Observation) -> Self {
        Self {
            city,
            date,
            min_temp: obs.min_temp,
            max_temp: obs.max_temp,
            avg_temp: average_temp(obs.min_temp, obs.max_temp),
            humidity: obs.humidity,
        }
    }

    /// Insert parameters for the persistent store
    pub fn to_new_row(&self) -> NewWeatherRecord {
        NewWeatherRecord {
            city: self.city.clone(),
            date: self.date,
            min_temp: self.min_temp,
            max_temp: self.max_temp,
            avg_temp: self.avg_temp,
            humidity: self.humidity,
        }
    }
}

impl From<WeatherRow> for WeatherRecord {
    fn from(row: WeatherRow) -> Self {
        Self {
            city: row.city,
            date: row.date,
            min_temp: row.min_temp,
            max_temp: row.max_temp,
            avg_temp: row.avg_temp,
            humidity: row.humidity,
        }
    }
}

/// Response body for the weather endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub min_temp: f64,
    pub max_temp: f64,
    pub avg_temp: f64,
    pub humidity: i64,
}

impl From<&WeatherRecord> for WeatherResponse {
    fn from(record: &WeatherRecord) -> Self {
        Self {
            min_temp: record.min_temp,
            max_temp: record.max_temp,
            avg_temp: record.avg_temp,
            humidity: record.humidity,
        }
    }
}

/// Memory cache counters reported by the health endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub entries: u64,
    pub hits: u64,
    pub misses: u64,
}

/// Response body for the health endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_secs: u64,
    pub cache: CacheStats,
}
