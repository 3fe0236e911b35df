use crate::error::{Result, ServiceError};
use openweather_api::OpenWeatherClient;
use std::env;

/// Application configuration parsed from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub api_key: String,
    pub upstream_base_url: String,
    pub cache_capacity: u64,
    pub cache_ttl_secs: u64,
}

impl Config {
    /// Parse configuration from environment variables
    ///
    /// Everything has a default except the upstream API key.
    pub fn from_env() -> Result<Self> {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3005);

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://weather.db?mode=rwc".to_string());

        let api_key = env::var("OPENWEATHER_API_KEY")
            .map_err(|_| ServiceError::Config("OPENWEATHER_API_KEY is not set".to_string()))?;

        let upstream_base_url = env::var("OPENWEATHER_BASE_URL")
            .unwrap_or_else(|_| OpenWeatherClient::DEFAULT_BASE_URL.to_string());

        let cache_capacity = env::var("CACHE_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(100);

        let cache_ttl_secs = env::var("CACHE_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3600);

        Ok(Self {
            port,
            database_url,
            api_key,
            upstream_base_url,
            cache_capacity,
            cache_ttl_secs,
        })
    }
}
