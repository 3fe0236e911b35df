//! Weathervane - city/date weather lookup service
//!
//! Serves min/max/average temperature and humidity per (city, date),
//! resolving each request through an in-process TTL cache, a durable
//! SQLite store, and the OpenWeatherMap API.

mod cache;
mod config;
mod error;
mod lookup;
mod server;
mod types;

use crate::cache::WeatherCache;
use crate::config::Config;
use crate::error::Result;
use crate::lookup::WeatherService;
use crate::server::{start_server, ServerState, SharedState};
use openweather_api::OpenWeatherClient;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let env_filter =
        EnvFilter::from_default_env().add_directive("weathervane_server=info".parse()?);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Weathervane...");

    let config = Config::from_env()?;
    info!("Port: {}", config.port);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;
    weathervane_db::migrate::migrate(&pool).await?;

    let upstream = OpenWeatherClient::new(config.api_key.clone())
        .with_base_url(config.upstream_base_url.clone());
    let cache = WeatherCache::new(
        config.cache_capacity,
        Duration::from_secs(config.cache_ttl_secs),
    );
    let service = WeatherService::new(pool, upstream, cache);

    // Cache and service live for the whole process; the state is built
    // once and shared across all in-flight requests.
    let state: SharedState = Arc::new(ServerState::new(service));

    start_server(state, config.port).await?;

    Ok(())
}
