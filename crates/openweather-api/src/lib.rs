//! Rust client for the OpenWeatherMap current-weather API
//!
//! This crate provides a minimal client for the `/data/2.5/weather`
//! endpoint, returning the temperature and humidity readings used by the
//! weathervane service.
//!
//! # Example
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use openweather_api::OpenWeatherClient;
//!
//! # async fn example() -> Result<(), openweather_api::OpenWeatherError> {
//! let client = OpenWeatherClient::new("my-api-key");
//!
//! let date = NaiveDate::from_ymd_opt(2024, 8, 14).unwrap();
//! let obs = client.current("London", date).await?;
//! println!("{} .. {} °C, {}%", obs.min_temp, obs.max_temp, obs.humidity);
//! # Ok(())
//! # }
//! ```
//!
//! Requests carry a bounded timeout (10 seconds by default) and a single
//! retry on transient failures (5xx responses and transport errors);
//! client-side rejections (4xx) are surfaced as [`OpenWeatherError::NotFound`]
//! without retrying.

mod client;
mod error;
mod types;

pub use client::OpenWeatherClient;
pub use error::{OpenWeatherError, Result};
pub use types::{CurrentWeatherResponse, MainReadings, Observation};
