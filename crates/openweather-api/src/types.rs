//! Data types for OpenWeatherMap API responses

use serde::Deserialize;

/// Response body from the `/data/2.5/weather` endpoint.
///
/// Only the `main` object is deserialized; the remaining fields of the
/// provider response are not used by this client.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeatherResponse {
    pub main: MainReadings,
}

/// The `main` object of a current-weather response
#[derive(Debug, Clone, Deserialize)]
pub struct MainReadings {
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: i64,
}

/// A single day's readings for a city, as reported by the provider
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    /// Minimum temperature in °C
    pub min_temp: f64,
    /// Maximum temperature in °C
    pub max_temp: f64,
    /// Relative humidity in percent
    pub humidity: i64,
}

impl From<CurrentWeatherResponse> for Observation {
    fn from(body: CurrentWeatherResponse) -> Self {
        Self {
            min_temp: body.main.temp_min,
            max_temp: body.main.temp_max,
            humidity: body.main.humidity,
        }
    }
}
