//! OpenWeatherMap API HTTP client

use crate::error::{OpenWeatherError, Result};
use crate::types::{CurrentWeatherResponse, Observation};
use chrono::{NaiveDate, NaiveTime};
use std::time::Duration;

/// Client for the OpenWeatherMap current-weather API
///
/// Carries the API key and an HTTP client with a bounded request timeout.
/// Transient failures (5xx responses and transport errors) are retried
/// once; 4xx rejections fail immediately as [`OpenWeatherError::NotFound`].
pub struct OpenWeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    /// Base URL of the production OpenWeatherMap API
    pub const DEFAULT_BASE_URL: &'static str = "http://api.openweathermap.org";

    /// Create a new client with default settings (10 second timeout)
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_timeout(api_key, Duration::from_secs(10))
    }

    /// Create a new client with a custom request timeout
    pub fn with_timeout(api_key: impl Into<String>, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Override the base URL (used by tests to point at a mock server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch the current-weather readings for a city on a given date
    ///
    /// The date is sent as a Unix timestamp at UTC midnight; the provider
    /// only uses day precision.
    ///
    /// # Arguments
    /// * `city` - City name, passed through to the provider as given
    /// * `date` - Calendar date of the requested readings
    pub async fn current(&self, city: &str, date: NaiveDate) -> Result<Observation> {
        let url = format!(
            "{}/data/2.5/weather?q={}&dt={}&appid={}&units=metric",
            self.base_url,
            urlencoding::encode(city),
            date.and_time(NaiveTime::MIN).and_utc().timestamp(),
            urlencoding::encode(&self.api_key),
        );

        match self.request(&url).await {
            Err(e) if e.is_transient() => self.request(&url).await,
            other => other,
        }
    }

    async fn request(&self, url: &str) -> Result<Observation> {
        let response = self.http.get(url).send().await?;
        let status = response.status();

        if status.is_client_error() {
            return Err(OpenWeatherError::NotFound);
        }
        if !status.is_success() {
            return Err(OpenWeatherError::Status(status.as_u16()));
        }

        let body: CurrentWeatherResponse = response.json().await?;
        Ok(body.into())
    }
}
