//! Error types for the OpenWeatherMap client

use std::fmt;

/// Errors that can occur when interacting with the OpenWeatherMap API
#[derive(Debug)]
pub enum OpenWeatherError {
    /// Provider rejected the request (4xx), typically an unknown city
    NotFound,
    /// Provider returned a non-success server status (5xx)
    Status(u16),
    /// HTTP request failed
    Http(reqwest::Error),
}

impl OpenWeatherError {
    /// Whether a retry could plausibly succeed.
    ///
    /// 4xx rejections are permanent; 5xx statuses and transport failures
    /// are transient. Body decode failures are never retried.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::NotFound => false,
            Self::Status(_) => true,
            Self::Http(e) => !e.is_decode(),
        }
    }
}

impl fmt::Display for OpenWeatherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "OpenWeather: location not found"),
            Self::Status(code) => write!(f, "OpenWeather upstream error: HTTP {}", code),
            Self::Http(e) => write!(f, "OpenWeather HTTP error: {}", e),
        }
    }
}

impl std::error::Error for OpenWeatherError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for OpenWeatherError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

/// Result type for OpenWeatherMap API operations
pub type Result<T> = std::result::Result<T, OpenWeatherError>;
