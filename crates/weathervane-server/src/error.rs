//! Error types for the weathervane service

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;
use std::sync::Arc;

/// Errors produced by the lookup pipeline
#[derive(Debug)]
pub enum LookupError {
    /// Malformed date in the request path
    BadDate(String),
    /// Upstream has no data for the city, or the upstream call failed
    NotFound,
    /// Persistent store unreachable
    StoreUnavailable(sqlx::Error),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadDate(input) => write!(f, "Invalid date '{}': expected YYYY-MM-DD", input),
            Self::NotFound => write!(f, "City not found"),
            Self::StoreUnavailable(e) => write!(f, "Store unavailable: {}", e),
        }
    }
}

impl std::error::Error for LookupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::StoreUnavailable(e) => Some(e),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for LookupError {
    fn from(e: sqlx::Error) -> Self {
        Self::StoreUnavailable(e)
    }
}

/// Lookup failure as an HTTP response.
///
/// Coalesced requests may share one failure through an `Arc`.
#[derive(Debug)]
pub struct ApiError(Arc<LookupError>);

impl From<Arc<LookupError>> for ApiError {
    fn from(e: Arc<LookupError>) -> Self {
        Self(e)
    }
}

impl From<LookupError> for ApiError {
    fn from(e: LookupError) -> Self {
        Self(Arc::new(e))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0.as_ref() {
            LookupError::BadDate(_) => (StatusCode::BAD_REQUEST, self.0.to_string()),
            LookupError::NotFound => (StatusCode::NOT_FOUND, self.0.to_string()),
            LookupError::StoreUnavailable(e) => {
                tracing::error!(error = %e, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Startup and configuration errors for the service binary
#[derive(Debug)]
pub enum ServiceError {
    Config(String),
    Database(sqlx::Error),
    Io(std::io::Error),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
            Self::Database(e) => write!(f, "Database error: {}", e),
            Self::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(_) => None,
            Self::Database(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<sqlx::Error> for ServiceError {
    fn from(e: sqlx::Error) -> Self {
        Self::Database(e)
    }
}

impl From<std::io::Error> for ServiceError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<tracing_subscriber::filter::ParseError> for ServiceError {
    fn from(e: tracing_subscriber::filter::ParseError) -> Self {
        Self::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
