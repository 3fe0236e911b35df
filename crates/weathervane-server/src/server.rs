//! HTTP server for weather lookup endpoints

use crate::error::ApiError;
use crate::lookup::WeatherService;
use crate::types::{HealthResponse, WeatherResponse};
use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

/// Shared state for the HTTP server
pub struct ServerState {
    pub service: WeatherService,
    pub started_at: DateTime<Utc>,
}

impl ServerState {
    pub fn new(service: WeatherService) -> Self {
        Self {
            service,
            started_at: Utc::now(),
        }
    }
}

pub type SharedState = Arc<ServerState>;

/// Create the HTTP router
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/weather/{city}/{date}", get(get_weather))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the HTTP server
pub async fn start_server(state: SharedState, port: u16) -> std::io::Result<()> {
    let router = create_router(state);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting HTTP server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await
}

/// Health check endpoint
async fn health(State(state): State<SharedState>) -> Json<HealthResponse> {
    let cache_stats = state.service.cache_stats();
    let uptime_secs = (Utc::now() - state.started_at).num_seconds() as u64;

    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_secs,
        cache: cache_stats,
    })
}

/// Look up one day's weather for a city
async fn get_weather(
    State(state): State<SharedState>,
    Path((city, date)): Path<(String, String)>,
) -> Result<Json<WeatherResponse>, ApiError> {
    let record = state.service.lookup(&city, &date).await?;
    Ok(Json(WeatherResponse::from(&record)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::WeatherCache;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use openweather_api::OpenWeatherClient;
    use serde_json::json;
    use sqlx::sqlite::SqlitePoolOptions;
    use std::time::Duration;
    use tower::ServiceExt;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn create_test_state(base_url: &str) -> SharedState {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        weathervane_db::migrate::migrate(&pool).await.unwrap();

        let upstream = OpenWeatherClient::new("test-key").with_base_url(base_url);
        let cache = WeatherCache::new(100, Duration::from_secs(3600));
        Arc::new(ServerState::new(WeatherService::new(pool, upstream, cache)))
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let state = create_test_state("http://127.0.0.1:9").await;
        let router = create_router(state);

        let response = router
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["status"], "ok");
        assert!(json["uptime_secs"].as_u64().is_some());
        assert!(json["cache"]["entries"].as_u64().is_some());
    }

    #[tokio::test]
    async fn test_weather_happy_path() {
        let upstream = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .and(query_param("q", "London"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "main": { "temp_min": 10.0, "temp_max": 20.0, "humidity": 60 }
            })))
            .expect(1)
            .mount(&upstream)
            .await;

        let state = create_test_state(&upstream.uri()).await;
        let router = create_router(state);

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/weather/London/2024-08-14")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(
            json,
            json!({
                "min_temp": 10.0,
                "max_temp": 20.0,
                "avg_temp": 15.0,
                "humidity": 60
            })
        );
    }

    #[tokio::test]
    async fn test_malformed_date_returns_400() {
        let state = create_test_state("http://127.0.0.1:9").await;
        let router = create_router(state);

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/weather/London/2024-13-40")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json["error"].as_str().unwrap().contains("2024-13-40"));
    }

    #[tokio::test]
    async fn test_unknown_city_returns_404() {
        let upstream = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&upstream)
            .await;

        let state = create_test_state(&upstream.uri()).await;
        let router = create_router(state);

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/weather/Atlantis/2024-08-14")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "City not found");
    }
}
