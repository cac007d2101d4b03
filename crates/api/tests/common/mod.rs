#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::{Body, Bytes};
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use clima_api::config::ServerConfig;
use clima_api::router::build_app_router;
use clima_api::state::AppState;
use clima_core::{WeatherProvider, WeatherService};

pub const TEST_API_KEY: &str = "test-key";

/// Build a `ServerConfig` from the given overrides on top of test defaults.
///
/// `base_url` should point at a wiremock server; no real upstream is ever hit.
pub fn test_config(base_url: &str, overrides: &[(&str, &str)]) -> ServerConfig {
    let mut vars: HashMap<String, String> = HashMap::from([
        ("WEATHER_API_KEY".to_string(), TEST_API_KEY.to_string()),
        ("API_BASE_URL".to_string(), base_url.to_string()),
        ("APP_ENV".to_string(), "test".to_string()),
        ("HOST".to_string(), "127.0.0.1".to_string()),
        ("PORT".to_string(), "0".to_string()),
        ("UPSTREAM_TIMEOUT_SECS".to_string(), "5".to_string()),
    ]);
    for (key, value) in overrides {
        vars.insert(key.to_string(), value.to_string());
    }

    ServerConfig::from_lookup(|name| vars.get(name).cloned()).unwrap()
}

/// Build the full application router against a mocked WeatherAPI.com.
///
/// Uses the same [`build_app_router`] as `main.rs`, so the whole middleware
/// stack is exercised.
pub fn build_test_app(base_url: &str) -> Router {
    let config = test_config(base_url, &[]);
    let service = WeatherService::from_config(&config.weather).unwrap();
    build_app_router(AppState::new(service), &config)
}

/// Build the application router around an arbitrary provider.
pub fn build_app_with_provider(provider: Arc<dyn WeatherProvider>) -> Router {
    build_app_with_provider_and(provider, &[])
}

/// Like [`build_app_with_provider`] with configuration overrides.
pub fn build_app_with_provider_and(
    provider: Arc<dyn WeatherProvider>,
    overrides: &[(&str, &str)],
) -> Router {
    let config = test_config("http://127.0.0.1:9", overrides);
    let service = WeatherService::new(provider, false);
    build_app_router(AppState::new(service), &config)
}

/// Issue a `GET` request against the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect the full response body.
pub async fn body_bytes(response: Response<Body>) -> Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

/// Collect and parse the response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}

/// A WeatherAPI.com `current.json` payload with only the mapped fields.
pub fn weather_payload(city: &str, country: &str, temp_c: f64) -> serde_json::Value {
    serde_json::json!({
        "location": {"name": city, "country": country},
        "current": {
            "temp_c": temp_c,
            "condition": {"text": "Sunny"},
            "humidity": 60,
            "wind_kph": 10.0,
            "wind_dir": "NW",
            "last_updated": "2025-05-25 10:00"
        }
    })
}
