use axum::Json;
use serde::Serialize;

/// Static description of the API served at `/api/`.
#[derive(Debug, Serialize)]
pub struct ApiInfo {
    pub service: &'static str,
    pub version: &'static str,
    pub endpoints: &'static str,
    pub description: &'static str,
}

/// GET /api/
pub async fn info() -> Json<ApiInfo> {
    Json(ApiInfo {
        service: "Clima API Rust Axum",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: "/api/clima?ciudad=Madrid, /api/clima/{ciudad}, /api/health",
        description: "Current weather by city, normalized from WeatherAPI.com",
    })
}
