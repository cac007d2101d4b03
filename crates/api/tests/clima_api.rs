//! Integration tests for the weather lookup endpoints.

mod common;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::http::StatusCode;
use clima_core::{UpstreamWeather, WeatherError, WeatherProvider, WeatherQuery};
use common::{body_bytes, body_json, get, weather_payload, TEST_API_KEY};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_upstream() -> (MockServer, String) {
    let server = MockServer::start().await;
    let base_url = format!("{}/v1", server.uri());
    (server, base_url)
}

// ---------------------------------------------------------------------------
// Test: GET /api/clima?ciudad=Madrid returns the normalized body
// ---------------------------------------------------------------------------

#[tokio::test]
async fn clima_by_query_returns_normalized_weather() {
    let (server, base_url) = mock_upstream().await;
    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .and(query_param("key", TEST_API_KEY))
        .and(query_param("q", "Madrid"))
        .and(query_param("aqi", "no"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(weather_payload("Madrid", "Spain", 20.0)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let app = common::build_test_app(&base_url);
    let response = get(app, "/api/clima?ciudad=Madrid").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("application/json"));

    let body = body_bytes(response).await;
    assert_eq!(
        std::str::from_utf8(&body).unwrap(),
        r#"{"ciudad":"Madrid","pais":"Spain","temperatura":20.0,"descripcion":"Sunny","humedad":60,"viento":10.0,"direccionViento":"NW","fechaActualizacion":"2025-05-25 10:00"}"#
    );
}

#[tokio::test]
async fn clima_by_query_trims_the_city() {
    let (server, base_url) = mock_upstream().await;
    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .and(query_param("q", "New York"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(weather_payload("New York", "USA", 15.5)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let app = common::build_test_app(&base_url);
    let response = get(app, "/api/clima?ciudad=%20New%20York%20").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["ciudad"], "New York");
    assert_eq!(json["temperatura"], 15.5);
}

// ---------------------------------------------------------------------------
// Test: missing or blank ciudad is rejected before any upstream call
// ---------------------------------------------------------------------------

#[tokio::test]
async fn clima_without_city_returns_400_and_skips_upstream() {
    let (server, base_url) = mock_upstream().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(weather_payload("X", "Y", 0.0)))
        .expect(0)
        .mount(&server)
        .await;

    for uri in [
        "/api/clima",
        "/api/clima?ciudad=",
        "/api/clima?ciudad=%20%20",
        "/api/clima?city=Madrid",
        "/api/clima?ciudad=Madrid&ciudad=Paris",
    ] {
        let app = common::build_test_app(&base_url);
        let response = get(app, uri).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "uri: {uri}");
        assert!(body_bytes(response).await.is_empty(), "uri: {uri}");
    }
}

// ---------------------------------------------------------------------------
// Test: GET /api/clima/{ciudad}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn clima_by_path_returns_normalized_weather() {
    let (server, base_url) = mock_upstream().await;
    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .and(query_param("q", "Barcelona"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(weather_payload("Barcelona", "Spain", 22.3)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let app = common::build_test_app(&base_url);
    let response = get(app, "/api/clima/Barcelona").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["ciudad"], "Barcelona");
    assert_eq!(json["pais"], "Spain");
    assert_eq!(json["temperatura"], 22.3);
    assert_eq!(json["direccionViento"], "NW");
}

#[tokio::test]
async fn clima_by_path_decodes_percent_encoding() {
    let (server, base_url) = mock_upstream().await;
    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .and(query_param("q", "San Sebastián"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(weather_payload("San Sebastián", "Spain", 18.0)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let app = common::build_test_app(&base_url);
    let response = get(app, "/api/clima/San%20Sebasti%C3%A1n").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["ciudad"], "San Sebastián");
}

#[tokio::test]
async fn clima_by_blank_path_returns_500_and_skips_upstream() {
    let (server, base_url) = mock_upstream().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let app = common::build_test_app(&base_url);
    let response = get(app, "/api/clima/%20").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_bytes(response).await.is_empty());
}

// ---------------------------------------------------------------------------
// Test: upstream failures surface as 500 with an empty body
// ---------------------------------------------------------------------------

#[tokio::test]
async fn upstream_error_returns_500_with_empty_body() {
    let (server, base_url) = mock_upstream().await;
    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": {"code": 1006, "message": "No matching location found."}
        })))
        .mount(&server)
        .await;

    for uri in ["/api/clima?ciudad=Atlantis", "/api/clima/Atlantis"] {
        let app = common::build_test_app(&base_url);
        let response = get(app, uri).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "uri: {uri}");
        assert!(body_bytes(response).await.is_empty(), "uri: {uri}");
    }
}

#[tokio::test]
async fn undecodable_upstream_payload_returns_500() {
    let (server, base_url) = mock_upstream().await;
    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "location": {"name": "Madrid"}
        })))
        .mount(&server)
        .await;

    let app = common::build_test_app(&base_url);
    let response = get(app, "/api/clima?ciudad=Madrid").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_bytes(response).await.is_empty());
}

// ---------------------------------------------------------------------------
// Test: repeated lookups are independent and identical
// ---------------------------------------------------------------------------

#[tokio::test]
async fn repeated_lookups_return_identical_bodies() {
    let (server, base_url) = mock_upstream().await;
    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(weather_payload("Madrid", "Spain", 20.0)),
        )
        .expect(2)
        .mount(&server)
        .await;

    let app = common::build_test_app(&base_url);
    let first = body_bytes(get(app.clone(), "/api/clima?ciudad=Madrid").await).await;
    let second = body_bytes(get(app, "/api/clima/Madrid").await).await;

    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// Test: middleware behaviour
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let (server, base_url) = mock_upstream().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(weather_payload("Madrid", "Spain", 20.0)),
        )
        .mount(&server)
        .await;

    let app = common::build_test_app(&base_url);
    let response = get(app, "/api/clima?ciudad=Madrid").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = common::build_test_app("http://127.0.0.1:9");
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

struct SlowProvider;

#[async_trait]
impl WeatherProvider for SlowProvider {
    async fn fetch_weather(&self, _query: &WeatherQuery) -> Result<UpstreamWeather, WeatherError> {
        tokio::time::sleep(Duration::from_secs(5)).await;
        Err(WeatherError::Transport("too slow".into()))
    }
}

#[tokio::test]
async fn slow_lookup_returns_408() {
    let app = common::build_app_with_provider_and(
        Arc::new(SlowProvider),
        &[("REQUEST_TIMEOUT_SECS", "1")],
    );
    let response = get(app, "/api/clima?ciudad=Madrid").await;

    assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
}
