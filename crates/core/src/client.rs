//! HTTP client for the WeatherAPI.com `current.json` endpoint.
//!
//! [`WeatherProvider`] is the seam the service depends on;
//! [`WeatherApiClient`] is the production implementation backed by
//! [`reqwest`]. One GET per lookup, never retried.

use std::error::Error as _;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Url;

use crate::config::WeatherConfig;
use crate::error::{UpstreamError, WeatherError};
use crate::query::WeatherQuery;
use crate::upstream::{ErrorEnvelope, UpstreamWeather};

/// Placeholder written wherever the API key would otherwise appear.
pub const REDACTED: &str = "***";

const USER_AGENT: &str = concat!("clima-api/", env!("CARGO_PKG_VERSION"));

/// Longest body excerpt kept in an upstream error message.
const MAX_BODY_EXCERPT: usize = 200;

/// Source of raw current-weather payloads.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn fetch_weather(&self, query: &WeatherQuery) -> Result<UpstreamWeather, WeatherError>;
}

/// [`WeatherProvider`] backed by WeatherAPI.com.
pub struct WeatherApiClient {
    client: reqwest::Client,
    config: WeatherConfig,
}

impl WeatherApiClient {
    /// Build a client with the timeouts from `config`.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| {
                WeatherError::Transport(format!("failed to build HTTP client: {}", e.without_url()))
            })?;

        Ok(Self { client, config })
    }

    /// `{base_url}/current.json?key={api_key}&q={city}&aqi=no`, with the city
    /// form-encoded.
    fn current_url(&self, query: &WeatherQuery) -> Result<Url, WeatherError> {
        Url::parse_with_params(
            &format!("{}/current.json", self.config.base_url()),
            &[
                ("key", self.config.api_key()),
                ("q", query.as_str()),
                ("aqi", "no"),
            ],
        )
        .map_err(|_| WeatherError::InvalidBaseUrl(self.config.base_url().to_string()))
    }

    /// Replace every occurrence of the API key in `text`.
    fn scrub(&self, text: &str) -> String {
        text.replace(self.config.api_key(), REDACTED)
    }

    fn transport_error(&self, err: reqwest::Error) -> WeatherError {
        let kind = if err.is_timeout() {
            "request timed out"
        } else if err.is_connect() {
            "connection failed"
        } else {
            "request failed"
        };

        let err = err.without_url();
        let mut detail = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            detail.push_str(": ");
            detail.push_str(&cause.to_string());
            source = cause.source();
        }

        WeatherError::Transport(format!("{kind}: {}", self.scrub(&detail)))
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiClient {
    async fn fetch_weather(&self, query: &WeatherQuery) -> Result<UpstreamWeather, WeatherError> {
        let url = self.current_url(query)?;

        if self.config.debug() {
            tracing::debug!(url = %redact_url(&url), "Querying weather provider");
        }

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        if self.config.debug() {
            tracing::debug!(
                status = status.as_u16(),
                bytes = body.len(),
                "Weather provider responded"
            );
        }

        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                message: self.scrub(&upstream_message(&body)),
            }
            .into());
        }

        serde_json::from_str::<UpstreamWeather>(&body)
            .map_err(|e| UpstreamError::Decode(self.scrub(&e.to_string())).into())
    }
}

/// Render `url` with the `key` query parameter replaced by [`REDACTED`].
pub fn redact_url(url: &Url) -> String {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(name, value)| {
            let value = if name == "key" {
                REDACTED.to_string()
            } else {
                value.into_owned()
            };
            (name.into_owned(), value)
        })
        .collect();

    let mut redacted = url.clone();
    if !pairs.is_empty() {
        redacted.query_pairs_mut().clear().extend_pairs(pairs);
    }
    redacted.to_string()
}

/// The provider's error message if the body is its error envelope, otherwise
/// a bounded excerpt of the raw body.
fn upstream_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) => truncate_body(body),
    }
}

fn truncate_body(body: &str) -> String {
    match body.char_indices().nth(MAX_BODY_EXCERPT) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
