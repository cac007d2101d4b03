//! Wire types for the WeatherAPI.com `current.json` response.
//!
//! Only the fields the mapper reads are required; everything else is optional
//! so a partial but usable payload still decodes.

use serde::Deserialize;

/// Decoded `current.json` payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpstreamWeather {
    pub location: Location,
    pub current: Current,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Location {
    pub name: String,
    pub country: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub tz_id: Option<String>,
    #[serde(default)]
    pub localtime: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Current {
    pub last_updated: String,
    pub temp_c: f64,
    pub condition: Condition,
    pub humidity: i32,
    pub wind_kph: f64,
    pub wind_dir: String,
    #[serde(default)]
    pub temp_f: Option<f64>,
    /// `1` during daytime, `0` at night.
    #[serde(default)]
    pub is_day: Option<i32>,
    #[serde(default)]
    pub wind_mph: Option<f64>,
    #[serde(default)]
    pub wind_degree: Option<i32>,
    #[serde(default)]
    pub pressure_mb: Option<f64>,
    #[serde(default)]
    pub pressure_in: Option<f64>,
    #[serde(default)]
    pub precip_mm: Option<f64>,
    #[serde(default)]
    pub precip_in: Option<f64>,
    #[serde(default)]
    pub cloud: Option<i32>,
    #[serde(default)]
    pub feelslike_c: Option<f64>,
    #[serde(default)]
    pub feelslike_f: Option<f64>,
    #[serde(default)]
    pub vis_km: Option<f64>,
    #[serde(default)]
    pub vis_miles: Option<f64>,
    #[serde(default)]
    pub uv: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Condition {
    pub text: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub code: Option<i32>,
}

/// Error envelope WeatherAPI.com returns with non-2xx statuses:
/// `{"error": {"code": 1006, "message": "No matching location found."}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorDetail {
    pub message: String,
}
