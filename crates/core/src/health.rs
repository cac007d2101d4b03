use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Message reported whenever the upstream probe cannot produce a reading.
pub const SERVICE_UNAVAILABLE: &str = "Service unavailable";

/// Overall service state as reported by `/api/health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ServiceState {
    Up,
    Down,
}

/// Health report computed per call; never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: ServiceState,
    pub service: String,
    pub message: String,
    /// Unix epoch milliseconds at which the report was built.
    pub timestamp: i64,
}

impl HealthStatus {
    pub fn up(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: ServiceState::Up,
            service: service.into(),
            message: message.into(),
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    pub fn down(service: impl Into<String>) -> Self {
        Self {
            status: ServiceState::Down,
            service: service.into(),
            message: SERVICE_UNAVAILABLE.to_string(),
            timestamp: Utc::now().timestamp_millis(),
        }
    }
}
