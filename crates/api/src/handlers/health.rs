use std::panic::AssertUnwindSafe;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use clima_core::HealthStatus;
use futures::FutureExt;

use crate::state::AppState;

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "Clima API Rust";

/// GET /api/health
///
/// The probe itself never fails, so the answer is normally 200 `UP` (with a
/// degraded message when the upstream is unreachable). 503 `DOWN` is returned
/// only if the probe panics.
///
/// The probe runs inside the request future, so a request timeout cancels the
/// in-flight upstream call.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthStatus>) {
    match AssertUnwindSafe(state.weather.check_health()).catch_unwind().await {
        Ok(message) => (StatusCode::OK, Json(HealthStatus::up(SERVICE_NAME, message))),
        Err(_) => {
            tracing::error!("Health probe panicked");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthStatus::down(SERVICE_NAME)),
            )
        }
    }
}
