//! Handlers for current-weather lookups.
//!
//! Both routes answer 200 with a [`ClimaInfo`] body, or a bare status code
//! on failure (see [`AppError`]).

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use clima_core::ClimaInfo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for `GET /api/clima`.
#[derive(Debug, Deserialize)]
pub struct ClimaParams {
    pub ciudad: Option<String>,
}

/// GET /api/clima?ciudad={ciudad}
///
/// A missing, blank or malformed `ciudad` answers 400 without touching the
/// upstream.
pub async fn get_clima(
    State(state): State<AppState>,
    params: Result<Query<ClimaParams>, QueryRejection>,
) -> AppResult<Json<ClimaInfo>> {
    let ciudad = params
        .ok()
        .and_then(|Query(p)| p.ciudad)
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .ok_or(AppError::MissingCity)?;

    tracing::info!(ciudad = %ciudad, "Weather requested");

    let clima = state.weather.get_weather(&ciudad).await?;

    Ok(Json(clima))
}

/// GET /api/clima/{ciudad}
pub async fn get_clima_by_path(
    State(state): State<AppState>,
    Path(ciudad): Path<String>,
) -> AppResult<Json<ClimaInfo>> {
    tracing::info!(ciudad = %ciudad, "Weather requested by path");

    let clima = state.weather.get_weather(&ciudad).await?;

    Ok(Json(clima))
}
