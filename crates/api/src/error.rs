use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use clima_core::WeatherError;

/// Application-level error type for the weather handlers.
///
/// Responses carry a status code and an empty body; upstream details are
/// logged by the service and never sent to the client.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// `ciudad` was missing, blank or unreadable.
    #[error("Missing or blank city")]
    MissingCity,

    /// Any failure from the weather service.
    #[error(transparent)]
    Weather(#[from] WeatherError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::MissingCity => StatusCode::BAD_REQUEST.into_response(),
            AppError::Weather(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}
