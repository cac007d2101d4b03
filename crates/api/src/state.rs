use std::sync::Arc;

use clima_core::WeatherService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the service is stateless and shared behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Weather lookups and the health probe.
    pub weather: Arc<WeatherService>,
}

impl AppState {
    pub fn new(weather: WeatherService) -> Self {
        Self {
            weather: Arc::new(weather),
        }
    }
}
