//! Weather lookups and the upstream health probe.

use std::sync::Arc;

use crate::clima::{to_clima_info, ClimaInfo};
use crate::client::{WeatherApiClient, WeatherProvider};
use crate::config::WeatherConfig;
use crate::error::WeatherError;
use crate::health::SERVICE_UNAVAILABLE;
use crate::query::WeatherQuery;

/// City used for the live health probe.
pub const PROBE_CITY: &str = "London";

/// Orchestrates a provider and the mapper for one lookup at a time.
///
/// Stateless between calls; cheap to share behind an `Arc`.
pub struct WeatherService {
    provider: Arc<dyn WeatherProvider>,
    debug: bool,
}

impl WeatherService {
    pub fn new(provider: Arc<dyn WeatherProvider>, debug: bool) -> Self {
        Self { provider, debug }
    }

    /// Wire the service to WeatherAPI.com using `config`.
    pub fn from_config(config: &WeatherConfig) -> Result<Self, WeatherError> {
        let client = WeatherApiClient::new(config.clone())?;
        Ok(Self::new(Arc::new(client), config.debug()))
    }

    /// Look up the current weather for `city`.
    ///
    /// Blank input fails with [`WeatherError::InvalidInput`] before any
    /// upstream call. Provider failures are logged and returned unchanged.
    pub async fn get_weather(&self, city: &str) -> Result<ClimaInfo, WeatherError> {
        let query = WeatherQuery::parse(city)?;

        if self.debug {
            tracing::debug!(ciudad = %query, "Fetching weather");
        }

        let raw = match self.provider.fetch_weather(&query).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!(ciudad = %query, error = %e, "Failed to fetch weather");
                return Err(e);
            }
        };

        let clima = to_clima_info(&raw);

        if self.debug {
            tracing::debug!(
                ciudad = %clima.ciudad,
                temperatura = clima.temperatura,
                "Weather fetched",
            );
        }

        Ok(clima)
    }

    /// Probe the upstream with a real lookup for [`PROBE_CITY`].
    ///
    /// Always resolves: a failed probe becomes [`SERVICE_UNAVAILABLE`].
    pub async fn check_health(&self) -> String {
        match self.get_weather(PROBE_CITY).await {
            Ok(clima) => format!(
                "Service running correctly. Probe weather: {} - {:?}°C",
                clima.ciudad, clima.temperatura
            ),
            Err(e) => {
                tracing::warn!(error = %e, "Health probe failed");
                SERVICE_UNAVAILABLE.to_string()
            }
        }
    }
}
