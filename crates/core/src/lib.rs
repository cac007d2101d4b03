//! Clima core library.
//!
//! Everything needed to turn a city name into a [`ClimaInfo`]: upstream
//! configuration, the WeatherAPI.com client, the response mapper, the weather
//! service with its health probe, and the error taxonomy. No HTTP-server
//! dependencies live here.

pub mod client;
pub mod clima;
pub mod config;
pub mod error;
pub mod health;
pub mod query;
pub mod service;
pub mod upstream;

pub use client::{WeatherApiClient, WeatherProvider};
pub use clima::{to_clima_info, ClimaInfo};
pub use config::WeatherConfig;
pub use error::{UpstreamError, WeatherError};
pub use health::{HealthStatus, ServiceState};
pub use query::WeatherQuery;
pub use service::WeatherService;
pub use upstream::UpstreamWeather;
