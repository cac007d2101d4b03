use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use axum::http::HeaderValue;
use clima_core::config::{DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT, DEFAULT_TIMEOUT};
use clima_core::{WeatherConfig, WeatherError};
use tracing::level_filters::LevelFilter;

/// Errors raised while reading configuration at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} has invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error(transparent)]
    Weather(#[from] WeatherError),
}

/// Deployment mode, selected with `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
    Test,
}

impl AppEnv {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" => Some(Self::Development),
            "production" => Some(Self::Production),
            "test" => Some(Self::Test),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Test => "test",
        }
    }

    /// Dotenv file read for this mode.
    pub fn env_file(&self) -> &'static str {
        match self {
            Self::Development => ".env.development",
            Self::Production => ".env.production",
            Self::Test => ".env.test",
        }
    }
}

impl fmt::Display for AppEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Origins allowed by the CORS layer.
#[derive(Debug, Clone, PartialEq)]
pub enum CorsOrigins {
    Any,
    List(Vec<HeaderValue>),
}

/// Server configuration loaded from environment variables.
///
/// Built once in `main` and passed down; nothing reads the environment after
/// startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins (default: any).
    pub cors_origins: CorsOrigins,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub app_env: AppEnv,
    /// Default tracing level when `RUST_LOG` is unset (default: `info`).
    pub log_level: LevelFilter,
    /// Upstream provider settings.
    pub weather: WeatherConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                         | Default                        |
    /// |---------------------------------|--------------------------------|
    /// | `WEATHER_API_KEY`               | required                       |
    /// | `API_BASE_URL`                  | `http://api.weatherapi.com/v1` |
    /// | `DEBUG`                         | `false`                        |
    /// | `LOG_LEVEL`                     | `info`                         |
    /// | `APP_ENV`                       | `development`                  |
    /// | `HOST`                          | `0.0.0.0`                      |
    /// | `PORT`                          | `8080`                         |
    /// | `CORS_ORIGINS`                  | `*`                            |
    /// | `REQUEST_TIMEOUT_SECS`          | `30`                           |
    /// | `UPSTREAM_TIMEOUT_SECS`         | `30`                           |
    /// | `UPSTREAM_CONNECT_TIMEOUT_SECS` | `10`                           |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its
    /// value. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = get("WEATHER_API_KEY").ok_or(ConfigError::Missing("WEATHER_API_KEY"))?;
        let base_url = get("API_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let debug = match get("DEBUG") {
            Some(value) => parse_bool("DEBUG", &value)?,
            None => false,
        };
        let upstream_timeout = parse_secs(
            "UPSTREAM_TIMEOUT_SECS",
            get("UPSTREAM_TIMEOUT_SECS"),
            DEFAULT_TIMEOUT.as_secs(),
        )?;
        let upstream_connect_timeout = parse_secs(
            "UPSTREAM_CONNECT_TIMEOUT_SECS",
            get("UPSTREAM_CONNECT_TIMEOUT_SECS"),
            DEFAULT_CONNECT_TIMEOUT.as_secs(),
        )?;

        let weather = WeatherConfig::new(api_key, base_url)?
            .with_debug(debug)
            .with_timeouts(
                Duration::from_secs(upstream_timeout),
                Duration::from_secs(upstream_connect_timeout),
            );

        let app_env = match get("APP_ENV") {
            Some(value) => AppEnv::parse(&value).ok_or_else(|| ConfigError::Invalid {
                var: "APP_ENV",
                value,
                reason: "expected development, production or test".into(),
            })?,
            None => AppEnv::Development,
        };

        let host = get("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port: u16 = parse_var("PORT", get("PORT"), 8080)?;
        let cors_origins = parse_cors_origins(get("CORS_ORIGINS"))?;
        let request_timeout_secs =
            parse_secs("REQUEST_TIMEOUT_SECS", get("REQUEST_TIMEOUT_SECS"), 30)?;
        let log_level = parse_var("LOG_LEVEL", get("LOG_LEVEL"), LevelFilter::INFO)?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            app_env,
            log_level,
            weather,
        })
    }
}

/// Load the dotenv file for the current `APP_ENV`, falling back to `.env`.
///
/// Returns the path that was loaded, if any. Variables already present in the
/// process environment win over file entries.
pub fn load_env_files() -> Option<PathBuf> {
    let mode = std::env::var("APP_ENV")
        .ok()
        .and_then(|v| AppEnv::parse(&v))
        .unwrap_or(AppEnv::Development);

    dotenvy::from_filename(mode.env_file())
        .or_else(|_| dotenvy::dotenv())
        .ok()
}

fn parse_var<T>(var: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match value {
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            reason: e.to_string(),
            value,
        }),
        None => Ok(default),
    }
}

fn parse_secs(var: &'static str, value: Option<String>, default: u64) -> Result<u64, ConfigError> {
    let secs = parse_var(var, value, default)?;
    if secs == 0 {
        return Err(ConfigError::Invalid {
            var,
            value: "0".into(),
            reason: "must be greater than zero".into(),
        });
    }
    Ok(secs)
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            var,
            value: value.to_string(),
            reason: "expected a boolean".into(),
        }),
    }
}

/// `*` (or unset) allows any origin; otherwise a comma-separated list.
fn parse_cors_origins(value: Option<String>) -> Result<CorsOrigins, ConfigError> {
    let Some(value) = value else {
        return Ok(CorsOrigins::Any);
    };
    if value.trim() == "*" {
        return Ok(CorsOrigins::Any);
    }

    let origins = value
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(|o| {
            HeaderValue::from_str(o).map_err(|e| ConfigError::Invalid {
                var: "CORS_ORIGINS",
                value: o.to_string(),
                reason: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsOrigins::List(origins))
}
