use std::fmt;
use std::time::Duration;

use reqwest::Url;

use crate::error::WeatherError;

/// Default WeatherAPI.com base URL.
pub const DEFAULT_BASE_URL: &str = "http://api.weatherapi.com/v1";

/// Default total timeout for one upstream request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connect timeout for one upstream request.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings for talking to the upstream weather provider.
///
/// Built once at startup and shared read-only. The API key is private and the
/// [`Debug`] impl masks it, so the config can be logged safely.
#[derive(Clone)]
pub struct WeatherConfig {
    api_key: String,
    base_url: String,
    debug: bool,
    timeout: Duration,
    connect_timeout: Duration,
}

impl WeatherConfig {
    /// Validate and build a config with default timeouts.
    ///
    /// Fails with [`WeatherError::InvalidApiKey`] on a blank key and with
    /// [`WeatherError::InvalidBaseUrl`] when `base_url` is not an absolute URL.
    /// A trailing `/` on the base URL is dropped.
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, WeatherError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(WeatherError::InvalidApiKey);
        }

        let base_url = base_url.into();
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if Url::parse(&base_url).is_err() {
            return Err(WeatherError::InvalidBaseUrl(base_url));
        }

        Ok(Self {
            api_key,
            base_url,
            debug: false,
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        })
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_timeouts(mut self, timeout: Duration, connect_timeout: Duration) -> Self {
        self.timeout = timeout;
        self.connect_timeout = connect_timeout;
        self
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }
}

impl fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .field("debug", &self.debug)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}
