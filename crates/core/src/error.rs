/// Errors produced while translating a city lookup into a weather summary.
///
/// None of the messages carry the upstream API key: transport errors are
/// stripped of their URL and upstream text is scrubbed before it lands here.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    /// The configured API key is empty or whitespace.
    #[error("Invalid API key: must not be blank")]
    InvalidApiKey,

    /// The configured base URL cannot be parsed.
    #[error("Invalid base URL '{0}'")]
    InvalidBaseUrl(String),

    /// The city name is empty after trimming.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The upstream could not be reached (DNS, connection refused, timeout).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The upstream answered, but not with a usable payload.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

/// Failures reported by the upstream provider itself.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// Non-2xx HTTP status.
    #[error("Upstream returned HTTP {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Provider error message, or a truncated body.
        message: String,
    },

    /// The body does not have the expected structure.
    #[error("Upstream body could not be decoded: {0}")]
    Decode(String),
}
