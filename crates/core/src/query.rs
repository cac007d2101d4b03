use std::fmt;

use crate::error::WeatherError;

/// A trimmed, non-empty city name.
///
/// The only way to build one is [`WeatherQuery::parse`], so anything holding a
/// `WeatherQuery` can rely on the city never being blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery(String);

impl WeatherQuery {
    pub fn parse(city: &str) -> Result<Self, WeatherError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(WeatherError::InvalidInput(
                "city must not be blank".to_string(),
            ));
        }
        Ok(Self(city.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WeatherQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
