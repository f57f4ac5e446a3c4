//! OpenWeatherMap weather client
//!
//! HTTP client for the OpenWeatherMap current weather API.

use std::fmt;

use async_trait::async_trait;
use domain::Weather;
use domain::validation::validate_base_url;
use domain::value_objects::Coordinates;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::ApiResponse;

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Missing or unusable configuration
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Unit system for temperatures
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherUnits {
    /// Kelvin
    Standard,
    /// Celsius
    Metric,
    /// Fahrenheit
    #[default]
    Imperial,
}

impl WeatherUnits {
    /// Value of the `units` query parameter
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }

    /// Temperature unit suffix for display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Standard => "K",
            Self::Metric => "°C",
            Self::Imperial => "°F",
        }
    }
}

impl fmt::Display for WeatherUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeatherMap API base URL (default: <https://api.openweathermap.org>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Unit system (default: imperial)
    #[serde(default)]
    pub units: WeatherUnits,

    /// OpenWeatherMap API key; weather is disabled without one
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org".to_string()
}

const fn default_timeout() -> u64 {
    10
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            units: WeatherUnits::default(),
            api_key: None,
        }
    }
}

impl WeatherConfig {
    /// Whether a usable API key is configured
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        validate_base_url(&self.base_url)?;

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}

/// Weather client trait for fetching weather data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get current conditions for a location
    async fn current_weather(&self, coordinates: &Coordinates) -> Result<Weather, WeatherError>;
}

/// OpenWeatherMap HTTP client implementation
#[derive(Debug)]
pub struct OpenWeatherMapClient {
    client: Client,
    config: WeatherConfig,
    api_key: String,
}

impl OpenWeatherMapClient {
    /// Create a new OpenWeatherMap client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is configured or the HTTP client
    /// cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                WeatherError::ConfigurationError("OpenWeatherMap API key is required".to_string())
            })?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("StopScout/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    /// Build the query parameters for a current-weather request
    fn query_params(&self, coordinates: &Coordinates) -> [(&'static str, String); 4] {
        [
            ("lat", coordinates.latitude().to_string()),
            ("lon", coordinates.longitude().to_string()),
            ("units", self.config.units.as_str().to_string()),
            ("appid", self.api_key.clone()),
        ]
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherMapClient {
    #[instrument(skip(self), fields(lat = %coordinates.latitude(), lon = %coordinates.longitude()))]
    async fn current_weather(&self, coordinates: &Coordinates) -> Result<Weather, WeatherError> {
        let url = format!("{}/data/2.5/weather", self.config.base_url);

        debug!(url = %url, units = %self.config.units, "Fetching current weather");

        let response = self
            .client
            .get(&url)
            .query(&self.query_params(coordinates))
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        let weather = Weather::from(api_response);
        debug!(description = %weather.description, "Current weather received");

        Ok(weather)
    }
}
