//! Weather adapter - Implements WeatherPort using integration_weather

use application::error::ApplicationError;
use application::ports::WeatherPort;
use async_trait::async_trait;
use domain::Weather;
use domain::value_objects::Coordinates;
use integration_weather::{OpenWeatherMapClient, WeatherClient, WeatherConfig, WeatherError};
use tracing::instrument;

/// Adapter for current weather via OpenWeatherMap
pub struct WeatherAdapter {
    client: OpenWeatherMapClient,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"OpenWeatherMapClient")
            .finish()
    }
}

impl WeatherAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client = OpenWeatherMapClient::new(config).map_err(Self::map_error)?;
        Ok(Self { client })
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::ConfigurationError(e) => ApplicationError::Configuration(e),
            other => ApplicationError::Upstream(other.to_string()),
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self), fields(coordinates = %coordinates))]
    async fn current_weather(&self, coordinates: &Coordinates) -> Result<Weather, ApplicationError> {
        self.client
            .current_weather(coordinates)
            .await
            .map_err(Self::map_error)
    }
}
