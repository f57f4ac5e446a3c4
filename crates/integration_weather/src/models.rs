//! OpenWeatherMap response models

use domain::Weather;
use serde::Deserialize;

/// `GET /data/2.5/weather` response, reduced to the fields we read
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    /// Temperature readings
    pub main: MainReadings,
    /// Condition list, most significant first
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
}

/// `main` block
#[derive(Debug, Clone, Deserialize)]
pub struct MainReadings {
    /// Air temperature in the requested units
    #[serde(default)]
    pub temp: Option<f64>,
    /// Perceived temperature in the requested units
    #[serde(default)]
    pub feels_like: Option<f64>,
}

/// One entry of the `weather` list
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherCondition {
    /// Human-readable description, e.g. "broken clouds"
    #[serde(default)]
    pub description: Option<String>,
}

impl From<ApiResponse> for Weather {
    fn from(response: ApiResponse) -> Self {
        let description = response
            .weather
            .into_iter()
            .next()
            .and_then(|condition| condition.description)
            .unwrap_or_default();

        Self {
            temperature: response.main.temp,
            feels_like: response.main.feels_like,
            description,
        }
    }
}
