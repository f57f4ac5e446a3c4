//! Provider configuration: geocoding, transit, events, weather.
//!
//! Each section converts into its integration crate's config, merging in the
//! matching credential.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use super::credentials::present;

pub use integration_weather::WeatherUnits;

const fn default_timeout_secs() -> u64 {
    10
}

/// Mapbox geocoding configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingAppConfig {
    /// Mapbox API base URL
    #[serde(default = "default_mapbox_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_mapbox_base_url() -> String {
    "https://api.mapbox.com".to_string()
}

impl Default for GeocodingAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_mapbox_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GeocodingAppConfig {
    /// Convert to `integration_transit` geocoding config
    #[must_use]
    pub fn to_mapbox_config(&self, token: Option<&SecretString>) -> integration_transit::MapboxConfig {
        integration_transit::MapboxConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            access_token: present(token),
        }
    }
}

/// MBTA stops configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitAppConfig {
    /// MBTA v3 API base URL
    #[serde(default = "default_mbta_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_mbta_base_url() -> String {
    "https://api-v3.mbta.com".to_string()
}

impl Default for TransitAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_mbta_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl TransitAppConfig {
    /// Convert to `integration_transit` config
    #[must_use]
    pub fn to_transit_config(&self, api_key: Option<&SecretString>) -> integration_transit::TransitConfig {
        integration_transit::TransitConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            api_key: present(api_key),
        }
    }
}

/// Ticketmaster events configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsAppConfig {
    /// Ticketmaster API base URL
    #[serde(default = "default_ticketmaster_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Search radius in miles (1-500)
    #[serde(default = "default_radius")]
    pub radius: u32,
}

fn default_ticketmaster_base_url() -> String {
    "https://app.ticketmaster.com".to_string()
}

const fn default_radius() -> u32 {
    5
}

impl Default for EventsAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_ticketmaster_base_url(),
            timeout_secs: default_timeout_secs(),
            radius: default_radius(),
        }
    }
}

impl EventsAppConfig {
    /// Convert to `integration_events` config
    #[must_use]
    pub fn to_events_config(&self, api_key: Option<&SecretString>) -> integration_events::EventsConfig {
        integration_events::EventsConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            radius: self.radius,
            api_key: present(api_key),
        }
    }
}

/// OpenWeatherMap configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherAppConfig {
    /// OpenWeatherMap API base URL
    #[serde(default = "default_openweather_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Unit system: "standard", "metric" or "imperial"
    #[serde(default)]
    pub units: WeatherUnits,
}

fn default_openweather_base_url() -> String {
    "https://api.openweathermap.org".to_string()
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_openweather_base_url(),
            timeout_secs: default_timeout_secs(),
            units: WeatherUnits::default(),
        }
    }
}

impl WeatherAppConfig {
    /// Convert to `integration_weather` config
    #[must_use]
    pub fn to_weather_config(&self, api_key: Option<&SecretString>) -> integration_weather::WeatherConfig {
        integration_weather::WeatherConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            units: self.units,
            api_key: present(api_key),
        }
    }
}
