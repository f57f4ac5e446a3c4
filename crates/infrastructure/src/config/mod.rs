//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `credentials`: provider API keys
//! - `integrations`: Mapbox, MBTA, Ticketmaster, OpenWeatherMap
//! - `telemetry`: log level and format
//!
//! Sources, lowest precedence first: built-in defaults, an optional
//! `config.toml`, `STOPSCOUT_*` environment variables (`__` separates
//! nesting, e.g. `STOPSCOUT_EVENTS__RADIUS=10`), then the legacy
//! `MAPBOX_TOKEN`, `MBTA_API_KEY`, `TICKETMASTER_API_KEY` and
//! `OPENWEATHER_API_KEY` variables.

mod credentials;
mod error;
mod integrations;
mod server;
mod telemetry;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub use credentials::CredentialsConfig;
pub use error::ConfigurationError;
pub use integrations::{
    EventsAppConfig, GeocodingAppConfig, TransitAppConfig, WeatherAppConfig, WeatherUnits,
};
pub use server::ServerConfig;
pub use telemetry::{LogFormat, TelemetryAppConfig};

use credentials::{LEGACY_ENV_VARS, present};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "STOPSCOUT";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Provider credentials
    #[serde(default)]
    pub credentials: CredentialsConfig,

    /// Mapbox geocoding configuration
    #[serde(default)]
    pub geocoding: GeocodingAppConfig,

    /// MBTA stops configuration
    #[serde(default)]
    pub transit: TransitAppConfig,

    /// Ticketmaster events configuration
    #[serde(default)]
    pub events: EventsAppConfig,

    /// OpenWeatherMap configuration
    #[serde(default)]
    pub weather: WeatherAppConfig,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryAppConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) and the process environment
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or deserialized.
    pub fn load() -> Result<Self, ConfigurationError> {
        let builder = Self::defaults()?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            .add_source(Self::environment(None));

        Self::finish(builder, |name| std::env::var(name).ok())
    }

    /// Load configuration from a TOML document and an explicit environment map
    ///
    /// The process environment is not consulted.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be parsed or deserialized.
    pub fn from_sources(toml: &str, env: HashMap<String, String>) -> Result<Self, ConfigurationError> {
        let legacy = env.clone();
        let builder = Self::defaults()?
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .add_source(Self::environment(Some(env)));

        Self::finish(builder, |name| legacy.get(name).cloned())
    }

    /// Load configuration from a TOML document only
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be parsed or deserialized.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigurationError> {
        Self::from_sources(toml, HashMap::new())
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigurationError> {
        Ok(config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?)
    }

    fn environment(source: Option<HashMap<String, String>>) -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(source)
    }

    fn finish(
        mut builder: config::ConfigBuilder<config::builder::DefaultState>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigurationError> {
        for (var, key) in LEGACY_ENV_VARS {
            let value = lookup(var).filter(|v| !v.trim().is_empty());
            if value.is_some() {
                debug!(var, "Using legacy credential variable");
            }
            builder = builder.set_override_option(key, value)?;
        }

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Whether the optional weather lookup has a key
    #[must_use]
    pub fn weather_enabled(&self) -> bool {
        present(self.credentials.openweather_api_key.as_ref()).is_some()
    }

    /// Mapbox client configuration with credential
    #[must_use]
    pub fn mapbox_config(&self) -> integration_transit::MapboxConfig {
        self.geocoding
            .to_mapbox_config(self.credentials.mapbox_token.as_ref())
    }

    /// MBTA client configuration with credential
    #[must_use]
    pub fn transit_config(&self) -> integration_transit::TransitConfig {
        self.transit
            .to_transit_config(self.credentials.mbta_api_key.as_ref())
    }

    /// Ticketmaster client configuration with credential
    #[must_use]
    pub fn events_config(&self) -> integration_events::EventsConfig {
        self.events
            .to_events_config(self.credentials.ticketmaster_api_key.as_ref())
    }

    /// OpenWeatherMap client configuration with credential
    #[must_use]
    pub fn weather_config(&self) -> integration_weather::WeatherConfig {
        self.weather
            .to_weather_config(self.credentials.openweather_api_key.as_ref())
    }

    /// Validate credentials and every section
    ///
    /// # Errors
    ///
    /// Returns the first problem found: a missing required credential or an
    /// invalid section value.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let required = [
            ("mapbox_token", "MAPBOX_TOKEN", &self.credentials.mapbox_token),
            ("mbta_api_key", "MBTA_API_KEY", &self.credentials.mbta_api_key),
            (
                "ticketmaster_api_key",
                "TICKETMASTER_API_KEY",
                &self.credentials.ticketmaster_api_key,
            ),
        ];
        for (name, env_var, secret) in required {
            if present(secret.as_ref()).is_none() {
                return Err(ConfigurationError::MissingCredential { name, env_var });
            }
        }

        if self.server.host.trim().is_empty() {
            return Err(ConfigurationError::invalid("server", "host must not be empty"));
        }

        self.mapbox_config()
            .validate()
            .map_err(|e| ConfigurationError::invalid("geocoding", e))?;
        self.transit_config()
            .validate()
            .map_err(|e| ConfigurationError::invalid("transit", e))?;
        self.events_config()
            .validate()
            .map_err(|e| ConfigurationError::invalid("events", e))?;
        self.weather_config()
            .validate()
            .map_err(|e| ConfigurationError::invalid("weather", e))?;

        EnvFilter::try_new(&self.telemetry.level)
            .map_err(|e| ConfigurationError::invalid("telemetry", e.to_string()))?;

        Ok(())
    }
}
