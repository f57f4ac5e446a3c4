//! Events service configuration

use domain::validation::validate_base_url;
use serde::{Deserialize, Serialize};

/// Number of events requested per lookup
pub const EVENT_PAGE_SIZE: u8 = 5;

/// Largest radius the Discovery API accepts, in miles
const MAX_RADIUS: u32 = 500;

/// Configuration for the Ticketmaster Discovery API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsConfig {
    /// Base URL for the Ticketmaster API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Search radius in miles
    #[serde(default = "default_radius")]
    pub radius: u32,

    /// Ticketmaster API key
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
}

fn default_base_url() -> String {
    "https://app.ticketmaster.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

const fn default_radius() -> u32 {
    5
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            radius: default_radius(),
            api_key: None,
        }
    }
}

impl EventsConfig {
    /// Create a configuration for testing (dummy key, short timeout)
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            api_key: Some("test-ticketmaster-key".to_string()),
            ..Default::default()
        }
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

        if self.radius == 0 || self.radius > MAX_RADIUS {
            return Err(format!("radius must be between 1 and {MAX_RADIUS}"));
        }

        Ok(())
    }
}
