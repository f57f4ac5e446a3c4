//! Transit service configuration

use domain::validation::validate_base_url;
use serde::{Deserialize, Serialize};

/// Configuration for the MBTA v3 stops service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitConfig {
    /// Base URL for the MBTA v3 API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// MBTA API key
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
}

fn default_base_url() -> String {
    "https://api-v3.mbta.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for TransitConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            api_key: None,
        }
    }
}

impl TransitConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            api_key: Some("test-mbta-key".to_string()),
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

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TransitConfig::default();
        assert_eq!(config.base_url, "https://api-v3.mbta.com");
        assert_eq!(config.timeout_secs, 10);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_testing_config() {
        let config = TransitConfig::for_testing();
        assert_eq!(config.timeout_secs, 5);
        assert!(config.api_key.is_some());
    }

    #[test]
    fn test_validation_success() {
        let config = TransitConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_empty_base_url() {
        let config = TransitConfig {
            base_url: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_bad_scheme() {
        let config = TransitConfig {
            base_url: "ftp://api-v3.mbta.com".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let config = TransitConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_api_key_is_not_serialized() {
        let config = TransitConfig::for_testing();
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("test-mbta-key"));

        let deserialized: TransitConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.base_url, config.base_url);
        assert!(deserialized.api_key.is_none());
    }
}
