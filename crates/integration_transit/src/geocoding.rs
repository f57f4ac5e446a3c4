//! Mapbox geocoding client
//!
//! Converts free-form place names to geographic coordinates using the
//! [Mapbox Search Box](https://docs.mapbox.com/api/search/search-box/)
//! `forward` endpoint. The first returned feature wins.

use std::time::Duration;

use async_trait::async_trait;
use domain::value_objects::Coordinates;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use domain::validation::validate_base_url;

/// Configuration for the Mapbox geocoding service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapboxConfig {
    /// Base URL for the Mapbox API
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_geocoding_timeout_secs")]
    pub timeout_secs: u64,

    /// Mapbox access token
    #[serde(default, skip_serializing)]
    pub access_token: Option<String>,
}

fn default_geocoding_base_url() -> String {
    "https://api.mapbox.com".to_string()
}

const fn default_geocoding_timeout_secs() -> u64 {
    10
}

impl Default for MapboxConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoding_base_url(),
            timeout_secs: default_geocoding_timeout_secs(),
            access_token: None,
        }
    }
}

impl MapboxConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            access_token: Some("test-mapbox-token".to_string()),
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

/// Errors that can occur during geocoding
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Connection to geocoding service failed
    #[error("Geocoding connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to geocoding service failed
    #[error("Geocoding request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse geocoding response
    #[error("Geocoding parse error: {0}")]
    ParseError(String),

    /// Place could not be resolved to coordinates
    #[error("Place not found: {0}")]
    PlaceNotFound(String),

    /// Geocoding rate limit exceeded
    #[error("Geocoding rate limit exceeded")]
    RateLimitExceeded,

    /// Missing or unusable configuration
    #[error("Geocoding configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Geocoding request timed out")]
    Timeout,
}

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Convert a free-form place name to geographic coordinates
    async fn geocode(&self, place: &str) -> Result<Coordinates, GeocodingError>;
}

/// Mapbox Search Box geocoding client
#[derive(Debug)]
pub struct MapboxGeocodingClient {
    client: Client,
    config: MapboxConfig,
    access_token: String,
}

impl MapboxGeocodingClient {
    /// Create a new Mapbox geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the access token is missing or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &MapboxConfig) -> Result<Self, GeocodingError> {
        let access_token = config
            .access_token
            .clone()
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| {
                GeocodingError::ConfigurationError("Mapbox access token is required".to_string())
            })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("StopScout/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
            access_token,
        })
    }

    /// Parse a forward-search response into coordinates
    fn parse_forward_response(body: &str, place: &str) -> Result<Coordinates, GeocodingError> {
        let response: ForwardResponse =
            serde_json::from_str(body).map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let feature = response
            .features
            .as_ref()
            .and_then(|features| features.first())
            .ok_or_else(|| GeocodingError::PlaceNotFound(place.to_string()))?;

        // GeoJSON order: [longitude, latitude]
        let [longitude, latitude, ..] = feature.geometry.coordinates.as_slice() else {
            return Err(GeocodingError::ParseError(format!(
                "expected [lng, lat], got {} values",
                feature.geometry.coordinates.len()
            )));
        };

        Coordinates::new(latitude.to_string(), longitude.to_string())
            .map_err(|e| GeocodingError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl GeocodingClient for MapboxGeocodingClient {
    #[instrument(skip(self))]
    async fn geocode(&self, place: &str) -> Result<Coordinates, GeocodingError> {
        let place = place.trim();
        if place.is_empty() {
            return Err(GeocodingError::PlaceNotFound(
                "Place name must not be empty".to_string(),
            ));
        }

        let url = format!("{}/search/searchbox/v1/forward", self.config.base_url);
        let params = [("q", place), ("access_token", self.access_token.as_str())];

        debug!(?url, %place, "Geocoding place");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodingError::Timeout
                } else {
                    GeocodingError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GeocodingError::RateLimitExceeded);
        }

        if !status.is_success() {
            return Err(GeocodingError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let coordinates = Self::parse_forward_response(&body, place)?;
        debug!(%place, %coordinates, "Geocoded place");

        Ok(coordinates)
    }
}

/// Raw Mapbox forward-search response
#[derive(Debug, Deserialize)]
struct ForwardResponse {
    #[serde(default)]
    features: Option<Vec<Feature>>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    coordinates: Vec<serde_json::Number>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapbox_config_default() {
        let config = MapboxConfig::default();
        assert_eq!(config.base_url, "https://api.mapbox.com");
        assert_eq!(config.timeout_secs, 10);
        assert!(config.access_token.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_mapbox_config_invalid() {
        let config = MapboxConfig {
            base_url: "not a url".to_string(),
            ..MapboxConfig::default()
        };
        assert!(config.validate().is_err());

        let config = MapboxConfig {
            timeout_secs: 0,
            ..MapboxConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_new_requires_token() {
        let err = MapboxGeocodingClient::new(&MapboxConfig::default()).unwrap_err();
        assert!(matches!(err, GeocodingError::ConfigurationError(_)));
        assert!(MapboxGeocodingClient::new(&MapboxConfig::for_testing()).is_ok());
    }

    #[test]
    fn test_geocoding_error_display() {
        let err = GeocodingError::PlaceNotFound("Atlantis".to_string());
        assert!(err.to_string().contains("Atlantis"));

        let err = GeocodingError::Timeout;
        assert!(err.to_string().contains("timed out"));
    }

    #[test]
    fn test_forward_response_parsing() {
        let json = r#"{"type": "FeatureCollection", "features": [
            {"type": "Feature", "geometry": {"type": "Point", "coordinates": [-71.2924, 42.2965]}},
            {"type": "Feature", "geometry": {"type": "Point", "coordinates": [-70.0, 41.0]}}
        ]}"#;
        let coords = MapboxGeocodingClient::parse_forward_response(json, "Wellesley").unwrap();
        assert_eq!(coords.latitude(), "42.2965");
        assert_eq!(coords.longitude(), "-71.2924");
    }

    #[test]
    fn test_forward_response_no_features() {
        for json in [r#"{"features": []}"#, r"{}", r#"{"features": null}"#] {
            let err = MapboxGeocodingClient::parse_forward_response(json, "Atlantis").unwrap_err();
            assert!(matches!(err, GeocodingError::PlaceNotFound(_)), "{json}");
        }
    }

    #[test]
    fn test_forward_response_short_coordinates() {
        let json = r#"{"features": [{"geometry": {"coordinates": [-71.2924]}}]}"#;
        let err = MapboxGeocodingClient::parse_forward_response(json, "Wellesley").unwrap_err();
        assert!(matches!(err, GeocodingError::ParseError(_)));
    }

    #[test]
    fn test_forward_response_out_of_range() {
        let json = r#"{"features": [{"geometry": {"coordinates": [10.0, 95.0]}}]}"#;
        let err = MapboxGeocodingClient::parse_forward_response(json, "Nowhere").unwrap_err();
        assert!(matches!(err, GeocodingError::ParseError(_)));
    }
}
