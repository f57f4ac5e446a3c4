//! Geocoding adapter - Implements GeocodingPort using integration_transit's Mapbox client

use application::error::ApplicationError;
use application::ports::GeocodingPort;
use async_trait::async_trait;
use domain::value_objects::{Coordinates, PlaceName};
use integration_transit::{GeocodingClient, GeocodingError, MapboxConfig, MapboxGeocodingClient};
use tracing::instrument;

/// Adapter for place geocoding via Mapbox Search Box
pub struct MapboxGeocodingAdapter {
    client: MapboxGeocodingClient,
}

impl std::fmt::Debug for MapboxGeocodingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapboxGeocodingAdapter")
            .field("client", &"MapboxGeocodingClient")
            .finish()
    }
}

impl MapboxGeocodingAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the token is missing or the HTTP client fails to initialize.
    pub fn with_config(config: &MapboxConfig) -> Result<Self, ApplicationError> {
        let client = MapboxGeocodingClient::new(config).map_err(Self::map_error)?;
        Ok(Self { client })
    }

    /// Map integration geocoding error to application error
    fn map_error(err: GeocodingError) -> ApplicationError {
        match err {
            GeocodingError::PlaceNotFound(place) => ApplicationError::LocationNotFound(place),
            GeocodingError::ConfigurationError(e) => ApplicationError::Configuration(e),
            other @ (GeocodingError::ConnectionFailed(_)
            | GeocodingError::RequestFailed(_)
            | GeocodingError::ParseError(_)
            | GeocodingError::RateLimitExceeded
            | GeocodingError::Timeout) => ApplicationError::Upstream(other.to_string()),
        }
    }
}

#[async_trait]
impl GeocodingPort for MapboxGeocodingAdapter {
    #[instrument(skip(self))]
    async fn geocode(&self, place: &PlaceName) -> Result<Coordinates, ApplicationError> {
        self.client
            .geocode(place.as_str())
            .await
            .map_err(Self::map_error)
    }
}
