//! Transit adapter - Implements StopLocatorPort using integration_transit's MBTA client

use application::error::ApplicationError;
use application::ports::StopLocatorPort;
use async_trait::async_trait;
use domain::Stop;
use domain::value_objects::Coordinates;
use integration_transit::{MbtaTransitClient, TransitClient, TransitConfig, TransitError};
use tracing::instrument;

/// Adapter for nearest-stop lookups via the MBTA v3 API
pub struct MbtaStopAdapter {
    client: MbtaTransitClient,
}

impl std::fmt::Debug for MbtaStopAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MbtaStopAdapter")
            .field("client", &"MbtaTransitClient")
            .finish()
    }
}

impl MbtaStopAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails to initialize.
    pub fn with_config(config: &TransitConfig) -> Result<Self, ApplicationError> {
        let client = MbtaTransitClient::new(config).map_err(Self::map_error)?;
        Ok(Self { client })
    }

    /// Map integration transit error to application error
    fn map_error(err: TransitError) -> ApplicationError {
        match err {
            TransitError::NoStopsFound(near) => ApplicationError::NoStopFound(near),
            TransitError::ConfigurationError(e) => ApplicationError::Configuration(e),
            other => ApplicationError::Upstream(other.to_string()),
        }
    }
}

#[async_trait]
impl StopLocatorPort for MbtaStopAdapter {
    #[instrument(skip(self), fields(coordinates = %coordinates))]
    async fn nearest_stop(&self, coordinates: &Coordinates) -> Result<Stop, ApplicationError> {
        self.client
            .nearest_stop(coordinates)
            .await
            .map_err(Self::map_error)
    }
}
