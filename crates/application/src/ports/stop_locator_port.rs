//! Transit stop lookup port

use async_trait::async_trait;
use domain::Stop;
use domain::value_objects::Coordinates;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for finding the transit stop nearest to a point
#[cfg_attr(test, automock)]
#[async_trait]
pub trait StopLocatorPort: Send + Sync {
    /// Find the nearest stop to the given coordinates
    ///
    /// Returns `ApplicationError::NoStopFound` when the provider returns no
    /// stops and `ApplicationError::Upstream` on network or parse failures.
    async fn nearest_stop(&self, coordinates: &Coordinates) -> Result<Stop, ApplicationError>;
}
