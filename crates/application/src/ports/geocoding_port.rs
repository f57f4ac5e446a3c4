//! Geocoding port
//!
//! Resolves a free-text place description to coordinates.

use async_trait::async_trait;
use domain::value_objects::{Coordinates, PlaceName};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for geocoding operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve a place name to coordinates
    ///
    /// Returns `ApplicationError::LocationNotFound` when the provider has no
    /// match and `ApplicationError::Upstream` on network or parse failures.
    async fn geocode(&self, place: &PlaceName) -> Result<Coordinates, ApplicationError>;
}
