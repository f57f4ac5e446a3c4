//! Nearby events port

use async_trait::async_trait;
use domain::Event;
use domain::value_objects::Coordinates;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Default search radius for nearby events, in the provider's distance unit
pub const DEFAULT_EVENT_RADIUS: u32 = 5;

/// Port for nearby event discovery
#[cfg_attr(test, automock)]
#[async_trait]
pub trait EventFinderPort: Send + Sync {
    /// Find events within `radius` of the given coordinates
    ///
    /// An empty vector means the provider has no events nearby; errors are
    /// reserved for failed lookups.
    async fn find_events(
        &self,
        coordinates: &Coordinates,
        radius: u32,
    ) -> Result<Vec<Event>, ApplicationError>;
}
