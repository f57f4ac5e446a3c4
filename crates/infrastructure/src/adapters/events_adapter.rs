//! Events adapter - Implements EventFinderPort using integration_events

use application::error::ApplicationError;
use application::ports::EventFinderPort;
use async_trait::async_trait;
use domain::Event;
use domain::value_objects::Coordinates;
use integration_events::{EventsClient, EventsConfig, EventsError, TicketmasterClient};
use tracing::{debug, instrument};

/// Adapter for nearby events via the Ticketmaster Discovery API
pub struct TicketmasterEventsAdapter {
    client: TicketmasterClient,
}

impl std::fmt::Debug for TicketmasterEventsAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TicketmasterEventsAdapter")
            .field("client", &"TicketmasterClient")
            .finish()
    }
}

impl TicketmasterEventsAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails to initialize.
    pub fn with_config(config: &EventsConfig) -> Result<Self, ApplicationError> {
        let client = TicketmasterClient::new(config).map_err(Self::map_error)?;
        Ok(Self { client })
    }

    /// Map integration events error to application error
    fn map_error(err: EventsError) -> ApplicationError {
        match err {
            EventsError::ConfigurationError(e) => ApplicationError::Configuration(e),
            other => ApplicationError::Upstream(other.to_string()),
        }
    }
}

#[async_trait]
impl EventFinderPort for TicketmasterEventsAdapter {
    #[instrument(skip(self), fields(coordinates = %coordinates))]
    async fn find_events(
        &self,
        coordinates: &Coordinates,
        radius: u32,
    ) -> Result<Vec<Event>, ApplicationError> {
        let events = self
            .client
            .find_events(coordinates, radius)
            .await
            .map_err(Self::map_error)?;

        debug!(count = events.len(), "Events fetched");
        Ok(events)
    }
}
