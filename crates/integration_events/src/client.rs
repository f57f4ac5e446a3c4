//! Ticketmaster Discovery API client

use std::time::Duration;

use async_trait::async_trait;
use domain::Event;
use domain::value_objects::Coordinates;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::{
    config::{EVENT_PAGE_SIZE, EventsConfig},
    error::EventsError,
    models::EventsResponse,
};

/// Trait for nearby-event clients
#[async_trait]
pub trait EventsClient: Send + Sync {
    /// List events within `radius` miles of the coordinates
    ///
    /// An empty list means the provider had nothing to report.
    async fn find_events(
        &self,
        coordinates: &Coordinates,
        radius: u32,
    ) -> Result<Vec<Event>, EventsError>;
}

/// Ticketmaster Discovery API client
#[derive(Debug)]
pub struct TicketmasterClient {
    client: Client,
    api_key: String,
    base_url: String,
    timeout_secs: u64,
}

impl TicketmasterClient {
    /// Create a new Ticketmaster client
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or HTTP client cannot be created.
    pub fn new(config: &EventsConfig) -> Result<Self, EventsError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                EventsError::ConfigurationError("Ticketmaster API key is required".to_string())
            })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("StopScout/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| EventsError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            api_key,
            base_url: config.base_url.clone(),
            timeout_secs: config.timeout_secs,
        })
    }

    /// Build the query parameters for an event search
    fn query_params(&self, coordinates: &Coordinates, radius: u32) -> Vec<(&'static str, String)> {
        vec![
            ("apikey", self.api_key.clone()),
            ("latlong", coordinates.lat_long_pair()),
            ("radius", radius.to_string()),
            ("size", EVENT_PAGE_SIZE.to_string()),
        ]
    }
}

#[async_trait]
impl EventsClient for TicketmasterClient {
    #[instrument(skip(self), fields(provider = "ticketmaster", coordinates = %coordinates))]
    async fn find_events(
        &self,
        coordinates: &Coordinates,
        radius: u32,
    ) -> Result<Vec<Event>, EventsError> {
        let url = format!("{}/discovery/v2/events.json", self.base_url);

        debug!(url = %url, radius, "Sending Ticketmaster request");

        let response = self
            .client
            .get(&url)
            .query(&self.query_params(coordinates, radius))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    EventsError::Timeout {
                        timeout_secs: self.timeout_secs,
                    }
                } else if e.is_connect() {
                    EventsError::ConnectionFailed(e.to_string())
                } else {
                    EventsError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        debug!(status = %status, "Received Ticketmaster response");

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|h| h.to_str().ok())
                .and_then(|s| s.parse().ok());

            return Err(EventsError::RateLimitExceeded {
                retry_after_secs: retry_after,
            });
        }

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(EventsError::AuthenticationFailed(
                "Invalid Ticketmaster API key".to_string(),
            ));
        }

        if status.is_server_error() {
            return Err(EventsError::ServiceUnavailable(format!("HTTP {status}")));
        }

        if !status.is_success() {
            return Err(EventsError::RequestFailed(format!("HTTP {status}")));
        }

        let api_response: EventsResponse = response
            .json()
            .await
            .map_err(|e| EventsError::ParseError(e.to_string()))?;

        if !api_response.has_embedded() {
            debug!("No events listed near coordinates");
            return Ok(Vec::new());
        }

        let events = api_response.into_events();
        debug!(count = events.len(), "Ticketmaster search completed");

        Ok(events)
    }
}
