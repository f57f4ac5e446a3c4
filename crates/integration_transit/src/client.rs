//! MBTA stops client
//!
//! Finds the stop nearest to a coordinate pair using the
//! [MBTA v3](https://api-v3.mbta.com/docs/swagger/index.html) `GET /stops`
//! endpoint sorted by distance.

use std::time::Duration;

use async_trait::async_trait;
use domain::Stop;
use domain::value_objects::Coordinates;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::TransitConfig;
use crate::error::TransitError;
use crate::models::{StopResource, StopsResponse};

/// Trait for transit service clients
#[async_trait]
pub trait TransitClient: Send + Sync {
    /// Find the stop nearest to a set of coordinates
    async fn nearest_stop(&self, coordinates: &Coordinates) -> Result<Stop, TransitError>;
}

/// Query parameters for a nearest-stop request
///
/// Coordinates are passed through as received from the geocoder.
#[must_use]
pub fn stop_query_params(coordinates: &Coordinates, api_key: &str) -> Vec<(&'static str, String)> {
    vec![
        ("filter[latitude]", coordinates.latitude().to_string()),
        ("filter[longitude]", coordinates.longitude().to_string()),
        ("sort", "distance".to_string()),
        ("api_key", api_key.to_string()),
    ]
}

/// MBTA v3 transit client
#[derive(Debug)]
pub struct MbtaTransitClient {
    client: Client,
    config: TransitConfig,
    api_key: String,
}

impl MbtaTransitClient {
    /// Create a new MBTA transit client
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client cannot
    /// be initialized.
    pub fn new(config: &TransitConfig) -> Result<Self, TransitError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                TransitError::ConfigurationError("MBTA API key is required".to_string())
            })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("StopScout/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransitError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
            api_key,
        })
    }

    /// Parse the raw stops JSON and pick the nearest stop
    fn parse_stops_response(body: &str, coordinates: &Coordinates) -> Result<Stop, TransitError> {
        let response: StopsResponse =
            serde_json::from_str(body).map_err(|e| TransitError::ParseError(e.to_string()))?;

        let nearest = response
            .nearest()
            .ok_or_else(|| TransitError::NoStopsFound(coordinates.to_string()))?;

        nearest
            .to_stop()
            .ok_or_else(|| TransitError::ParseError(missing_name(nearest)))
    }
}

fn missing_name(resource: &StopResource) -> String {
    format!(
        "stop {} has no name",
        resource.id.as_deref().unwrap_or("<unknown>")
    )
}

#[async_trait]
impl TransitClient for MbtaTransitClient {
    #[instrument(skip(self), fields(coordinates = %coordinates))]
    async fn nearest_stop(&self, coordinates: &Coordinates) -> Result<Stop, TransitError> {
        let url = format!("{}/stops", self.config.base_url);
        let params = stop_query_params(coordinates, &self.api_key);

        debug!(?url, "Searching nearest stop");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TransitError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    TransitError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TransitError::RateLimitExceeded {
                retry_after_secs: response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok()),
            });
        }

        if status.is_server_error() {
            return Err(TransitError::ServiceUnavailable(format!("HTTP {status}")));
        }

        if !status.is_success() {
            return Err(TransitError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| TransitError::ParseError(e.to_string()))?;

        let stop = Self::parse_stops_response(&body, coordinates)?;
        debug!(stop = %stop.name, accessible = stop.wheelchair_accessible, "Nearest stop found");
        Ok(stop)
    }
}
