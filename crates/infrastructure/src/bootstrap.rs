//! Wiring of the enrichment pipeline from configuration

use std::sync::Arc;

use application::EnrichmentService;
use application::error::ApplicationError;
use tracing::{info, warn};

use crate::adapters::{
    MapboxGeocodingAdapter, MbtaStopAdapter, TicketmasterEventsAdapter, WeatherAdapter,
};
use crate::config::AppConfig;

/// Build the enrichment service with every configured provider
///
/// Weather is only attached when an OpenWeatherMap key is present.
///
/// # Errors
///
/// Returns `ApplicationError::Configuration` if a required credential is
/// missing or an HTTP client cannot be created.
pub fn build_enrichment_service(config: &AppConfig) -> Result<EnrichmentService, ApplicationError> {
    let geocoder = MapboxGeocodingAdapter::with_config(&config.mapbox_config())?;
    let stops = MbtaStopAdapter::with_config(&config.transit_config())?;
    let events = TicketmasterEventsAdapter::with_config(&config.events_config())?;

    let mut service = EnrichmentService::new(Arc::new(geocoder), Arc::new(stops))
        .with_event_finder(Arc::new(events))
        .with_event_radius(config.events.radius);

    if config.weather_enabled() {
        let weather = WeatherAdapter::with_config(config.weather_config())?;
        service = service.with_weather(Arc::new(weather));
    } else {
        warn!("OpenWeatherMap key not configured, weather lookups disabled");
    }

    info!(
        weather = config.weather_enabled(),
        radius = config.events.radius,
        "Enrichment service initialized"
    );

    Ok(service)
}
