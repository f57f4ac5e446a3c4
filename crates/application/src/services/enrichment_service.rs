//! Enrichment service
//!
//! Runs the place lookup pipeline: geocode, nearest stop, then events and
//! weather as best-effort enrichment.

use std::{fmt, sync::Arc};

use domain::value_objects::{Coordinates, PlaceName};
use domain::{EnrichedResult, Event, Weather};
use tracing::{debug, info, instrument, warn};

use crate::{
    error::{ApplicationError, EnrichError},
    ports::{DEFAULT_EVENT_RADIUS, EventFinderPort, GeocodingPort, StopLocatorPort, WeatherPort},
    services::BestEffort,
};

/// Orchestrates one enriched place lookup
pub struct EnrichmentService {
    geocoder: Arc<dyn GeocodingPort>,
    stop_locator: Arc<dyn StopLocatorPort>,
    event_finder: Option<Arc<dyn EventFinderPort>>,
    weather: Option<Arc<dyn WeatherPort>>,
    event_radius: u32,
}

impl fmt::Debug for EnrichmentService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnrichmentService")
            .field("events_enabled", &self.event_finder.is_some())
            .field("weather_enabled", &self.weather.is_some())
            .field("event_radius", &self.event_radius)
            .finish_non_exhaustive()
    }
}

impl EnrichmentService {
    /// Create a service with the two required lookups
    pub fn new(geocoder: Arc<dyn GeocodingPort>, stop_locator: Arc<dyn StopLocatorPort>) -> Self {
        Self {
            geocoder,
            stop_locator,
            event_finder: None,
            weather: None,
            event_radius: DEFAULT_EVENT_RADIUS,
        }
    }

    /// Enable nearby event enrichment
    #[must_use]
    pub fn with_event_finder(mut self, event_finder: Arc<dyn EventFinderPort>) -> Self {
        self.event_finder = Some(event_finder);
        self
    }

    /// Enable current weather enrichment
    #[must_use]
    pub fn with_weather(mut self, weather: Arc<dyn WeatherPort>) -> Self {
        self.weather = Some(weather);
        self
    }

    /// Override the event search radius
    #[must_use]
    pub const fn with_event_radius(mut self, radius: u32) -> Self {
        self.event_radius = radius;
        self
    }

    /// Look up a place and enrich it
    ///
    /// # Errors
    ///
    /// Returns `MissingInput` for an empty place name and a generic
    /// `LookupFailed` if geocoding or the stop lookup fails. Event and
    /// weather failures never surface here.
    #[instrument(skip(self))]
    pub async fn enrich(&self, place: &str) -> Result<EnrichedResult, EnrichError> {
        self.try_enrich(place).await.map_err(|e| {
            if e.is_lookup_failure() {
                warn!(error = %e, "Place lookup failed");
            } else {
                debug!(error = %e, "Place lookup rejected");
            }
            EnrichError::from(&e)
        })
    }

    async fn try_enrich(&self, place: &str) -> Result<EnrichedResult, ApplicationError> {
        let place = PlaceName::parse(place).map_err(|_| ApplicationError::MissingInput)?;

        let coordinates = self.geocoder.geocode(&place).await?;
        debug!(%place, %coordinates, "Geocoded place");

        let stop = self.stop_locator.nearest_stop(&coordinates).await?;
        debug!(stop = %stop.name, accessible = stop.wheelchair_accessible, "Found nearest stop");

        let (events, weather) =
            tokio::join!(self.lookup_events(&coordinates), self.lookup_weather(&coordinates));

        info!(
            %place,
            stop = %stop.name,
            events = %events,
            weather = %weather,
            "Enriched place"
        );

        Ok(EnrichedResult::new(
            place.into_inner(),
            stop,
            events.into_value(),
            weather.into_value(),
        ))
    }

    async fn lookup_events(&self, coordinates: &Coordinates) -> BestEffort<Vec<Event>> {
        let Some(finder) = &self.event_finder else {
            return BestEffort::Disabled;
        };

        let outcome =
            BestEffort::from_result(finder.find_events(coordinates, self.event_radius).await);
        if let BestEffort::Failed(reason) = &outcome {
            warn!(%reason, "Event lookup failed, continuing without events");
        }
        outcome
    }

    async fn lookup_weather(&self, coordinates: &Coordinates) -> BestEffort<Weather> {
        let Some(weather) = &self.weather else {
            return BestEffort::Disabled;
        };

        let outcome = BestEffort::from_result(weather.current_weather(coordinates).await);
        if let BestEffort::Failed(reason) = &outcome {
            warn!(%reason, "Weather lookup failed, continuing without weather");
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use domain::Stop;

    use super::*;
    use crate::error::EnrichErrorKind;
    use crate::ports::{
        MockEventFinderPort, MockGeocodingPort, MockStopLocatorPort, MockWeatherPort,
    };

    fn wellesley() -> Coordinates {
        Coordinates::new("42.2965", "-71.2924").unwrap()
    }

    fn geocoder_ok() -> MockGeocodingPort {
        let mut geocoder = MockGeocodingPort::new();
        geocoder
            .expect_geocode()
            .times(1)
            .returning(|_| Ok(wellesley()));
        geocoder
    }

    fn stops_ok(accessible: bool) -> MockStopLocatorPort {
        let mut stops = MockStopLocatorPort::new();
        stops
            .expect_nearest_stop()
            .times(1)
            .returning(move |_| Ok(Stop::new("Wellesley Square", accessible)));
        stops
    }

    fn sample_events() -> Vec<Event> {
        vec![
            Event::from_parts(
                Some("Concert on the Green".to_string()),
                Some("2026-06-01".to_string()),
                Some("Wellesley College".to_string()),
                Some("https://example.com/e/1".to_string()),
            ),
            Event::from_parts(Some("Farmers Market".to_string()), None, None, None),
        ]
    }

    fn sample_weather() -> Weather {
        Weather {
            temperature: Some(58.3),
            feels_like: Some(56.1),
            description: "clear sky".to_string(),
        }
    }

    #[tokio::test]
    async fn empty_place_is_missing_input_without_calls() {
        let mut geocoder = MockGeocodingPort::new();
        geocoder.expect_geocode().times(0);
        let mut stops = MockStopLocatorPort::new();
        stops.expect_nearest_stop().times(0);

        let service = EnrichmentService::new(Arc::new(geocoder), Arc::new(stops));

        for input in ["", "   ", "\t\n"] {
            let err = service.enrich(input).await.unwrap_err();
            assert_eq!(err.kind, EnrichErrorKind::MissingInput);
            assert_eq!(err.message, "No place provided");
        }
    }

    #[tokio::test]
    async fn location_not_found_is_generic_failure() {
        let mut geocoder = MockGeocodingPort::new();
        geocoder
            .expect_geocode()
            .returning(|p| Err(ApplicationError::LocationNotFound(p.to_string())));
        let mut stops = MockStopLocatorPort::new();
        stops.expect_nearest_stop().times(0);

        let service = EnrichmentService::new(Arc::new(geocoder), Arc::new(stops));
        let err = service.enrich("Atlantis").await.unwrap_err();

        assert_eq!(err.kind, EnrichErrorKind::LookupFailed);
        assert_eq!(err.message, EnrichError::LOOKUP_FAILED_MESSAGE);
    }

    #[tokio::test]
    async fn no_stop_found_is_generic_failure() {
        let mut stops = MockStopLocatorPort::new();
        stops
            .expect_nearest_stop()
            .returning(|c| Err(ApplicationError::NoStopFound(c.to_string())));
        let mut events = MockEventFinderPort::new();
        events.expect_find_events().times(0);

        let service = EnrichmentService::new(Arc::new(geocoder_ok()), Arc::new(stops))
            .with_event_finder(Arc::new(events));
        let err = service.enrich("Middle of the Ocean").await.unwrap_err();

        assert_eq!(err.kind, EnrichErrorKind::LookupFailed);
    }

    #[tokio::test]
    async fn upstream_error_is_generic_failure() {
        let mut geocoder = MockGeocodingPort::new();
        geocoder
            .expect_geocode()
            .returning(|_| Err(ApplicationError::Upstream("HTTP 500".to_string())));

        let service = EnrichmentService::new(Arc::new(geocoder), Arc::new(stops_ok(true)));
        let err = service.enrich("Wellesley").await.unwrap_err();

        assert_eq!(err.kind, EnrichErrorKind::LookupFailed);
        assert!(!err.message.contains("500"));
    }

    #[tokio::test]
    async fn full_enrichment() {
        let mut events = MockEventFinderPort::new();
        events
            .expect_find_events()
            .withf(|coords, radius| coords.latitude() == "42.2965" && *radius == 5)
            .times(1)
            .returning(|_, _| Ok(sample_events()));
        let mut weather = MockWeatherPort::new();
        weather
            .expect_current_weather()
            .withf(|coords| coords.longitude() == "-71.2924")
            .times(1)
            .returning(|_| Ok(sample_weather()));

        let service = EnrichmentService::new(Arc::new(geocoder_ok()), Arc::new(stops_ok(true)))
            .with_event_finder(Arc::new(events))
            .with_weather(Arc::new(weather));

        let result = service.enrich("  Wellesley ").await.unwrap();

        assert_eq!(result.place, "Wellesley");
        assert_eq!(result.stop.name, "Wellesley Square");
        assert!(result.stop.wheelchair_accessible);
        assert_eq!(result.events, sample_events());
        assert_eq!(result.weather, sample_weather());
    }

    #[tokio::test]
    async fn event_failure_degrades_to_empty() {
        let mut events = MockEventFinderPort::new();
        events
            .expect_find_events()
            .returning(|_, _| Err(ApplicationError::Upstream("timeout".to_string())));
        let mut weather = MockWeatherPort::new();
        weather
            .expect_current_weather()
            .returning(|_| Ok(sample_weather()));

        let service = EnrichmentService::new(Arc::new(geocoder_ok()), Arc::new(stops_ok(false)))
            .with_event_finder(Arc::new(events))
            .with_weather(Arc::new(weather));

        let result = service.enrich("Wellesley").await.unwrap();

        assert!(result.events.is_empty());
        assert!(!result.stop.wheelchair_accessible);
        assert_eq!(result.weather, sample_weather());
    }

    #[tokio::test]
    async fn weather_failure_degrades_to_empty_record() {
        let mut events = MockEventFinderPort::new();
        events
            .expect_find_events()
            .returning(|_, _| Ok(sample_events()));
        let mut weather = MockWeatherPort::new();
        weather
            .expect_current_weather()
            .returning(|_| Err(ApplicationError::Upstream("malformed body".to_string())));

        let service = EnrichmentService::new(Arc::new(geocoder_ok()), Arc::new(stops_ok(true)))
            .with_event_finder(Arc::new(events))
            .with_weather(Arc::new(weather));

        let result = service.enrich("Wellesley").await.unwrap();

        assert_eq!(result.events.len(), 2);
        assert!(result.weather.is_empty());
    }

    #[tokio::test]
    async fn disabled_enrichment_yields_empty_values() {
        let service = EnrichmentService::new(Arc::new(geocoder_ok()), Arc::new(stops_ok(true)));

        let result = service.enrich("Wellesley").await.unwrap();

        assert_eq!(result.stop.name, "Wellesley Square");
        assert!(result.events.is_empty());
        assert!(result.weather.is_empty());
    }

    #[tokio::test]
    async fn custom_event_radius_is_passed_through() {
        let mut events = MockEventFinderPort::new();
        events
            .expect_find_events()
            .withf(|_, radius| *radius == 12)
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let service = EnrichmentService::new(Arc::new(geocoder_ok()), Arc::new(stops_ok(true)))
            .with_event_finder(Arc::new(events))
            .with_event_radius(12);

        let result = service.enrich("Wellesley").await.unwrap();
        assert!(result.events.is_empty());
    }

    #[test]
    fn debug_output() {
        let service = EnrichmentService::new(
            Arc::new(MockGeocodingPort::new()),
            Arc::new(MockStopLocatorPort::new()),
        );
        let debug = format!("{service:?}");
        assert!(debug.contains("EnrichmentService"));
        assert!(debug.contains("events_enabled: false"));
    }
}
