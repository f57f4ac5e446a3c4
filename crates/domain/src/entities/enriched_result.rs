//! Enriched place lookup result

use serde::{Deserialize, Serialize};

use super::{Event, Stop, Weather};

/// Everything known about a place after one lookup
///
/// Only built once geocoding and the stop lookup have succeeded; events and
/// weather may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedResult {
    /// The place as entered by the user (trimmed)
    pub place: String,
    /// Nearest transit stop
    pub stop: Stop,
    /// Nearby events, in provider order
    pub events: Vec<Event>,
    /// Current weather, possibly empty
    pub weather: Weather,
}

impl EnrichedResult {
    /// Create a new result
    #[must_use]
    pub fn new(place: impl Into<String>, stop: Stop, events: Vec<Event>, weather: Weather) -> Self {
        Self {
            place: place.into(),
            stop,
            events,
            weather,
        }
    }

    /// Whether any events were found
    #[must_use]
    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }

    /// Whether weather data is available
    #[must_use]
    pub fn has_weather(&self) -> bool {
        !self.weather.is_empty()
    }
}
