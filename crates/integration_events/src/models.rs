//! Ticketmaster Discovery response models
//!
//! Every level is optional; the conversion to domain events substitutes
//! placeholders for whatever is missing.

use domain::Event;
use serde::Deserialize;

/// Top-level `events.json` response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventsResponse {
    /// Absent when the search matched nothing
    #[serde(rename = "_embedded", default)]
    pub embedded: Option<EmbeddedEvents>,
}

/// `_embedded` block of the response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmbeddedEvents {
    /// Event records in upstream order
    #[serde(default)]
    pub events: Vec<RawEvent>,
}

/// One event record
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEvent {
    /// Event name
    #[serde(default)]
    pub name: Option<String>,
    /// Event page URL
    #[serde(default)]
    pub url: Option<String>,
    /// Date block
    #[serde(default)]
    pub dates: Option<RawDates>,
    /// Embedded venues
    #[serde(rename = "_embedded", default)]
    pub embedded: Option<EmbeddedVenues>,
}

/// `dates` block of an event
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDates {
    /// Start of the event
    #[serde(default)]
    pub start: Option<RawStart>,
}

/// `dates.start` block of an event
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStart {
    /// Local start date, `YYYY-MM-DD`
    #[serde(default)]
    pub local_date: Option<String>,
}

/// `_embedded` block of an event
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmbeddedVenues {
    /// Venues, first is the primary one
    #[serde(default)]
    pub venues: Vec<RawVenue>,
}

/// One venue record
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawVenue {
    /// Venue name
    #[serde(default)]
    pub name: Option<String>,
}

impl EventsResponse {
    /// Whether the response carried an `_embedded` block at all
    #[must_use]
    pub const fn has_embedded(&self) -> bool {
        self.embedded.is_some()
    }

    /// Convert to domain events, preserving upstream order
    #[must_use]
    pub fn into_events(self) -> Vec<Event> {
        self.embedded
            .map(|embedded| embedded.events.into_iter().map(RawEvent::into_event).collect())
            .unwrap_or_default()
    }
}

impl RawEvent {
    /// Convert to a domain event with placeholders for missing fields
    #[must_use]
    pub fn into_event(self) -> Event {
        let date = self
            .dates
            .and_then(|dates| dates.start)
            .and_then(|start| start.local_date);
        let venue = self
            .embedded
            .and_then(|embedded| embedded.venues.into_iter().next())
            .and_then(|venue| venue.name);

        Event::from_parts(self.name, date, venue, self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> EventsResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_full_event() {
        let response = parse(
            r#"{"_embedded": {"events": [{
                "name": "Boston Symphony Orchestra",
                "url": "https://www.ticketmaster.com/event/1",
                "dates": {"start": {"localDate": "2026-11-02", "localTime": "19:30:00"}},
                "_embedded": {"venues": [{"name": "Symphony Hall"}, {"name": "Other Hall"}]}
            }]}}"#,
        );
        let events = response.into_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "Boston Symphony Orchestra");
        assert_eq!(events[0].date, "2026-11-02");
        assert_eq!(events[0].venue, "Symphony Hall");
        assert_eq!(events[0].url, "https://www.ticketmaster.com/event/1");
    }

    #[test]
    fn test_missing_fields_use_placeholders() {
        let response = parse(r#"{"_embedded": {"events": [{}]}}"#);
        let events = response.into_events();
        assert_eq!(events[0].name, Event::UNKNOWN_NAME);
        assert_eq!(events[0].date, Event::UNKNOWN_DATE);
        assert_eq!(events[0].venue, Event::UNKNOWN_VENUE);
        assert_eq!(events[0].url, "");
    }

    #[test]
    fn test_partial_nesting() {
        let response = parse(
            r#"{"_embedded": {"events": [
                {"name": "A", "dates": {}},
                {"name": "B", "dates": {"start": {}}, "_embedded": {"venues": []}},
                {"name": "C", "_embedded": {"venues": [{}]}}
            ]}}"#,
        );
        let events = response.into_events();
        assert_eq!(events.len(), 3);
        assert!(events.iter().all(|e| e.date == Event::UNKNOWN_DATE));
        assert!(events.iter().all(|e| e.venue == Event::UNKNOWN_VENUE));
        assert_eq!(
            events.iter().map(|e| e.name.as_str()).collect::<Vec<_>>(),
            ["A", "B", "C"]
        );
    }

    #[test]
    fn test_missing_embedded_is_empty() {
        let response = parse(r#"{"page": {"size": 5, "totalElements": 0}}"#);
        assert!(!response.has_embedded());
        assert!(response.into_events().is_empty());
    }
}
