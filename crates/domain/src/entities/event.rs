//! Nearby event entity

use serde::{Deserialize, Serialize};

/// A nearby event, normalized from a provider record
///
/// Missing provider fields are replaced by fixed placeholder text so that
/// every field is always displayable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Event name
    pub name: String,
    /// Local start date as reported by the provider
    pub date: String,
    /// Name of the (first) venue
    pub venue: String,
    /// Link to the event page, empty when unknown
    pub url: String,
}

impl Event {
    /// Placeholder for a missing event name
    pub const UNKNOWN_NAME: &'static str = "Unknown event";
    /// Placeholder for a missing date
    pub const UNKNOWN_DATE: &'static str = "Unknown date";
    /// Placeholder for a missing venue
    pub const UNKNOWN_VENUE: &'static str = "Unknown venue";

    /// Build an event from optional parts, applying the defaults
    #[must_use]
    pub fn from_parts(
        name: Option<String>,
        date: Option<String>,
        venue: Option<String>,
        url: Option<String>,
    ) -> Self {
        Self {
            name: name.unwrap_or_else(|| Self::UNKNOWN_NAME.to_string()),
            date: date.unwrap_or_else(|| Self::UNKNOWN_DATE.to_string()),
            venue: venue.unwrap_or_else(|| Self::UNKNOWN_VENUE.to_string()),
            url: url.unwrap_or_default(),
        }
    }

    /// Whether the event has a link
    #[must_use]
    pub fn has_url(&self) -> bool {
        !self.url.is_empty()
    }

    /// Format as "name on date at venue"
    #[must_use]
    pub fn format_line(&self) -> String {
        format!("{} on {} at {}", self.name, self.date, self.venue)
    }
}
