//! Transit stop entity

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wheelchair-boarding code that marks a stop as accessible
pub const ACCESSIBLE_BOARDING_CODE: i64 = 1;

/// The transit stop nearest to a looked-up place
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stop {
    /// Human-readable stop name
    pub name: String,
    /// Whether the stop supports wheelchair boarding
    pub wheelchair_accessible: bool,
}

impl Stop {
    /// Create a new stop
    #[must_use]
    pub fn new(name: impl Into<String>, wheelchair_accessible: bool) -> Self {
        Self {
            name: name.into(),
            wheelchair_accessible,
        }
    }

    /// Create a stop from a provider's wheelchair-boarding code
    ///
    /// Only the accessible sentinel counts; unknown, absent and
    /// inaccessible codes all map to `false`.
    #[must_use]
    pub fn from_boarding_code(name: impl Into<String>, code: Option<i64>) -> Self {
        Self::new(name, code == Some(ACCESSIBLE_BOARDING_CODE))
    }

    /// Short label for the accessibility flag
    #[must_use]
    pub const fn accessibility_label(&self) -> &'static str {
        if self.wheelchair_accessible {
            "Wheelchair accessible"
        } else {
            "Not wheelchair accessible"
        }
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.accessibility_label())
    }
}
