//! Current weather entity

use serde::{Deserialize, Serialize};

/// Current weather conditions at a location
///
/// The default value is the empty record used when weather is unavailable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    /// Temperature in the requested unit system
    pub temperature: Option<f64>,
    /// Feels-like temperature in the requested unit system
    pub feels_like: Option<f64>,
    /// Condition description (e.g. "light rain"), possibly empty
    pub description: String,
}

impl Weather {
    /// The empty record
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether no weather data is present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.temperature.is_none() && self.feels_like.is_none() && self.description.is_empty()
    }

    /// Format a one-line summary, or `None` for the empty record
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }

        let mut parts = Vec::new();
        if let Some(temp) = self.temperature {
            parts.push(format!("{temp:.1}°"));
        }
        if let Some(feels) = self.feels_like {
            parts.push(format!("feels like {feels:.1}°"));
        }
        if !self.description.is_empty() {
            parts.push(self.description.clone());
        }
        Some(parts.join(", "))
    }
}
