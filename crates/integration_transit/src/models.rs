//! MBTA stop response models
//!
//! JSON:API shaped payload of `GET /stops`. Only the fields the lookup
//! reads are modelled; everything else is ignored.

use domain::Stop;
use serde::Deserialize;

/// Top-level `GET /stops` response
#[derive(Debug, Clone, Deserialize)]
pub struct StopsResponse {
    /// Stop records, nearest first when sorted by distance
    #[serde(default)]
    pub data: Option<Vec<StopResource>>,
}

/// One stop record
#[derive(Debug, Clone, Deserialize)]
pub struct StopResource {
    /// MBTA stop id
    #[serde(default)]
    pub id: Option<String>,
    /// Stop attributes
    pub attributes: StopAttributes,
}

/// Attributes of a stop record
#[derive(Debug, Clone, Deserialize)]
pub struct StopAttributes {
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Boarding accessibility code; kept raw so non-integer values map to
    /// "not accessible" instead of failing the parse
    #[serde(default)]
    pub wheelchair_boarding: Option<serde_json::Value>,
}

impl StopAttributes {
    /// Boarding code when it is an integer
    #[must_use]
    pub fn boarding_code(&self) -> Option<i64> {
        self.wheelchair_boarding
            .as_ref()
            .and_then(serde_json::Value::as_i64)
    }
}

impl StopsResponse {
    /// Nearest stop record, if any
    #[must_use]
    pub fn nearest(&self) -> Option<&StopResource> {
        self.data.as_ref().and_then(|data| data.first())
    }
}

impl StopResource {
    /// Convert to the domain stop, `None` when the record has no name
    #[must_use]
    pub fn to_stop(&self) -> Option<Stop> {
        let name = self.attributes.name.as_deref()?;
        Some(Stop::from_boarding_code(
            name,
            self.attributes.boarding_code(),
        ))
    }
}
