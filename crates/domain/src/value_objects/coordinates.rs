//! Geographic coordinates value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A latitude/longitude pair as produced by a geocoder
///
/// The decimal text is kept exactly as received so that downstream lookups
/// send the same digits back out. Numeric accessors parse on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinates")]
pub struct Coordinates {
    /// Latitude in decimal degrees (-90 to 90)
    latitude: String,
    /// Longitude in decimal degrees (-180 to 180)
    longitude: String,
}

#[derive(Deserialize)]
struct RawCoordinates {
    latitude: String,
    longitude: String,
}

impl TryFrom<RawCoordinates> for Coordinates {
    type Error = DomainError;

    fn try_from(raw: RawCoordinates) -> Result<Self, Self::Error> {
        Self::new(raw.latitude, raw.longitude)
    }
}

impl Coordinates {
    /// Create coordinates from decimal text with validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if either value is not a
    /// finite number or lies outside its valid range.
    pub fn new(
        latitude: impl Into<String>,
        longitude: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let latitude = latitude.into();
        let longitude = longitude.into();

        let lat = parse_degrees("latitude", &latitude)?;
        let lon = parse_degrees("longitude", &longitude)?;

        if !(-90.0..=90.0).contains(&lat) {
            return Err(DomainError::invalid_coordinates(format!(
                "latitude {latitude} must be -90 to 90"
            )));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(DomainError::invalid_coordinates(format!(
                "longitude {longitude} must be -180 to 180"
            )));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Create coordinates from numeric degrees
    ///
    /// Uses the shortest decimal text that parses back to the same value.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` for out-of-range or
    /// non-finite values.
    pub fn from_degrees(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        Self::new(latitude.to_string(), longitude.to_string())
    }

    /// Latitude text as received
    #[must_use]
    pub fn latitude(&self) -> &str {
        &self.latitude
    }

    /// Longitude text as received
    #[must_use]
    pub fn longitude(&self) -> &str {
        &self.longitude
    }

    /// Latitude in degrees
    #[must_use]
    pub fn latitude_degrees(&self) -> f64 {
        // validated in `new`
        self.latitude.parse().unwrap_or_default()
    }

    /// Longitude in degrees
    #[must_use]
    pub fn longitude_degrees(&self) -> f64 {
        self.longitude.parse().unwrap_or_default()
    }

    /// `lat,lon` pair as used by providers that take a single parameter
    #[must_use]
    pub fn lat_long_pair(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

fn parse_degrees(axis: &str, text: &str) -> Result<f64, DomainError> {
    let value: f64 = text
        .parse()
        .map_err(|_| DomainError::invalid_coordinates(format!("{axis} '{text}' is not a number")))?;
    if !value.is_finite() {
        return Err(DomainError::invalid_coordinates(format!(
            "{axis} '{text}' is not finite"
        )));
    }
    Ok(value)
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}
