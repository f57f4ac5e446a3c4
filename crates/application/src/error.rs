//! Application-level errors

use domain::DomainError;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Caller supplied no place name
    #[error("No place provided")]
    MissingInput,

    /// Geocoding provider found no match
    #[error("Location not found: {0}")]
    LocationNotFound(String),

    /// No transit stop near the resolved coordinates
    #[error("No stop found near {0}")]
    NoStopFound(String),

    /// Network or parse failure talking to an external provider
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Whether this error means the place could not be resolved to a stop
    #[must_use]
    pub const fn is_lookup_failure(&self) -> bool {
        matches!(
            self,
            Self::LocationNotFound(_) | Self::NoStopFound(_) | Self::Upstream(_) | Self::Domain(_)
        )
    }
}

/// Kind of user-facing enrichment failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrichErrorKind {
    /// No place name was given
    MissingInput,
    /// Geocoding or the stop lookup failed
    LookupFailed,
}

impl EnrichErrorKind {
    /// Stable machine-readable code
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingInput => "missing_input",
            Self::LookupFailed => "lookup_failed",
        }
    }
}

impl fmt::Display for EnrichErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// User-facing enrichment error
///
/// Geocoding, stop and network failures all collapse into one generic
/// `LookupFailed` message; the specific cause is only logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct EnrichError {
    /// Failure kind
    pub kind: EnrichErrorKind,
    /// Human-readable message
    pub message: String,
}

impl EnrichError {
    /// Message shown when no place was given
    pub const MISSING_INPUT_MESSAGE: &'static str = "No place provided";
    /// Message shown for every geocode or stop failure
    pub const LOOKUP_FAILED_MESSAGE: &'static str =
        "Unable to find a transit stop near that location";

    /// No place was given
    #[must_use]
    pub fn missing_input() -> Self {
        Self {
            kind: EnrichErrorKind::MissingInput,
            message: Self::MISSING_INPUT_MESSAGE.to_string(),
        }
    }

    /// Geocoding or stop lookup failed
    #[must_use]
    pub fn lookup_failed() -> Self {
        Self {
            kind: EnrichErrorKind::LookupFailed,
            message: Self::LOOKUP_FAILED_MESSAGE.to_string(),
        }
    }
}

impl From<&ApplicationError> for EnrichError {
    fn from(err: &ApplicationError) -> Self {
        match err {
            ApplicationError::MissingInput => Self::missing_input(),
            _ => Self::lookup_failed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_failures() {
        assert!(ApplicationError::LocationNotFound("x".to_string()).is_lookup_failure());
        assert!(ApplicationError::NoStopFound("x".to_string()).is_lookup_failure());
        assert!(ApplicationError::Upstream("x".to_string()).is_lookup_failure());
        assert!(!ApplicationError::MissingInput.is_lookup_failure());
        assert!(!ApplicationError::Configuration("x".to_string()).is_lookup_failure());
    }

    #[test]
    fn upstream_errors_collapse_to_generic_message() {
        let errors = [
            ApplicationError::LocationNotFound("Atlantis".to_string()),
            ApplicationError::NoStopFound("0, 0".to_string()),
            ApplicationError::Upstream("HTTP 500".to_string()),
        ];
        for err in &errors {
            let user = EnrichError::from(err);
            assert_eq!(user.kind, EnrichErrorKind::LookupFailed);
            assert_eq!(user.message, EnrichError::LOOKUP_FAILED_MESSAGE);
        }
    }

    #[test]
    fn missing_input_is_distinct() {
        let user = EnrichError::from(&ApplicationError::MissingInput);
        assert_eq!(user.kind, EnrichErrorKind::MissingInput);
        assert_eq!(user.to_string(), "No place provided");
    }

    #[test]
    fn kind_codes() {
        assert_eq!(EnrichErrorKind::MissingInput.code(), "missing_input");
        assert_eq!(EnrichErrorKind::LookupFailed.to_string(), "lookup_failed");
    }
}
