//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Coordinate text could not be parsed or is out of range
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Create an invalid coordinates error
    pub fn invalid_coordinates(detail: impl Into<String>) -> Self {
        Self::InvalidCoordinates(detail.into())
    }
}
