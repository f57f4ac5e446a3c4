//! Place name value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A free-text place description, trimmed and guaranteed non-empty
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceName(String);

impl PlaceName {
    /// Parse a place name from user input
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` if the input is empty or
    /// whitespace only.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DomainError::ValidationError(
                "place name must not be empty".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the place name as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for PlaceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_whitespace() {
        let place = PlaceName::parse("  Wellesley  ").unwrap();
        assert_eq!(place.as_str(), "Wellesley");
    }

    #[test]
    fn parse_rejects_empty() {
        assert!(PlaceName::parse("").is_err());
    }

    #[test]
    fn parse_rejects_whitespace_only() {
        assert!(PlaceName::parse(" \t\n ").is_err());
    }

    #[test]
    fn keeps_inner_punctuation() {
        let place = PlaceName::parse("Boston Common, Boston, MA").unwrap();
        assert_eq!(place.to_string(), "Boston Common, Boston, MA");
    }
}
