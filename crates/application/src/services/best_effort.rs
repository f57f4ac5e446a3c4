//! Outcome of a lookup whose failure must not abort the pipeline

use std::fmt;

use crate::error::ApplicationError;

/// Result of a best-effort enrichment lookup
///
/// Keeps "nothing there" apart from "lookup failed" even though callers
/// usually collapse both into the default value.
#[derive(Debug, Clone, PartialEq)]
pub enum BestEffort<T> {
    /// The lookup returned data
    Found(T),
    /// The lookup succeeded but there was nothing to report
    Empty,
    /// The lookup was skipped because no provider is configured
    Disabled,
    /// The lookup failed; carries the reason for logging
    Failed(String),
}

impl<T: Default + PartialEq> BestEffort<T> {
    /// Classify a port result
    pub fn from_result(result: Result<T, ApplicationError>) -> Self {
        match result {
            Ok(value) if value == T::default() => Self::Empty,
            Ok(value) => Self::Found(value),
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

impl<T: Default> BestEffort<T> {
    /// Collapse to the value, using the default for every non-found outcome
    pub fn into_value(self) -> T {
        match self {
            Self::Found(value) => value,
            Self::Empty | Self::Disabled | Self::Failed(_) => T::default(),
        }
    }
}

impl<T> BestEffort<T> {
    /// Whether the lookup failed
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Short label for logging
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Found(_) => "found",
            Self::Empty => "empty",
            Self::Disabled => "disabled",
            Self::Failed(_) => "failed",
        }
    }
}

impl<T> fmt::Display for BestEffort<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failed(reason) => write!(f, "failed: {reason}"),
            other => write!(f, "{}", other.label()),
        }
    }
}
