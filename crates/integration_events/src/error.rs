//! Events error types

use thiserror::Error;

/// Errors that can occur while looking up events
#[derive(Debug, Error)]
pub enum EventsError {
    /// Connection to the events service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to events service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from events service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// API key is missing or invalid
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimitExceeded {
        /// Seconds to wait before retrying (if provided by API)
        retry_after_secs: Option<u64>,
    },

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}
