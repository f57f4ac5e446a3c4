//! API error handling
//!
//! Errors carry only the user-facing message; upstream details are logged by
//! the application layer and never reach the response body.

use application::{EnrichError, EnrichErrorKind};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use infrastructure::TemplateError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// No place was supplied (400)
    #[error("Missing input: {0}")]
    MissingInput(String),

    /// The place could not be resolved to a stop (404)
    #[error("Lookup failed: {0}")]
    LookupFailed(String),

    /// Rendering or another server-side failure (500)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
}

impl ApiError {
    /// HTTP status for this error
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MissingInput(_) => StatusCode::BAD_REQUEST,
            Self::LookupFailed(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable code
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingInput(_) => EnrichErrorKind::MissingInput.code(),
            Self::LookupFailed(_) => EnrichErrorKind::LookupFailed.code(),
            Self::Internal(_) => "internal_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code().to_string();
        let error = match self {
            Self::MissingInput(msg) | Self::LookupFailed(msg) => msg,
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                "An internal error occurred".to_string()
            },
        };

        (status, Json(ErrorResponse { error, code })).into_response()
    }
}

impl From<EnrichError> for ApiError {
    fn from(err: EnrichError) -> Self {
        match err.kind {
            EnrichErrorKind::MissingInput => Self::MissingInput(err.message),
            EnrichErrorKind::LookupFailed => Self::LookupFailed(err.message),
        }
    }
}

impl From<TemplateError> for ApiError {
    fn from(err: TemplateError) -> Self {
        Self::Internal(err.to_string())
    }
}
