//! Gateway error types with HTTP status code mapping.
//!
//! [`PollError`] is the central error type for the gateway. Each variant
//! maps to a specific HTTP status code and structured JSON error
//! response. No variant is fatal: every failure is local to a single
//! operation and leaves the store in its prior state.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::OptionId;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 1001,
///     "message": "poll title must not be empty",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code.
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category   | HTTP Status               |
/// |-----------|------------|---------------------------|
/// | 1000–1999 | Validation | 400 Bad Request           |
/// | 2000–2999 | Not Found  | 404 Not Found             |
/// | 3000–3999 | Server     | 500 Internal Server Error |
#[derive(Debug, thiserror::Error)]
pub enum PollError {
    /// Create-time constraint violated (empty title, too few options).
    #[error("invalid poll: {0}")]
    Validation(String),

    /// Reaction emoji is not in the configured allow-list.
    #[error("reaction not allowed: {0}")]
    DisallowedReaction(String),

    /// Poll with the given ID was not found.
    #[error("poll not found: {0}")]
    PollNotFound(uuid::Uuid),

    /// Option does not exist within the referenced poll.
    #[error("option {option} not found in poll {poll}")]
    OptionNotFound {
        /// Poll the stale option reference pointed into.
        poll: uuid::Uuid,
        /// The unknown option ID.
        option: OptionId,
    },

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl PollError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::Validation(_) => 1001,
            Self::DisallowedReaction(_) => 1002,
            Self::PollNotFound(_) => 2001,
            Self::OptionNotFound { .. } => 2002,
            Self::Internal(_) => 3000,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::DisallowedReaction(_) => StatusCode::BAD_REQUEST,
            Self::PollNotFound(_) | Self::OptionNotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PollError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
