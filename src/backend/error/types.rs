/**
 * Backend Error Types
 *
 * This module defines the errors returned by HTTP handlers. Every variant
 * maps to exactly one status code and carries the human-readable message
 * sent to the client.
 *
 * # Error Categories
 *
 * - `BadRequest` - malformed or missing input (400)
 * - `Unauthorized` - bad credentials, missing/invalid/expired token,
 *   unknown token subject (401)
 * - `NotFound` - no route for the request (404)
 * - `Internal` - anything unanticipated (500); the detail is logged and
 *   never sent to the client
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::sessions::TokenError;

/// Message sent to clients for every internal error
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use mock_auth::backend::error::BackendError;
///
/// let err = BackendError::bad_request("username and password are required");
/// assert_eq!(err.status_code().as_u16(), 400);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Malformed or missing request input
    #[error("Bad request: {message}")]
    BadRequest {
        /// Human-readable error message
        message: String,
    },

    /// Authentication failed
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Human-readable error message
        message: String,
    },

    /// No such route
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Unexpected server-side failure
    ///
    /// `detail` is for the server log only.
    #[error("Internal error: {detail}")]
    Internal {
        /// Server-side description of what went wrong
        detail: String,
    },
}

impl BackendError {
    /// Create a new bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Create a new unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a new not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new internal error
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message that is safe to send to the client
    pub fn message(&self) -> String {
        match self {
            Self::BadRequest { message }
            | Self::Unauthorized { message }
            | Self::NotFound { message } => message.clone(),
            Self::Internal { .. } => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Token failures that reach a handler unhandled are server faults
impl From<TokenError> for BackendError {
    fn from(err: TokenError) -> Self {
        Self::internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            BackendError::bad_request("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            BackendError::unauthorized("x").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(BackendError::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            BackendError::internal("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_client_message() {
        let error = BackendError::unauthorized("Invalid token");
        assert_eq!(error.message(), "Invalid token");
    }

    #[test]
    fn test_internal_detail_hidden() {
        let error = BackendError::internal("signing key exploded");
        assert_eq!(error.message(), INTERNAL_ERROR_MESSAGE);
        assert!(error.to_string().contains("signing key exploded"));
    }

    #[test]
    fn test_from_token_error() {
        let error: BackendError = TokenError::Expired.into();
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
