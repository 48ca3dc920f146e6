/**
 * Error Conversion
 *
 * This module turns backend errors (and panics caught by the router) into
 * HTTP responses.
 *
 * # Response Format
 *
 * Every error response is JSON with a single field:
 * ```json
 * { "message": "Error message" }
 * ```
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use std::any::Any;

use crate::backend::error::types::{BackendError, INTERNAL_ERROR_MESSAGE};

/// JSON body of every error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error message
    pub message: String,
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            Self::Internal { detail } => tracing::error!("Internal error: {}", detail),
            _ => tracing::debug!("Request failed with {}: {}", status, self.message()),
        }

        (status, Json(ErrorBody { message: self.message() })).into_response()
    }
}

/// Build the response for a panic raised while handling a request
///
/// Used with `tower_http::catch_panic::CatchPanicLayer`. The panic payload
/// is logged and never sent to the client.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    tracing::error!("Handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            message: INTERNAL_ERROR_MESSAGE.to_string(),
        }),
    )
        .into_response()
}
