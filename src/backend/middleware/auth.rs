/**
 * Bearer Token Extraction
 *
 * This module provides the extractor for routes that require a token. It
 * reads the `Authorization: Bearer <token>` header, verifies the token with
 * the application's `TokenCodec` and hands the claims to the handler.
 *
 * Every failure is a 401. A missing token and a token that fails
 * verification get different messages; the kind of verification failure
 * (bad signature, expired, malformed) is only logged.
 */

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use std::sync::Arc;

use crate::backend::auth::sessions::{TokenClaims, TokenCodec};
use crate::backend::error::BackendError;

/// Message for requests without a usable bearer token
pub const MISSING_TOKEN_MESSAGE: &str =
    "Authentication token required. Authorization: Bearer <token>";

/// Message for tokens that fail signature or expiry checks
pub const TOKEN_VERIFICATION_FAILED_MESSAGE: &str =
    "Token verification failed or token has expired";

/// Extract the token from an `Authorization: Bearer <token>` header
///
/// The scheme is matched case-insensitively. Returns `None` when the header
/// is absent, not valid UTF-8, uses another scheme or has no token segment.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let mut parts = value.split_whitespace();
    let scheme = parts.next()?;
    let token = parts.next()?;

    if scheme.eq_ignore_ascii_case("Bearer") {
        Some(token)
    } else {
        None
    }
}

/// Claims of a verified bearer token
///
/// Use as a handler parameter to require authentication.
#[derive(Debug, Clone)]
pub struct BearerClaims(pub TokenClaims);

impl<S> FromRequestParts<S> for BearerClaims
where
    S: Send + Sync,
    Arc<TokenCodec>: FromRef<S>,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = extract_bearer_token(&parts.headers).ok_or_else(|| {
            tracing::warn!("Missing or malformed Authorization header");
            BackendError::unauthorized(MISSING_TOKEN_MESSAGE)
        })?;

        let codec = Arc::<TokenCodec>::from_ref(state);
        let claims = codec.verify(token).map_err(|e| {
            tracing::warn!("Token rejected: {}", e);
            BackendError::unauthorized(TOKEN_VERIFICATION_FAILED_MESSAGE)
        })?;

        Ok(BearerClaims(claims))
    }
}
