/**
 * Login Handler
 *
 * This module implements the handler for POST /auth/login.
 *
 * # Authentication Process
 *
 * 1. Require a JSON body with non-empty username and password
 * 2. Look the pair up in the user directory
 * 3. Sign a token carrying the user's id, username and roles
 * 4. Return the token
 *
 * # Security
 *
 * - Unknown username and wrong password return the same 401
 * - The password is never logged or returned
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use std::sync::Arc;

use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::backend::auth::sessions::TokenCodec;
use crate::backend::auth::users::SharedUserDirectory;
use crate::backend::error::BackendError;

/// Message for requests missing a username or password
pub const MISSING_CREDENTIALS_MESSAGE: &str = "username and password are required";

/// Message for credentials that match no user
pub const INVALID_CREDENTIALS_MESSAGE: &str =
    "Authentication failed: invalid username or password";

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - body is not valid JSON, or username/password is
///   missing or empty
/// * `401 Unauthorized` - no user matches the credentials
/// * `500 Internal Server Error` - token signing failed
///
/// # Example Request
///
/// ```http
/// POST /auth/login HTTP/1.1
/// Content-Type: application/json
///
/// { "username": "alice", "password": "password123" }
/// ```
///
/// # Example Response
///
/// ```json
/// { "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..." }
/// ```
pub async fn login(
    State(users): State<SharedUserDirectory>,
    State(tokens): State<Arc<TokenCodec>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, BackendError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!("Rejected login body: {}", rejection.body_text());
        BackendError::bad_request(MISSING_CREDENTIALS_MESSAGE)
    })?;

    tracing::info!(
        "/auth/login invoked, username = {}",
        request.username.as_deref().unwrap_or("<missing>")
    );

    let (username, password) = request.credentials().ok_or_else(|| {
        tracing::warn!("Login request without username or password");
        BackendError::bad_request(MISSING_CREDENTIALS_MESSAGE)
    })?;

    let user = users.find(username, password).await.ok_or_else(|| {
        tracing::warn!("Invalid credentials for: {}", username);
        BackendError::unauthorized(INVALID_CREDENTIALS_MESSAGE)
    })?;

    let token = tokens.sign(&user)?;

    tracing::info!("User logged in successfully: {} ({})", user.username, user.id);
    tracing::debug!("/auth/login responded, token = {}", token);

    Ok(Json(AuthResponse { token }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::users::InMemoryUserDirectory;
    use axum::http::StatusCode;
    use std::time::Duration;

    fn state() -> (State<SharedUserDirectory>, State<Arc<TokenCodec>>, Arc<TokenCodec>) {
        let users: SharedUserDirectory = Arc::new(InMemoryUserDirectory::seeded());
        let codec = Arc::new(TokenCodec::new("test-secret", Duration::from_secs(3600)));
        (State(users), State(codec.clone()), codec)
    }

    #[tokio::test]
    async fn test_login_success() {
        let (users, tokens, codec) = state();
        let request = LoginRequest::new("alice", "password123");

        let response = login(users, tokens, Ok(Json(request))).await.unwrap();
        assert!(!response.token.is_empty());

        let claims = codec.verify(&response.token).unwrap();
        assert_eq!(claims.sub, "u-1001");
        assert_eq!(claims.username, "alice");
    }

    #[tokio::test]
    async fn test_login_second_user() {
        let (users, tokens, codec) = state();
        let request = LoginRequest::new("admin", "admin123");

        let response = login(users, tokens, Ok(Json(request))).await.unwrap();
        assert_eq!(codec.verify(&response.token).unwrap().sub, "u-1002");
    }

    #[tokio::test]
    async fn test_login_invalid_password() {
        let (users, tokens, _) = state();
        let request = LoginRequest::new("alice", "wrong");

        let err = login(users, tokens, Ok(Json(request))).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.message(), INVALID_CREDENTIALS_MESSAGE);
    }

    #[tokio::test]
    async fn test_login_user_not_found() {
        let (users, tokens, _) = state();
        let request = LoginRequest::new("nobody", "password123");

        let err = login(users, tokens, Ok(Json(request))).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.message(), INVALID_CREDENTIALS_MESSAGE);
    }

    #[tokio::test]
    async fn test_login_missing_fields() {
        let cases = [
            LoginRequest { username: None, password: Some("password123".into()) },
            LoginRequest { username: Some("alice".into()), password: None },
            LoginRequest { username: Some("".into()), password: Some("password123".into()) },
            LoginRequest { username: Some("alice".into()), password: Some("".into()) },
            LoginRequest::default(),
        ];

        for request in cases {
            let (users, tokens, _) = state();
            let err = login(users, tokens, Ok(Json(request))).await.unwrap_err();
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
            assert_eq!(err.message(), MISSING_CREDENTIALS_MESSAGE);
        }
    }
}
