/**
 * Session Tokens
 *
 * This module signs token claims into compact JWTs and verifies them again.
 * The secret and lifetime come from `AppConfig` and are fixed for the life
 * of the process.
 *
 * # Verification
 *
 * Tokens are HS256 only, `exp` is required and there is no clock leeway: a
 * token is rejected from the second its expiry passes.
 */

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::backend::auth::users::UserRecord;
use crate::shared::config::AppConfig;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// User ID
    pub sub: String,
    /// Username
    pub username: String,
    /// Role names copied from the user record
    pub roles: Vec<String>,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

impl TokenClaims {
    /// Build claims for a user, issued at `issued_at` and valid for `ttl`
    pub fn for_user(user: &UserRecord, issued_at: u64, ttl: Duration) -> Self {
        Self {
            sub: user.id.clone(),
            username: user.username.clone(),
            roles: user.roles.clone(),
            iat: issued_at,
            exp: issued_at.saturating_add(ttl.as_secs()),
        }
    }
}

/// Token signing and verification failures
#[derive(Debug, Error)]
pub enum TokenError {
    /// The signature does not match (tampered token or different secret)
    #[error("invalid token signature")]
    InvalidSignature,

    /// The token was valid but its expiry has passed
    #[error("token expired")]
    Expired,

    /// Not a well-formed token for this codec
    #[error("malformed token: {0}")]
    Malformed(#[source] jsonwebtoken::errors::Error),

    /// Encoding the claims failed
    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::InvalidSignature => return Self::InvalidSignature,
            ErrorKind::ExpiredSignature => return Self::Expired,
            _ => {}
        }
        Self::Malformed(err)
    }
}

/// Current Unix time in whole seconds
pub fn now_timestamp() -> u64 {
    Utc::now().timestamp().max(0) as u64
}

/// Signs and verifies tokens with a fixed secret and lifetime
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenCodec {
    /// Create a codec from a shared secret and token lifetime
    pub fn new(secret: &str, ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    /// Create a codec from the application configuration
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.jwt_secret, config.token_ttl)
    }

    /// Lifetime given to newly signed tokens
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Sign a token for a user, issued now
    pub fn sign(&self, user: &UserRecord) -> Result<String, TokenError> {
        let claims = TokenClaims::for_user(user, now_timestamp(), self.ttl);
        self.sign_claims(&claims)
    }

    /// Sign the given claims as-is
    pub fn sign_claims(&self, claims: &TokenClaims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(TokenError::Signing)
    }

    /// Verify a token and return its claims
    pub fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let token_data = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)?;
        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
