//! Middleware Module
//!
//! Request processing that runs before handlers.
//!
//! - **`auth`** - bearer token extraction and verification
//!
//! # Example
//!
//! ```rust,no_run
//! use mock_auth::backend::middleware::BearerClaims;
//!
//! async fn protected(BearerClaims(claims): BearerClaims) -> String {
//!     claims.username
//! }
//! ```

pub mod auth;

pub use auth::{extract_bearer_token, BearerClaims};
