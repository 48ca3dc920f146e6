//! Authentication Module
//!
//! This module handles credential checks, token issuance and token-based
//! profile lookups.
//!
//! # Architecture
//!
//! - **`users`** - User record and the read-only user directory
//! - **`sessions`** - JWT signing and verification
//! - **`handlers`** - HTTP handlers for the authentication endpoints
//!
//! # Authentication Flow
//!
//! 1. **Login**: username and password → directory lookup → JWT returned
//! 2. **Profile**: JWT → verified → subject looked up → profile returned
//!
//! # Security
//!
//! - Tokens are HS256 JWTs with a configurable lifetime (default one hour)
//! - Invalid credentials return 401 without saying which field was wrong
//! - Passwords are stored in clear text; this is a mock and must not be
//!   used as a real identity provider

/// User record and directory
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{AuthResponse, LoginRequest, ProfileResponse};
pub use handlers::{get_profile, login};
pub use sessions::{TokenClaims, TokenCodec, TokenError};
pub use users::{InMemoryUserDirectory, SharedUserDirectory, UserDirectory, UserRecord};
