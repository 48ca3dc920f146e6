//! Mock Auth - Main Library
//!
//! A minimal authentication mock built on Axum. It accepts username and
//! password credentials for a fixed set of users, issues a signed,
//! time-limited JWT, and returns a profile to whoever presents that token.
//!
//! There is no persistent storage, no password hashing and no refresh or
//! revocation. Use it to stand in for an identity provider in local
//! development and tests only.
//!
//! # Module Structure
//!
//! - **`shared`** - Types that do not depend on the server stack
//!   - Application configuration (`AppConfig`) and its builder
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server, routes and layers
//!   - User directory and JWT codec
//!   - Login and profile handlers
//!
//! # Endpoints
//!
//! | Method/Path | Request | Success |
//! |---|---|---|
//! | `POST /auth/login` | `{ "username", "password" }` | `{ "token" }` |
//! | `GET /auth/profile` | `Authorization: Bearer <token>` | profile JSON |
//!
//! Errors are `{ "message": ... }` with status 400, 401, 404 or 500.
//!
//! # Configuration
//!
//! Read once at startup from the environment (a `.env` file is honoured):
//!
//! - `PORT` - listening port, default `3000`
//! - `JWT_SECRET` - signing secret, default is an insecure placeholder
//! - `JWT_EXPIRES_IN` - token lifetime such as `1h` or `30m`, default `1h`
//!
//! # Usage
//!
//! ```rust,no_run
//! use mock_auth::backend::server::{config::load_config, create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config()?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, create_app(config)).await?;
//! # Ok(())
//! # }
//! ```

/// Shared types and configuration
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
