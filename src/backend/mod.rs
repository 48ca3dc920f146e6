//! Backend Module
//!
//! This module contains all server-side code: an Axum HTTP server that
//! issues signed tokens for a fixed set of mock users and serves their
//! profiles back to token holders.
//!
//! This module is only compiled when the `ssr` feature is enabled (it is on
//! by default).
//!
//! # Architecture
//!
//! - **`server`** - configuration loading, application state, app creation
//! - **`routes`** - route table and layers (CORS, tracing, panic fallback)
//! - **`auth`** - user directory, token codec, login and profile handlers
//! - **`middleware`** - bearer token extraction
//! - **`error`** - backend error type and its JSON response form
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request extractors
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the user directory, the token codec and the
//! configuration. All of it is read-only after startup, so handlers share
//! it through `Arc` without locking and concurrent requests are independent.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`. Errors become JSON
//! `{ "message": ... }` bodies with 400, 401, 404 or 500 status codes.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user lookups
pub mod auth;

/// Request extractors
pub mod middleware;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::{create_app, AppState};
