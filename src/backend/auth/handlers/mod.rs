//! Authentication Handlers Module
//!
//! This module contains the HTTP handlers for authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── login.rs    - Credential check and token issuance
//! └── profile.rs  - Profile of the token holder
//! ```
//!
//! # Handlers
//!
//! - **`login`** - POST /auth/login
//! - **`get_profile`** - GET /auth/profile
//!
//! # Example
//!
//! ```rust,no_run
//! use mock_auth::backend::auth::handlers::{get_profile, login};
//! use mock_auth::backend::server::AppState;
//! use axum::{routing::{get, post}, Router};
//!
//! let router: Router<AppState> = Router::new()
//!     .route("/auth/login", post(login))
//!     .route("/auth/profile", get(get_profile));
//! ```

/// Request and response types
pub mod types;

/// Login handler
pub mod login;

/// Profile handler
pub mod profile;

// Re-export commonly used types
pub use types::{AuthResponse, LoginRequest, ProfileResponse};

// Re-export handlers
pub use login::login;
pub use profile::get_profile;
