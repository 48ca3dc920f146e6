//! Server Module
//!
//! This module initializes and configures the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Configuration loading from the environment
//! └── init.rs         - App creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: port, signing secret and token TTL
//! 2. **State Creation**: user directory and token codec
//! 3. **Router Creation**: routes, CORS, tracing and the panic fallback
//!
//! # Example
//!
//! ```rust,no_run
//! use mock_auth::backend::server::{config::load_config, create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config()?;
//! let port = config.port;
//! let app = create_app(config);
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use init::{create_app, create_app_with_directory};
pub use state::AppState;
