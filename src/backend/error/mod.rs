//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//! These errors are returned from HTTP handlers and converted to JSON
//! responses of the form `{ "message": ... }`.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse and panic fallback
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use conversion::{panic_response, ErrorBody};
pub use types::{BackendError, INTERNAL_ERROR_MESSAGE};
