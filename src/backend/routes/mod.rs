//! Routes Module
//!
//! HTTP route configuration and router assembly.
//!
//! - **`api_routes`** - the authentication endpoints
//! - **`router`** - combines routes with CORS, tracing, the panic fallback
//!   and the 404 fallback
//!
//! # Endpoints
//!
//! - `POST /auth/login` - exchange credentials for a token
//! - `GET /auth/profile` - profile of the token holder

/// API route configuration
pub mod api_routes;

/// Main router creation
pub mod router;

pub use router::create_router;
