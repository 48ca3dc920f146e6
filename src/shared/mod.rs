//! Shared Module
//!
//! Types that do not depend on the server stack.

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
