/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds everything handlers need, all read-only after startup:
 * - the user directory
 * - the token codec
 * - the configuration it was built from
 *
 * Nothing in it is mutated, so no locks are involved; cloning the state
 * clones three `Arc`s.
 *
 * # Example
 *
 * ```rust
 * use mock_auth::backend::auth::users::SharedUserDirectory;
 * use axum::extract::State;
 *
 * async fn handler(State(users): State<SharedUserDirectory>) {
 *     let _alice = users.find_by_id("u-1001").await;
 * }
 * ```
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::auth::sessions::TokenCodec;
use crate::backend::auth::users::{InMemoryUserDirectory, SharedUserDirectory};
use crate::shared::config::AppConfig;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Read-only user lookups
    pub users: SharedUserDirectory,

    /// Token signing and verification with the configured secret and TTL
    pub tokens: Arc<TokenCodec>,

    /// Configuration the state was built from
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Build state from configuration with the built-in mock users
    pub fn new(config: AppConfig) -> Self {
        Self::with_directory(config, Arc::new(InMemoryUserDirectory::seeded()))
    }

    /// Build state from configuration and a custom user directory
    pub fn with_directory(config: AppConfig, users: SharedUserDirectory) -> Self {
        Self {
            users,
            tokens: Arc::new(TokenCodec::from_config(&config)),
            config: Arc::new(config),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("tokens", &self.tokens)
            .field("port", &self.config.port)
            .finish_non_exhaustive()
    }
}

/// Lets handlers extract `State<SharedUserDirectory>` directly
impl FromRef<AppState> for SharedUserDirectory {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.users.clone()
    }
}

/// Lets handlers and extractors get at the token codec
impl FromRef<AppState> for Arc<TokenCodec> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
