/**
 * Server Initialization
 *
 * This module builds the Axum application: application state from the
 * configuration, then the router around it.
 *
 * # Initialization Process
 *
 * 1. Build the user directory (built-in mock users unless one is given)
 * 2. Build the token codec from the configured secret and TTL
 * 3. Create the router with all routes and layers
 */

use axum::Router;

use crate::backend::auth::users::SharedUserDirectory;
use crate::backend::routes::router::create_router;
use crate::backend::server::state::AppState;
use crate::shared::config::AppConfig;

/// Create and configure the Axum application with the built-in mock users
pub fn create_app(config: AppConfig) -> Router<()> {
    tracing::info!("Initializing mock auth server");
    create_router(AppState::new(config))
}

/// Create the Axum application over a custom user directory
pub fn create_app_with_directory(config: AppConfig, users: SharedUserDirectory) -> Router<()> {
    tracing::info!("Initializing mock auth server with a custom user directory");
    create_router(AppState::with_directory(config, users))
}
