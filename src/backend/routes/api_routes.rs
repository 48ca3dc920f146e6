/**
 * API Route Handlers
 *
 * This module registers the authentication endpoints.
 *
 * # Routes
 *
 * - `POST /auth/login` - exchange credentials for a token (public)
 * - `GET /auth/profile` - profile of the token holder (bearer token)
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::auth::{get_profile, login};
use crate::backend::server::state::AppState;

/// Configure API routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/auth/login", post(login))
        .route("/auth/profile", get(get_profile))
}
