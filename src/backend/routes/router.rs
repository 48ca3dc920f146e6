/**
 * Router Configuration
 *
 * This module assembles the API routes and the layers around them into
 * the application router.
 *
 * # Layers (outermost first)
 *
 * 1. CORS - any origin, method and header
 * 2. Request tracing
 * 3. Panic catching - a panicking handler becomes a 500 `{message}`
 *
 * Unknown paths get a JSON 404.
 */

use axum::Router;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::backend::error::{panic_response, BackendError};
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new());

    let router = router.fallback(not_found);

    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

/// Fallback for unknown routes
async fn not_found() -> BackendError {
    BackendError::not_found("Not found")
}
