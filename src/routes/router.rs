/**
 * Router Assembly
 *
 * Combines the user and room route tables into the application router, adds
 * the request-trace layer and the 404 fallback, and applies the shared
 * state.
 */

use axum::http::StatusCode;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::routes::room_routes::room_routes;
use crate::routes::user_routes::user_routes;
use crate::server::state::AppState;

/// Create the router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .merge(user_routes())
        .merge(room_routes())
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
