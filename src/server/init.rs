/**
 * Server Initialization
 *
 * Builds the application: database pool + migrations, shared state, router.
 */

use axum::Router;

use crate::routes::router::create_router;
use crate::server::config::load_database;
use crate::server::state::AppState;

/// Create and configure the application router
///
/// Fails if the database pool cannot be built or migrations cannot run.
pub async fn create_app() -> Result<Router, sqlx::Error> {
    tracing::info!("Initializing huddle server");

    let db_pool = load_database().await?;
    let app_state = AppState { db_pool };

    Ok(create_router(app_state))
}
