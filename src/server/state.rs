/**
 * Application State
 *
 * The central state container for the router. The store pool is the only
 * shared resource: no in-process cache, no locks. Each request reads and
 * writes the store directly.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. Mandatory: the service has no storeless
    /// mode, so startup fails fast if the pool cannot be built.
    pub db_pool: SqlitePool,
}

/// Lets handlers extract `State<SqlitePool>` directly instead of taking the
/// whole `AppState`.
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}
