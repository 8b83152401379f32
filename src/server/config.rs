/**
 * Server Configuration
 *
 * Loads the database pool from the environment and applies migrations.
 * Unlike services that can limp along without optional backends, this one is
 * meaningless without its store, so any failure here aborts startup.
 */

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Build the database pool and run migrations
///
/// Reads `DATABASE_URL` (default: `sqlite:huddle.db?mode=rwc`, which creates
/// the file on first run), connects, and applies the `migrations/` directory.
pub async fn load_database() -> Result<SqlitePool, sqlx::Error> {
    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite:huddle.db?mode=rwc".to_string());

    tracing::info!("Connecting to database");
    let pool = SqlitePoolOptions::new()
        .max_connections(16)
        .connect(&database_url)
        .await?;

    tracing::info!("Running database migrations");
    sqlx::migrate!().run(&pool).await?;

    Ok(pool)
}
