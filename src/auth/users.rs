/**
 * User Model and Database Operations
 *
 * The credential store: user records keyed by UUID with a unique username.
 * Passwords are stored only as bcrypt hashes.
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

/// User struct representing a user in the database
#[derive(Debug, Clone, Serialize)]
pub struct User {
    /// Unique user ID (UUID), the stable identity embedded in tokens
    pub id: Uuid,
    /// Username (unique, immutable after creation)
    pub username: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Optional mobile notification token
    pub mobile_token: Option<String>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

const USER_COLUMNS: &str = "id, username, password_hash, mobile_token, created_at, updated_at";

fn user_from_row(row: &SqliteRow) -> Result<User, sqlx::Error> {
    let id: String = row.try_get("id")?;
    let id = Uuid::parse_str(&id).map_err(|e| sqlx::Error::ColumnDecode {
        index: "id".into(),
        source: Box::new(e),
    })?;

    Ok(User {
        id,
        username: row.try_get("username")?,
        password_hash: row.try_get("password_hash")?,
        mobile_token: row.try_get("mobile_token")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `username` - User's chosen username
/// * `password_hash` - Hashed password (never plaintext)
/// * `mobile_token` - Optional mobile notification token
///
/// # Returns
/// Created user or error (including the UNIQUE violation on a taken username)
pub async fn create_user(
    pool: &SqlitePool,
    username: &str,
    password_hash: String,
    mobile_token: Option<&str>,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO users (id, username, password_hash, mobile_token, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(id.to_string())
    .bind(username)
    .bind(&password_hash)
    .bind(mobile_token)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(User {
        id,
        username: username.to_owned(),
        password_hash,
        mobile_token: mobile_token.map(|t| t.to_owned()),
        created_at: now,
        updated_at: now,
    })
}

/// Get user by username
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `username` - Username (exact match)
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    let row = sqlx::query(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE username = ?"
    ))
    .bind(username)
    .fetch_optional(pool)
    .await?;

    row.map(|r| user_from_row(&r)).transpose()
}

/// Get user by ID
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `id` - User ID
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    let row = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?"))
        .bind(id.to_string())
        .fetch_optional(pool)
        .await?;

    row.map(|r| user_from_row(&r)).transpose()
}

/// List all users in registration order
pub async fn list_users(pool: &SqlitePool) -> Result<Vec<User>, sqlx::Error> {
    let rows = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users ORDER BY rowid"))
        .fetch_all(pool)
        .await?;

    rows.iter().map(user_from_row).collect()
}

/// Update a user's credential and/or mobile token
///
/// Fields passed as `None` are left untouched; `updated_at` is bumped.
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `id` - User ID
/// * `password_hash` - New hashed password, if changing
/// * `mobile_token` - New mobile token, if changing
pub async fn update_credentials(
    pool: &SqlitePool,
    id: Uuid,
    password_hash: Option<&str>,
    mobile_token: Option<&str>,
) -> Result<(), sqlx::Error> {
    let now = Utc::now();

    sqlx::query(
        r#"
        UPDATE users
        SET password_hash = COALESCE(?, password_hash),
            mobile_token = COALESCE(?, mobile_token),
            updated_at = ?
        WHERE id = ?
        "#,
    )
    .bind(password_hash)
    .bind(mobile_token)
    .bind(now)
    .bind(id.to_string())
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete a user record unconditionally
pub async fn delete_user(pool: &SqlitePool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id.to_string())
        .execute(pool)
        .await?;

    Ok(())
}
