/**
 * User Lookup Handlers
 *
 * GET /users and GET /users/{username}. Both are unauthenticated. The
 * outward representation never includes the credential hash.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use sqlx::SqlitePool;

use crate::auth::handlers::types::{UserEnvelope, UserResponse, UsersResponse};
use crate::auth::users::{self, get_user_by_username};
use crate::error::ApiError;

/// List every registered user
pub async fn list_users(State(pool): State<SqlitePool>) -> Result<Json<UsersResponse>, ApiError> {
    let users = users::list_users(&pool).await?;

    Ok(Json(UsersResponse {
        users: users.into_iter().map(UserResponse::from).collect(),
    }))
}

/// Get one user by exact username match
pub async fn get_user(
    State(pool): State<SqlitePool>,
    Path(username): Path<String>,
) -> Result<Json<UserEnvelope>, ApiError> {
    let user = get_user_by_username(&pool, &username)
        .await?
        .ok_or(ApiError::UserNotFound)?;

    Ok(Json(UserEnvelope { user: user.into() }))
}
