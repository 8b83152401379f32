/**
 * Login Handler
 *
 * POST /users/login
 *
 * Looks the user up by username, verifies the password against the stored
 * bcrypt hash, and returns a fresh 24-hour token. There is no lockout: a
 * wrong password fails the same way no matter how many logins came before.
 */

use axum::{extract::State, response::Json};
use bcrypt::verify;
use sqlx::SqlitePool;

use crate::auth::handlers::types::{AuthResponse, LoginRequest, UserResponse};
use crate::auth::sessions::create_token;
use crate::auth::users::get_user_by_username;
use crate::error::ApiError;

pub async fn login(
    State(pool): State<SqlitePool>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let user = get_user_by_username(&pool, &request.username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("login for unknown user: {}", request.username);
            ApiError::UserNotFound
        })?;

    let valid = verify(&request.password, &user.password_hash).map_err(|e| {
        tracing::error!("password verification error: {e:?}");
        ApiError::Internal
    })?;
    if !valid {
        tracing::warn!("invalid password for user: {}", user.username);
        return Err(ApiError::InvalidPassword);
    }

    let token = create_token(user.id, &user.username).map_err(|e| {
        tracing::error!("failed to create token: {e:?}");
        ApiError::Internal
    })?;

    tracing::info!("user logged in: {}", user.username);

    Ok(Json(AuthResponse {
        user: UserResponse::from(user),
        token,
    }))
}
