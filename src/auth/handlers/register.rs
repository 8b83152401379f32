/**
 * Registration Handler
 *
 * POST /users/register
 *
 * 1. Validate that username and password are present
 * 2. Reject usernames that are already taken
 * 3. Hash the password with bcrypt (randomized salt)
 * 4. Insert the user record
 * 5. Issue a signed 24-hour token
 *
 * The response contains the outward user representation (hash excluded) and
 * the token, so the client is authenticated as the new user immediately.
 */

use axum::{extract::State, response::Json};
use bcrypt::{hash, DEFAULT_COST};
use sqlx::SqlitePool;

use crate::auth::handlers::types::{AuthResponse, RegisterRequest, UserResponse};
use crate::auth::sessions::create_token;
use crate::auth::users::{create_user, get_user_by_username};
use crate::error::ApiError;

pub async fn register(
    State(pool): State<SqlitePool>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    if request.username.is_empty() {
        return Err(ApiError::validation("Username is required"));
    }
    if request.password.is_empty() {
        return Err(ApiError::validation("Password is required"));
    }

    if get_user_by_username(&pool, &request.username).await?.is_some() {
        tracing::warn!("registration for taken username: {}", request.username);
        return Err(ApiError::DuplicateUser);
    }

    let password_hash = hash(&request.password, DEFAULT_COST).map_err(|e| {
        tracing::error!("failed to hash password: {e:?}");
        ApiError::Internal
    })?;

    let user = create_user(
        &pool,
        &request.username,
        password_hash,
        request.mobile_token.as_deref(),
    )
    .await?;

    let token = create_token(user.id, &user.username).map_err(|e| {
        tracing::error!("failed to create token: {e:?}");
        ApiError::Internal
    })?;

    tracing::info!("user registered: {}", user.username);

    Ok(Json(AuthResponse {
        user: UserResponse::from(user),
        token,
    }))
}
