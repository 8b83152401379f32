/**
 * Host Transfer Handler
 *
 * PUT /rooms (auth required). Validates that the `guid` room and the target
 * user exist, then reassigns hosting rights ON THE ROOM THE CALLER CURRENTLY
 * HOSTS, not necessarily the `guid` room. The guid is only checked for
 * existence.
 */

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::auth::users::get_user_by_username;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::rooms::db;
use crate::rooms::handlers::types::TransferHostRequest;

pub async fn transfer_host(
    State(pool): State<SqlitePool>,
    caller: AuthUser,
    Json(request): Json<TransferHostRequest>,
) -> Result<&'static str, ApiError> {
    // Check order: room named by guid, then the target user, then the
    // caller's hosted room.
    if db::get_room_by_guid(&pool, &request.guid).await?.is_none() {
        return Err(ApiError::RoomNotFound);
    }

    let target = get_user_by_username(&pool, &request.username)
        .await?
        .ok_or(ApiError::UserNotFound)?;

    let mut hosted = db::get_room_by_host(&pool, &caller.username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("{} hosts no room", caller.username);
            ApiError::NotHost
        })?;

    hosted.host_name = target.username;
    db::save_host(&pool, &hosted).await?;

    tracing::info!(
        "room {} host changed: {} -> {}",
        hosted.guid,
        caller.username,
        hosted.host_name
    );
    Ok("Host user changed")
}
