/**
 * Join / Leave Handlers
 *
 * POST /rooms/join and POST /rooms/leave (auth required). Each is a
 * read-modify-write: load the room, run the typed membership transition,
 * persist. The two store accesses are not atomic with respect to concurrent
 * requests on the same room, so two overlapping joins can both pass the
 * capacity check. Known limitation.
 */

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::rooms::db;
use crate::rooms::handlers::types::RoomGuidRequest;

pub async fn join_room(
    State(pool): State<SqlitePool>,
    caller: AuthUser,
    Json(request): Json<RoomGuidRequest>,
) -> Result<&'static str, ApiError> {
    let mut room = db::get_room_by_guid(&pool, &request.guid)
        .await?
        .ok_or(ApiError::RoomNotFound)?;

    room.join(&caller.username)?;
    db::save_membership(&pool, &room).await?;

    tracing::info!("{} joined room {}", caller.username, room.guid);
    Ok("User has joined the room")
}

pub async fn leave_room(
    State(pool): State<SqlitePool>,
    caller: AuthUser,
    Json(request): Json<RoomGuidRequest>,
) -> Result<&'static str, ApiError> {
    let mut room = db::get_room_by_guid(&pool, &request.guid)
        .await?
        .ok_or(ApiError::RoomNotFound)?;

    room.leave(&caller.username)?;
    db::save_membership(&pool, &room).await?;

    tracing::info!("{} left room {}", caller.username, room.guid);
    Ok("User has left the room")
}
