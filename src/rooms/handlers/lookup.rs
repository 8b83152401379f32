/**
 * Room Discovery Handlers
 *
 * GET /rooms, GET /rooms/find and GET /rooms/user, all unauthenticated.
 * Discovery by user lists rooms the user participates in; merely hosting a
 * room does not list it.
 */

use axum::{
    extract::{Query, State},
    response::Json,
};
use sqlx::SqlitePool;

use crate::auth::users::get_user_by_username;
use crate::error::ApiError;
use crate::rooms::db;
use crate::rooms::handlers::types::{FindRoomQuery, RoomEnvelope, RoomsResponse, UserRoomsQuery};

/// List every room
pub async fn list_rooms(State(pool): State<SqlitePool>) -> Result<Json<RoomsResponse>, ApiError> {
    let rooms = db::list_rooms(&pool).await?;
    Ok(Json(RoomsResponse { rooms }))
}

/// Find one room by guid
pub async fn find_room(
    State(pool): State<SqlitePool>,
    Query(query): Query<FindRoomQuery>,
) -> Result<Json<RoomEnvelope>, ApiError> {
    let room = db::get_room_by_guid(&pool, &query.guid)
        .await?
        .ok_or(ApiError::RoomNotFound)?;

    Ok(Json(RoomEnvelope { room }))
}

/// List the rooms a user is a participant of
pub async fn rooms_by_user(
    State(pool): State<SqlitePool>,
    Query(query): Query<UserRoomsQuery>,
) -> Result<Json<RoomsResponse>, ApiError> {
    let user = get_user_by_username(&pool, &query.username)
        .await?
        .ok_or(ApiError::UserNotFound)?;

    let rooms = db::rooms_with_member(&pool, &user.username).await?;
    Ok(Json(RoomsResponse { rooms }))
}
