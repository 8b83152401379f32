/**
 * Room Creation Handler
 *
 * POST /rooms (auth required). The caller becomes the host of the new room
 * but is NOT added to its roster; joining is a separate, explicit step.
 */

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::rooms::db;
use crate::rooms::handlers::types::CreateRoomRequest;
use crate::rooms::model::{generate_guid, Room};

pub async fn create_room(
    State(pool): State<SqlitePool>,
    caller: AuthUser,
    Json(request): Json<CreateRoomRequest>,
) -> Result<Json<Room>, ApiError> {
    if request.name.is_empty() {
        return Err(ApiError::validation("Room name is required"));
    }

    let room = Room::new(generate_guid(), request.name, caller.username, request.limit);
    db::create_room(&pool, &room).await?;

    tracing::info!("room created: {} ({})", room.name, room.guid);
    Ok(Json(room))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::users::create_user;
    use crate::test_support::test_pool;

    async fn caller(pool: &SqlitePool) -> AuthUser {
        let user = create_user(pool, "alice", "h".to_string(), None).await.unwrap();
        AuthUser {
            user_id: user.id,
            username: user.username,
        }
    }

    fn request(name: &str, limit: Option<i64>) -> CreateRoomRequest {
        CreateRoomRequest {
            name: name.to_string(),
            limit,
        }
    }

    #[tokio::test]
    async fn test_create_room_defaults() {
        let pool = test_pool().await;
        let caller = caller(&pool).await;

        let room = create_room(State(pool.clone()), caller, Json(request("Trivia Night", None)))
            .await
            .unwrap();

        assert_eq!(room.name, "Trivia Night");
        assert_eq!(room.host_name, "alice");
        assert_eq!(room.limit, 5);
        assert_eq!(room.num_participants, 0);
        assert!(room.participants.is_empty());

        // Persisted with the returned guid.
        let stored = db::get_room_by_guid(&pool, &room.guid).await.unwrap().unwrap();
        assert_eq!(stored.limit, 5);
    }

    #[tokio::test]
    async fn test_create_room_with_limit() {
        let pool = test_pool().await;
        let caller = caller(&pool).await;

        let room = create_room(State(pool), caller, Json(request("Small", Some(2))))
            .await
            .unwrap();
        assert_eq!(room.limit, 2);
    }

    #[tokio::test]
    async fn test_create_room_requires_name() {
        let pool = test_pool().await;
        let caller = caller(&pool).await;

        let err = create_room(State(pool), caller, Json(request("", None)))
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::validation("Room name is required"));
    }
}
