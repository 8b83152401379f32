/**
 * Room Route Configuration
 *
 * Room endpoints:
 *
 * - `GET /rooms` - list all rooms (public)
 * - `GET /rooms/find` - one room by guid (public)
 * - `GET /rooms/user` - rooms a user participates in (public)
 * - `POST /rooms` - create a room (bearer)
 * - `PUT /rooms` - transfer hosting rights (bearer)
 * - `POST /rooms/join` - join a room (bearer)
 * - `POST /rooms/leave` - leave a room (bearer)
 */

use axum::routing::{get, post};
use axum::Router;

use crate::rooms::handlers::{
    create_room, find_room, join_room, leave_room, list_rooms, rooms_by_user, transfer_host,
};
use crate::server::state::AppState;

pub fn room_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/rooms",
            get(list_rooms).post(create_room).put(transfer_host),
        )
        .route("/rooms/find", get(find_room))
        .route("/rooms/user", get(rooms_by_user))
        .route("/rooms/join", post(join_room))
        .route("/rooms/leave", post(leave_room))
}
