/**
 * Room Handler Types
 *
 * Request and response types for the room endpoints. Room records serialize
 * directly; the envelopes wrap lists and single records.
 */

use serde::{Deserialize, Serialize};

use crate::rooms::model::Room;

/// Room creation request: name required, capacity optional (defaults to 5).
#[derive(Deserialize, Serialize, Debug)]
pub struct CreateRoomRequest {
    #[serde(default)]
    pub name: String,
    pub limit: Option<i64>,
}

/// Host transfer request: the new host's username plus a room guid.
#[derive(Deserialize, Serialize, Debug)]
pub struct TransferHostRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub guid: String,
}

/// Join/leave request body
#[derive(Deserialize, Serialize, Debug)]
pub struct RoomGuidRequest {
    #[serde(default)]
    pub guid: String,
}

/// Query string for GET /rooms/find
#[derive(Deserialize, Debug)]
pub struct FindRoomQuery {
    #[serde(default)]
    pub guid: String,
}

/// Query string for GET /rooms/user
#[derive(Deserialize, Debug)]
pub struct UserRoomsQuery {
    #[serde(default)]
    pub username: String,
}

/// `{rooms: [...]}` envelope
#[derive(Serialize, Debug)]
pub struct RoomsResponse {
    pub rooms: Vec<Room>,
}

/// `{room}` envelope
#[derive(Serialize, Debug)]
pub struct RoomEnvelope {
    pub room: Room,
}
