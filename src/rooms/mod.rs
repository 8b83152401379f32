//! Room Module
//!
//! Room lifecycle and the membership state machine:
//!
//! - **`model`** - the typed `Room` entity, the ordered `Roster` membership
//!   list, and the pure join/leave transitions that enforce the capacity and
//!   no-duplicate invariants
//! - **`db`** - the room store (records keyed by guid)
//! - **`handlers`** - HTTP handlers for room endpoints
//!
//! Rooms are created by an authenticated user who becomes the host; the
//! roster only changes through explicit join/leave. There is no room
//! deletion.

/// Room entity and membership transitions
pub mod model;

/// Room database operations
pub mod db;

/// HTTP handlers for room endpoints
pub mod handlers;

pub use model::{Room, Roster, DEFAULT_ROOM_LIMIT};
