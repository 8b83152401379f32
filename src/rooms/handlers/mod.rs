//! Room Service Handlers
//!
//! - **`create`** - POST /rooms
//! - **`lookup`** - GET /rooms, GET /rooms/find, GET /rooms/user
//! - **`membership`** - POST /rooms/join, POST /rooms/leave
//! - **`host`** - PUT /rooms

pub mod create;
pub mod host;
pub mod lookup;
pub mod membership;
pub mod types;

pub use create::create_room;
pub use host::transfer_host;
pub use lookup::{find_room, list_rooms, rooms_by_user};
pub use membership::{join_room, leave_room};
