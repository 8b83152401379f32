//! Huddle: a room-based chat/meeting coordination backend.
//!
//! Users register and authenticate with signed 24-hour bearer tokens, then
//! create, discover, join, and leave capacity-bounded rooms, each with a
//! designated host who can hand hosting rights to another user.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── auth/        - identity: credential store, session tokens, handlers
//! ├── rooms/       - rooms: entity + membership state machine, store, handlers
//! ├── middleware/  - the authentication gate (AuthUser extractor)
//! ├── error/       - ApiError taxonomy and its HTTP rendering
//! ├── routes/      - route tables and router assembly
//! └── server/      - configuration, state, initialization
//! ```
//!
//! Every authenticated operation passes through the auth gate, which resolves
//! the caller identity from the bearer token; handlers then read and write
//! the SQLite store through the `auth::users` and `rooms::db` modules. All
//! failures render as `400 {"error": <message>}`.

/// Identity: users, sessions, identity handlers
pub mod auth;

/// Error taxonomy
pub mod error;

/// Request middleware (authentication gate)
pub mod middleware;

/// Rooms: entity, store, room handlers
pub mod rooms;

/// Route configuration
pub mod routes;

/// Server configuration and assembly
pub mod server;

pub use error::ApiError;
pub use middleware::auth::AuthUser;
pub use server::create_app;

#[cfg(test)]
pub(crate) mod test_support;
