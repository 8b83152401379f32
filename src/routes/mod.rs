//! Route Configuration
//!
//! - **`user_routes`** - identity endpoints under `/users`
//! - **`room_routes`** - room endpoints under `/rooms`
//! - **`router`** - assembly of the full application router

pub mod room_routes;
pub mod router;
pub mod user_routes;

pub use router::create_router;
