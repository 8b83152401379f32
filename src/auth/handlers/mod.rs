//! Identity Service Handlers
//!
//! One file per operation group, shared request/response types in `types`:
//!
//! - **`register`** - POST /users/register
//! - **`login`** - POST /users/login
//! - **`lookup`** - GET /users, GET /users/{username}
//! - **`account`** - PUT /users, DELETE /users (self-service, auth required)

pub mod account;
pub mod login;
pub mod lookup;
pub mod register;
pub mod types;

pub use account::{delete_user, update_user};
pub use login::login;
pub use lookup::{get_user, list_users};
pub use register::register;
