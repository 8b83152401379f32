//! Identity Module
//!
//! Registration, login, user lookup, and self-service account management,
//! plus the pieces they are built from:
//!
//! - **`users`** - the credential store: user records and database operations
//! - **`sessions`** - signed session tokens (24-hour lifetime)
//! - **`handlers`** - HTTP handlers for the identity endpoints
//!
//! Passwords are bcrypt-hashed with a randomized salt before persistence;
//! plaintext never reaches the store, and stored hashes never leave it in a
//! response.

/// User data model and database operations
pub mod users;

/// Session token issuance and verification
pub mod sessions;

/// HTTP handlers for identity endpoints
pub mod handlers;

pub use handlers::types::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
pub use handlers::{delete_user, get_user, list_users, login, register, update_user};
