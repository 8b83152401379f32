//! Middleware Module
//!
//! Request-processing middleware for the server. Currently the single
//! mechanism is the authentication gate:
//!
//! - **`auth`** - the `AuthUser` extractor that validates bearer tokens on
//!   protected routes and resolves the caller identity

pub mod auth;

pub use auth::AuthUser;
