//! Server Module
//!
//! Server assembly: configuration, shared state, and initialization.
//!
//! - **`config`** - database pool construction and migrations
//! - **`state`** - `AppState` and its `FromRef` extractions
//! - **`init`** - `create_app`, wiring state into the router

/// Database and environment configuration
pub mod config;

/// Application state
pub mod state;

/// Application assembly
pub mod init;

pub use init::create_app;
pub use state::AppState;
