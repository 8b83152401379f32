//! Error Module
//!
//! Defines the service-wide error taxonomy and its HTTP rendering.
//!
//! - **`types`** - the `ApiError` enum and constructors
//! - **`conversion`** - `IntoResponse`: every error becomes
//!   `400 {"error": <message>}`
//!
//! Handlers return `Result<_, ApiError>` and propagate with `?`; no error is
//! retried and no partial-failure recovery is attempted.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::ApiError;
