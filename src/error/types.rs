/**
 * Service Error Types
 *
 * This module defines the error taxonomy for the service. Every operation
 * returns `ApiError` on failure; the conversion module renders it as the
 * client-visible JSON error response.
 */

use thiserror::Error;

/// All client-visible failure kinds.
///
/// The variant is the machine-readable kind (see [`ApiError::kind`]); the
/// `Display` string is the human-readable message sent to the caller. Store
/// and crypto failures collapse into [`ApiError::Internal`]; their detail is
/// logged server-side and never reaches the caller.
#[derive(Debug, Error, PartialEq)]
pub enum ApiError {
    /// A required field is missing or empty. Carries the field-specific message.
    #[error("{0}")]
    Validation(String),

    /// Registration with a username that is already taken.
    #[error("User already exists")]
    DuplicateUser,

    /// No user record matches the given username.
    #[error("User not found")]
    UserNotFound,

    /// No room record matches the given guid.
    #[error("Cannot find room")]
    RoomNotFound,

    /// Password comparison against the stored hash failed.
    #[error("Invalid password")]
    InvalidPassword,

    /// No authorization header on a protected request.
    #[error("No token provided")]
    MissingCredential,

    /// Authorization header is not exactly `Bearer <token>`.
    #[error("Token is malformed")]
    MalformedCredential,

    /// Token signature or expiry check failed, or its subject no longer exists.
    #[error("Token is invalid")]
    InvalidCredential,

    /// Caller is already in the room's participant list.
    #[error("User is already in the room")]
    AlreadyMember,

    /// Caller is not in the room's participant list.
    #[error("User is not in this room")]
    NotMember,

    /// The room is at its participant limit.
    #[error("Room has reached the limit of participants")]
    RoomFull,

    /// Caller does not currently host any room.
    #[error("You are not the host of this room")]
    NotHost,

    /// Store or crypto failure. Detail is logged, never surfaced.
    #[error("internal error")]
    Internal,
}

impl ApiError {
    /// Short machine-readable kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::DuplicateUser => "duplicate_user",
            Self::UserNotFound => "user_not_found",
            Self::RoomNotFound => "room_not_found",
            Self::InvalidPassword => "invalid_password",
            Self::MissingCredential => "missing_credential",
            Self::MalformedCredential => "malformed_credential",
            Self::InvalidCredential => "invalid_credential",
            Self::AlreadyMember => "already_member",
            Self::NotMember => "not_member",
            Self::RoomFull => "room_full",
            Self::NotHost => "not_host",
            Self::Internal => "internal",
        }
    }

    /// Convenience constructor for missing/empty-field failures.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("store error: {err:?}");
        Self::Internal
    }
}
