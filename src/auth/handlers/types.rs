/**
 * Identity Handler Types
 *
 * Request and response types shared by the identity handlers.
 */

use serde::{Deserialize, Serialize};

use crate::auth::users::User;

/// Registration request
///
/// Username and password are required (empty counts as missing); the mobile
/// notification token is optional.
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub mobile_token: Option<String>,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Self-update request: at least one field must be present and non-empty.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct UpdateUserRequest {
    pub password: Option<String>,
    pub mobile_token: Option<String>,
}

/// Outward-facing user representation
///
/// The stored credential hash is deliberately excluded from every response.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub mobile_token: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username,
            mobile_token: user.mobile_token,
        }
    }
}

/// Returned by register and login: the user plus a fresh 24-hour token.
#[derive(Serialize, Debug)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub token: String,
}

/// `{users: [...]}` envelope for the listing endpoint
#[derive(Serialize, Debug)]
pub struct UsersResponse {
    pub users: Vec<UserResponse>,
}

/// `{user}` envelope for the single-user endpoint
#[derive(Serialize, Debug)]
pub struct UserEnvelope {
    pub user: UserResponse,
}
