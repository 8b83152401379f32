/**
 * Authentication Gate
 *
 * Extracts and verifies the bearer token on protected routes and resolves it
 * to the caller's identity. The identity is handed to handlers by value as
 * an extractor argument; there is no ambient per-request auth state.
 *
 * Failure modes, in the order they are checked:
 * 1. No `Authorization` header        -> `MissingCredential`
 * 2. Not exactly `Bearer <token>`     -> `MalformedCredential`
 * 3. Bad signature / expired token,
 *    or a subject that no longer
 *    resolves to a stored user        -> `InvalidCredential`
 */

use axum::extract::{FromRef, FromRequestParts};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::auth::sessions::verify_token;
use crate::auth::users::get_user_by_id;
use crate::error::ApiError;

/// The caller identity resolved by the auth gate: the stable id embedded at
/// token-issuance time plus its current username.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub username: String,
}

impl<S> FromRequestParts<S> for AuthUser
where
    SqlitePool: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                tracing::warn!("missing authorization header");
                ApiError::MissingCredential
            })?;

        // Exactly a scheme label and a token value, scheme must be `Bearer`.
        let segments: Vec<&str> = header.split(' ').collect();
        let token = match segments.as_slice() {
            ["Bearer", token] => *token,
            _ => {
                tracing::warn!("malformed authorization header");
                return Err(ApiError::MalformedCredential);
            }
        };

        let claims = verify_token(token).map_err(|e| {
            tracing::warn!("token rejected: {e}");
            ApiError::InvalidCredential
        })?;

        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| {
            tracing::warn!("token subject is not a user id");
            ApiError::InvalidCredential
        })?;

        // The identity must still resolve to a stored user; a token for a
        // deleted account is no longer a credential.
        let pool = SqlitePool::from_ref(state);
        let user = get_user_by_id(&pool, user_id).await?.ok_or_else(|| {
            tracing::warn!("token subject no longer exists: {user_id}");
            ApiError::InvalidCredential
        })?;

        Ok(AuthUser {
            user_id,
            username: user.username,
        })
    }
}
