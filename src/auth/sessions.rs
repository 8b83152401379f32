/**
 * Session Tokens
 *
 * JWT issuance and verification. A token is bound to a user's stable id at
 * issuance time and expires 24 hours later; it is the single authorization
 * mechanism of the service.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Token lifetime: 24 hours from issuance.
pub const TOKEN_TTL_SECS: u64 = 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id (UUID, stable identity reference)
    pub sub: String,
    /// Username at issuance time
    pub username: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Get the signing secret from the environment
fn jwt_secret() -> String {
    std::env::var("JWT_SECRET").unwrap_or_else(|err| {
        tracing::warn!("Missing JWT_SECRET ({err}); using development fallback");
        "huddle-dev-secret-change-in-production".to_string()
    })
}

/// Create a signed token for a user
///
/// # Arguments
/// * `user_id` - User id embedded as the token subject
/// * `username` - Username at issuance time
///
/// # Returns
/// JWT token string, expiring in 24 hours
pub fn create_token(user_id: Uuid, username: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs();

    let claims = Claims {
        sub: user_id.to_string(),
        username: username.to_owned(),
        exp: now + TOKEN_TTL_SECS,
        iat: now,
    };

    let key = EncodingKey::from_secret(jwt_secret().as_ref());
    encode(&Header::default(), &claims, &key)
}

/// Verify and decode a token
///
/// Checks the signature and the expiry claim; fails on either.
pub fn verify_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(jwt_secret().as_ref());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &key, &validation)?;
    Ok(token_data.claims)
}
