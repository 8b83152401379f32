/**
 * Self-service Account Handlers
 *
 * PUT /users (update own password and/or mobile token) and DELETE /users
 * (remove own record). Both operate on the identity the auth gate resolved;
 * there is no way to touch another user's account.
 */

use axum::{extract::State, response::Json};
use bcrypt::{hash, DEFAULT_COST};
use sqlx::SqlitePool;

use crate::auth::handlers::types::UpdateUserRequest;
use crate::auth::users::{delete_user as remove_user, update_credentials};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

/// The field's value when it was supplied and non-empty; an empty string
/// counts as absent.
fn provided(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

pub async fn update_user(
    State(pool): State<SqlitePool>,
    caller: AuthUser,
    Json(request): Json<UpdateUserRequest>,
) -> Result<&'static str, ApiError> {
    let password = provided(&request.password);
    let mobile_token = provided(&request.mobile_token);

    if password.is_none() && mobile_token.is_none() {
        return Err(ApiError::validation(
            "Please inform a password and/or mobile_token",
        ));
    }

    let password_hash = match password {
        Some(password) => Some(hash(password, DEFAULT_COST).map_err(|e| {
            tracing::error!("failed to hash password: {e:?}");
            ApiError::Internal
        })?),
        None => None,
    };

    update_credentials(&pool, caller.user_id, password_hash.as_deref(), mobile_token).await?;

    tracing::info!("user updated: {}", caller.username);
    Ok("User updated")
}

pub async fn delete_user(
    State(pool): State<SqlitePool>,
    caller: AuthUser,
) -> Result<&'static str, ApiError> {
    remove_user(&pool, caller.user_id).await?;

    tracing::info!("user removed: {}", caller.username);
    Ok("User removed successfully")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::users::{create_user, get_user_by_id, get_user_by_username};
    use crate::test_support::test_pool;
    use uuid::Uuid;

    async fn caller(pool: &SqlitePool) -> AuthUser {
        let user = create_user(pool, "alice", "old-hash".to_string(), None)
            .await
            .unwrap();
        AuthUser {
            user_id: user.id,
            username: user.username,
        }
    }

    fn update(password: Option<&str>, mobile_token: Option<&str>) -> UpdateUserRequest {
        UpdateUserRequest {
            password: password.map(str::to_string),
            mobile_token: mobile_token.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_update_requires_a_field() {
        let pool = test_pool().await;
        let caller = caller(&pool).await;

        let err = update_user(State(pool.clone()), caller.clone(), Json(update(None, None)))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::validation("Please inform a password and/or mobile_token")
        );

        // Empty strings count as absent.
        let err = update_user(State(pool), caller, Json(update(Some(""), Some(""))))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_rehashes_password() {
        let pool = test_pool().await;
        let caller = caller(&pool).await;

        let confirmation =
            update_user(State(pool.clone()), caller.clone(), Json(update(Some("pw2"), None)))
                .await
                .unwrap();
        assert_eq!(confirmation, "User updated");

        let stored = get_user_by_id(&pool, caller.user_id).await.unwrap().unwrap();
        assert_ne!(stored.password_hash, "pw2");
        assert!(bcrypt::verify("pw2", &stored.password_hash).unwrap());
    }

    #[tokio::test]
    async fn test_update_mobile_token_only() {
        let pool = test_pool().await;
        let caller = caller(&pool).await;

        update_user(
            State(pool.clone()),
            caller.clone(),
            Json(update(None, Some("fcm-2"))),
        )
        .await
        .unwrap();

        let stored = get_user_by_id(&pool, caller.user_id).await.unwrap().unwrap();
        assert_eq!(stored.mobile_token.as_deref(), Some("fcm-2"));
        // Password untouched.
        assert_eq!(stored.password_hash, "old-hash");
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let pool = test_pool().await;
        let caller = caller(&pool).await;

        let confirmation = delete_user(State(pool.clone()), caller).await.unwrap();
        assert_eq!(confirmation, "User removed successfully");
        assert!(get_user_by_username(&pool, "alice").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_is_unconditional() {
        let pool = test_pool().await;
        // A caller whose record is already gone still gets the confirmation.
        let ghost = AuthUser {
            user_id: Uuid::new_v4(),
            username: "ghost".to_string(),
        };
        let confirmation = delete_user(State(pool), ghost).await.unwrap();
        assert_eq!(confirmation, "User removed successfully");
    }
}
