/**
 * User Route Configuration
 *
 * Identity endpoints:
 *
 * - `POST /users/register` - registration (public)
 * - `POST /users/login` - login (public)
 * - `GET /users` - list all users (public)
 * - `GET /users/{username}` - one user by username (public)
 * - `PUT /users` - update own password/mobile token (bearer)
 * - `DELETE /users` - delete own account (bearer)
 *
 * Protected handlers take the `AuthUser` extractor, so the gate runs before
 * any of their logic.
 */

use axum::routing::{get, post};
use axum::Router;

use crate::auth::handlers::{delete_user, get_user, list_users, login, register, update_user};
use crate::server::state::AppState;

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/register", post(register))
        .route("/users/login", post(login))
        .route(
            "/users",
            get(list_users).put(update_user).delete(delete_user),
        )
        .route("/users/{username}", get(get_user))
}
