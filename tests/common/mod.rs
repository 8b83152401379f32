//! Shared fixtures for the API integration tests.
//!
//! Builds the full application router on top of a fresh in-memory database
//! and provides helpers for driving it with `tower::ServiceExt::oneshot`.

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use huddle::routes::create_router;
use huddle::server::AppState;

/// Fresh application over an in-memory database with migrations applied.
///
/// The pool is capped at one connection: every `sqlite::memory:` connection
/// is its own database.
pub async fn test_app() -> Router {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("failed to run migrations");

    create_router(AppState { db_pool: pool })
}

/// One request through the router; `token` adds a bearer Authorization header.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

/// Read a response body as JSON.
pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Read a response body as plain text.
pub async fn text_body(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Register a user and return their token.
pub async fn register(app: &Router, username: &str, password: &str) -> String {
    let response = send(
        app,
        "POST",
        "/users/register",
        None,
        Some(serde_json::json!({ "username": username, "password": password })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK, "registration failed");

    let body = json_body(response).await;
    body["token"].as_str().expect("token in response").to_string()
}

/// Create a room as `token`'s user and return its guid.
pub async fn create_room(app: &Router, token: &str, name: &str, limit: Option<i64>) -> String {
    let mut body = serde_json::json!({ "name": name });
    if let Some(limit) = limit {
        body["limit"] = serde_json::json!(limit);
    }

    let response = send(app, "POST", "/rooms", Some(token), Some(body)).await;
    assert_eq!(response.status(), StatusCode::OK, "room creation failed");

    let room = json_body(response).await;
    room["guid"].as_str().expect("guid in response").to_string()
}

/// Fetch a room by guid through the public find endpoint.
pub async fn find_room(app: &Router, guid: &str) -> serde_json::Value {
    let response = send(app, "GET", &format!("/rooms/find?guid={guid}"), None, None).await;
    assert_eq!(response.status(), StatusCode::OK, "room lookup failed");
    json_body(response).await["room"].clone()
}
