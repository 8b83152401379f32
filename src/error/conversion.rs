/**
 * Error Conversion
 *
 * `IntoResponse` for the service error type. Every failure is rendered the
 * same way: status 400 with a JSON body of the form
 *
 * ```json
 * {"error": "Cannot find room"}
 * ```
 *
 * Status codes are not differentiated further; the message carries the
 * distinction and the variant kind goes to the log.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(kind = self.kind(), "request failed: {self}");

        let body = serde_json::json!({ "error": self.to_string() });
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_error_response_shape() {
        let response = ApiError::RoomNotFound.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Cannot find room" }));
    }

    #[tokio::test]
    async fn test_internal_error_hides_detail() {
        let error: ApiError = sqlx::Error::PoolClosed.into();
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "internal error");
    }
}
