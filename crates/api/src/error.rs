use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use shieldx_db::StoreError;

/// Application-level error type for HTTP handlers.
///
/// Covers failures that are not part of the normal `{ "ok": false }`
/// outcomes: storage faults and malformed request bodies. Implements
/// [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The state document could not be read or written.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Store(err) => {
                tracing::error!(error = %err, "Lock state storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "ok": false,
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
