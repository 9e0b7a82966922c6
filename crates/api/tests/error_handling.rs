//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no server needed.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use shieldx_api::error::AppError;
use shieldx_db::StoreError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: AppError::BadRequest maps to 400 with BAD_REQUEST code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("Invalid JSON body".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["ok"], false);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "Invalid JSON body");
}

// ---------------------------------------------------------------------------
// Test: storage errors map to 500 and hide the cause
// ---------------------------------------------------------------------------

#[tokio::test]
async fn store_error_returns_500_and_sanitizes_message() {
    let err = AppError::Store(StoreError::Io {
        action: "write",
        path: "/secret/location/state.json".into(),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["ok"], false);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
    assert!(!json.to_string().contains("/secret/location"));
}
