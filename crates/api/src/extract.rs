//! Lenient JSON body extractor.
//!
//! Request bodies are optional and loosely shaped. [`JsonBody`] turns:
//!
//! - a missing body, or one not declared as JSON, into `T::default()`;
//! - syntactically invalid JSON into a 400 [`AppError::BadRequest`];
//! - valid JSON that is not an object, or has mistyped fields, into
//!   `T::default()`, so field-level validation in the handler produces the
//!   usual `{ "ok": false }` outcome.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Request body parsed leniently as JSON into `T`.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let declared_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(is_json_content_type);

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        if !declared_json {
            return Ok(JsonBody(T::default()));
        }

        parse_body(&bytes).map(JsonBody)
    }
}

fn is_json_content_type(value: &str) -> bool {
    let mime = value.split(';').next().unwrap_or_default().trim();
    mime.eq_ignore_ascii_case("application/json")
        || mime.to_ascii_lowercase().ends_with("+json")
}

/// Decode a raw body, see the module docs for the lenient rules.
pub fn parse_body<T>(bytes: &[u8]) -> Result<T, AppError>
where
    T: DeserializeOwned + Default,
{
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    let value: serde_json::Value = serde_json::from_slice(bytes)
        .map_err(|err| AppError::BadRequest(format!("Invalid JSON body: {err}")))?;

    match value {
        serde_json::Value::Object(_) => Ok(serde_json::from_value(value).unwrap_or_default()),
        _ => Ok(T::default()),
    }
}
