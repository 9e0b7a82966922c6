//! Shared response envelope types for API handlers.
//!
//! Every endpoint answers `200 OK` with an `ok` flag: `{ "ok": true, ...fields }`
//! on success, `{ "ok": false, "error": "..." }` when the request was
//! understood but rejected. Transport and storage failures go through
//! [`crate::error::AppError`] instead.

use std::fmt;

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// `{ "ok": true, ...data }`, with the payload's fields flattened in.
#[derive(Debug, Serialize)]
pub struct OkResponse<T: Serialize> {
    ok: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> OkResponse<T> {
    pub fn new(data: T) -> Self {
        Self { ok: true, data }
    }
}

/// `{ "ok": false, "error": message }`.
#[derive(Debug, Serialize)]
pub struct RejectedResponse {
    ok: bool,
    pub error: String,
}

impl RejectedResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: error.into(),
        }
    }
}

/// The result of a domain operation, rendered as one of the two envelopes.
#[derive(Debug)]
pub enum Outcome<T> {
    Ok(T),
    Rejected(String),
}

impl<T, E: fmt::Display> From<Result<T, E>> for Outcome<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Outcome::Ok(data),
            Err(err) => Outcome::Rejected(err.to_string()),
        }
    }
}

impl<T: Serialize> IntoResponse for Outcome<T> {
    fn into_response(self) -> Response {
        match self {
            Outcome::Ok(data) => Json(OkResponse::new(data)).into_response(),
            Outcome::Rejected(error) => Json(RejectedResponse::new(error)).into_response(),
        }
    }
}
