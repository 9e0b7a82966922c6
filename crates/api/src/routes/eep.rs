//! Route definitions for emergency contacts and unlock codes.

use axum::routing::post;
use axum::Router;

use crate::handlers::eep;
use crate::state::AppState;

/// EEP routes mounted at `/eep`.
///
/// ```text
/// POST /set      -> set_contacts
/// POST /generate -> generate_code
/// POST /validate -> validate_code
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/set", post(eep::set_contacts))
        .route("/generate", post(eep::generate_code))
        .route("/validate", post(eep::validate_code))
}
