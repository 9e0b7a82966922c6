use axum::routing::get;
use axum::Router;

use crate::handlers::lock;
use crate::state::AppState;

/// Lock state routes mounted at the root.
///
/// ```text
/// GET /status        -> get_status
/// GET /unlock/status -> get_unlock_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/status", get(lock::get_status))
        .route("/unlock/status", get(lock::get_unlock_status))
}
