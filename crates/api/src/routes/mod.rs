pub mod eep;
pub mod health;
pub mod lock;

use axum::Router;

use crate::state::AppState;

/// Build the service route tree.
///
/// Route hierarchy:
///
/// ```text
/// /status                 lock flag and window expiry
/// /unlock/status          whether the unlock window is open
///
/// /eep/set                replace emergency contacts
/// /eep/generate           issue a one-time code
/// /eep/validate           redeem a code, opening the unlock window
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(lock::router())
        .nest("/eep", eep::router())
}
