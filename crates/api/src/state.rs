use std::sync::Arc;

use shieldx_core::clock::Clock;
use shieldx_db::StateStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The persisted lock state document.
    pub store: Arc<StateStore>,
    /// Time source for code issue and expiry checks.
    pub clock: Arc<dyn Clock>,
}
