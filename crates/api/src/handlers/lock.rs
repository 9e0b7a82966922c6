//! Read-only views of the lock and its unlock window.

use axum::extract::State;
use serde::Serialize;
use shieldx_core::types::TimestampMs;

use crate::error::AppResult;
use crate::response::Outcome;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LockStatus {
    pub lock_active: bool,
    pub unlock_window_until: TimestampMs,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlockStatus {
    pub unlock_window_active: bool,
    pub unlock_window_until: TimestampMs,
}

/// GET /status
pub async fn get_status(State(state): State<AppState>) -> AppResult<Outcome<LockStatus>> {
    let lock = state.store.snapshot().await;

    Ok(Outcome::Ok(LockStatus {
        lock_active: lock.lock_active,
        unlock_window_until: lock.unlock_window_until,
    }))
}

/// GET /unlock/status
///
/// Derived from the stored expiry; a stale window is reported inactive but
/// left in place.
pub async fn get_unlock_status(State(state): State<AppState>) -> AppResult<Outcome<UnlockStatus>> {
    let lock = state.store.snapshot().await;
    let now = state.clock.now_ms();

    Ok(Outcome::Ok(UnlockStatus {
        unlock_window_active: lock.unlock_window_active(now),
        unlock_window_until: lock.unlock_window_until,
    }))
}
