//! Handlers for emergency (EEP) contacts and one-time unlock codes.
//!
//! Contacts are replaced wholesale. Codes are single-valued: generating a
//! new one supersedes the previous code, and a valid code can be redeemed
//! repeatedly until it expires.

use axum::extract::State;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shieldx_core::eep_code;
use shieldx_core::lock_state::parse_contacts;
use shieldx_core::types::TimestampMs;

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::response::Outcome;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response bodies
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct SetContactsRequest {
    /// Must be a JSON array; anything else is rejected.
    pub contacts: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct ContactsSaved {
    pub saved: usize,
}

#[derive(Debug, Serialize)]
pub struct GeneratedCode {
    pub code: String,
    pub ts: TimestampMs,
}

#[derive(Debug, Default, Deserialize)]
pub struct ValidateCodeRequest {
    pub code: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlockGranted {
    pub unlock_window_until: TimestampMs,
}

// ---------------------------------------------------------------------------
// Contacts
// ---------------------------------------------------------------------------

/// POST /eep/set
///
/// Replace the emergency contact list. Rejects (without touching storage)
/// when `contacts` is not an array.
pub async fn set_contacts(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<SetContactsRequest>,
) -> AppResult<Outcome<ContactsSaved>> {
    let contacts = match parse_contacts(input.contacts) {
        Ok(contacts) => contacts,
        Err(err) => {
            tracing::debug!(error = %err, "Rejected contact update");
            return Ok(Outcome::Rejected(err.to_string()));
        }
    };

    let saved = state
        .store
        .modify(|lock| lock.replace_contacts(contacts))
        .await?;

    tracing::info!(saved, "Emergency contacts updated");

    Ok(Outcome::Ok(ContactsSaved { saved }))
}

// ---------------------------------------------------------------------------
// Codes
// ---------------------------------------------------------------------------

/// POST /eep/generate
///
/// Issue a fresh code, invalidating any earlier one.
pub async fn generate_code(State(state): State<AppState>) -> AppResult<Outcome<GeneratedCode>> {
    let code = eep_code::generate_code();
    let ts = state.clock.now_ms();

    state
        .store
        .modify(|lock| lock.record_code(code.clone(), ts))
        .await?;

    tracing::info!(ts, "Emergency unlock code generated");

    Ok(Outcome::Ok(GeneratedCode { code, ts }))
}

/// POST /eep/validate
///
/// Redeem the current code. On success the unlock window is (re)opened for
/// three minutes from now and persisted.
pub async fn validate_code(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<ValidateCodeRequest>,
) -> AppResult<Outcome<UnlockGranted>> {
    let now = state.clock.now_ms();

    let result = state
        .store
        .update(|lock| lock.redeem_code(input.code.as_deref(), now))
        .await?;

    match &result {
        Ok(until) => tracing::info!(unlock_window_until = until, "Unlock window opened"),
        Err(err) => tracing::warn!(error = %err, "Unlock code rejected"),
    }

    Ok(result
        .map(|unlock_window_until| UnlockGranted {
            unlock_window_until,
        })
        .into())
}
