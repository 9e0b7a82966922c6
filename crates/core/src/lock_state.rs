//! The persisted lock state document and its mutations.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::eep_code::{self, CODE_WINDOW_MS};
use crate::error::{CodeError, InputError};
use crate::types::TimestampMs;

/// The single document holding all service state.
///
/// Serialized with camelCase keys; `lastCode` is written as `null` until
/// the first code is generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockState {
    pub lock_active: bool,
    /// Caller-supplied identifiers, stored verbatim.
    pub eep_contacts: Vec<Value>,
    pub last_code: Option<String>,
    pub last_code_ts: TimestampMs,
    /// `0` means no window has ever been opened.
    pub unlock_window_until: TimestampMs,
}

impl Default for LockState {
    fn default() -> Self {
        Self {
            lock_active: true,
            eep_contacts: Vec::new(),
            last_code: None,
            last_code_ts: 0,
            unlock_window_until: 0,
        }
    }
}

impl LockState {
    /// Replace the contact list wholesale, returning the number stored.
    pub fn replace_contacts(&mut self, contacts: Vec<Value>) -> usize {
        self.eep_contacts = contacts;
        self.eep_contacts.len()
    }

    /// Record a freshly issued code, superseding any previous one.
    pub fn record_code(&mut self, code: String, issued_at: TimestampMs) {
        self.last_code = Some(code);
        self.last_code_ts = issued_at;
    }

    /// Check `candidate` against the last issued code and, on success, open
    /// the unlock window for [`CODE_WINDOW_MS`] from `now`.
    ///
    /// The code is not consumed; it can be redeemed again until it expires.
    pub fn redeem_code(
        &mut self,
        candidate: Option<&str>,
        now: TimestampMs,
    ) -> Result<TimestampMs, CodeError> {
        eep_code::check_code(self.last_code.as_deref(), self.last_code_ts, candidate, now)?;
        self.unlock_window_until = now.saturating_add(CODE_WINDOW_MS);
        Ok(self.unlock_window_until)
    }

    /// Whether the unlock window is still open at `now`.
    ///
    /// Exclusive at the end: the window is closed at `unlock_window_until`.
    pub fn unlock_window_active(&self, now: TimestampMs) -> bool {
        self.unlock_window_until > now
    }
}

/// Accept a `contacts` payload only when it is a JSON array.
pub fn parse_contacts(contacts: Option<Value>) -> Result<Vec<Value>, InputError> {
    match contacts {
        Some(Value::Array(items)) => Ok(items),
        _ => Err(InputError::ContactsNotArray),
    }
}
