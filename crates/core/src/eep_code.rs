//! One-time emergency (EEP) unlock codes: generation and validation.

use rand::Rng;

use crate::error::CodeError;
use crate::types::TimestampMs;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Length of a generated code (alphanumeric characters).
pub const CODE_LENGTH: usize = 20;

/// How long a code stays redeemable after issue, and how long a successful
/// redemption keeps the unlock window open (3 minutes).
pub const CODE_WINDOW_MS: TimestampMs = 3 * 60 * 1000;

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Generate a new code drawn uniformly from `[A-Za-z0-9]`.
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(CODE_LENGTH)
        .map(char::from)
        .collect()
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Check `candidate` against the last issued code.
///
/// Succeeds when the candidate matches exactly and no more than
/// [`CODE_WINDOW_MS`] has elapsed since `issued_at` (inclusive bound).
/// An empty stored code counts as no code at all.
pub fn check_code(
    last_code: Option<&str>,
    issued_at: TimestampMs,
    candidate: Option<&str>,
    now: TimestampMs,
) -> Result<(), CodeError> {
    let expected = last_code
        .filter(|code| !code.is_empty())
        .ok_or(CodeError::NoCodeCreated)?;

    let elapsed = now.saturating_sub(issued_at);
    if candidate == Some(expected) && elapsed <= CODE_WINDOW_MS {
        Ok(())
    } else {
        Err(CodeError::InvalidOrExpired)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
