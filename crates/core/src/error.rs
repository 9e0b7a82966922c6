/// Reasons a one-time code validation is rejected.
///
/// The `Display` strings are part of the HTTP contract and are returned
/// verbatim in `{ "ok": false, "error": ... }` bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CodeError {
    #[error("No code created")]
    NoCodeCreated,

    /// Wrong code and expired code are deliberately indistinguishable.
    #[error("Invalid or expired code")]
    InvalidOrExpired,
}

/// Rejections raised while validating request payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("contacts must be array")]
    ContactsNotArray,
}
