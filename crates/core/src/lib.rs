//! Domain logic for the ShieldX lock state service.
//!
//! Pure types and functions with no I/O: the persisted [`lock_state::LockState`]
//! document, one-time code generation and validation, and the clock
//! abstraction used for every expiry comparison.

pub mod clock;
pub mod eep_code;
pub mod error;
pub mod lock_state;
pub mod types;
