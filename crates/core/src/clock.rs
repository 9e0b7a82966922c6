//! Injectable wall-clock source.
//!
//! Every expiry comparison goes through [`Clock`] so the 3-minute code and
//! unlock windows can be exercised in tests without real delays.

use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::types::TimestampMs;

/// Source of the current wall-clock time.
pub trait Clock: Send + Sync + fmt::Debug {
    /// Current time in milliseconds since the Unix epoch.
    fn now_ms(&self) -> TimestampMs;
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> TimestampMs {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Settable clock for deterministic tests.
///
/// Interior mutability lets a test hold one `Arc<ManualClock>` and move time
/// forward while the application shares the same instance.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicI64,
}

impl ManualClock {
    pub fn new(start_ms: TimestampMs) -> Self {
        Self {
            now: AtomicI64::new(start_ms),
        }
    }

    pub fn set(&self, now_ms: TimestampMs) {
        self.now.store(now_ms, Ordering::SeqCst);
    }

    /// Move the clock forward by `delta_ms`, returning the new time.
    pub fn advance(&self, delta_ms: TimestampMs) -> TimestampMs {
        self.now.fetch_add(delta_ms, Ordering::SeqCst) + delta_ms
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> TimestampMs {
        self.now.load(Ordering::SeqCst)
    }
}
