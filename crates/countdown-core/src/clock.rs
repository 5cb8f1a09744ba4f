//! Clock abstraction so time-derived views can be tested deterministically.

use chrono::{DateTime, TimeDelta, Utc};
use parking_lot::RwLock;

/// Source of the current UTC instant.
///
/// The manager reads the clock on every operation; nothing is cached, so two
/// calls within the same second see the same wall-clock view.
pub trait Clock: Send + Sync {
    /// Current instant in UTC.
    fn now_utc(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Settable clock for tests: always returns the last pinned instant.
pub struct FixedClock {
    now: RwLock<DateTime<Utc>>,
}

impl FixedClock {
    /// Create a clock pinned to `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: RwLock::new(now),
        }
    }

    /// Pin the clock to a new instant.
    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.write() = now;
    }

    /// Move the clock forward (or backward, with a negative delta).
    pub fn advance(&self, delta: TimeDelta) {
        let mut now = self.now.write();
        *now = *now + delta;
    }
}

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        *self.now.read()
    }
}
