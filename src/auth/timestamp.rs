//! Request timestamps for Bitget API authentication.
//!
//! Every signed request carries an `ACCESS-TIMESTAMP` header, and the same value is
//! the first component of the signed message. A timestamp is captured once per
//! request and passed by value through message building and header assembly.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// A captured request timestamp, in milliseconds since the UNIX epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Create a timestamp from milliseconds since the UNIX epoch.
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    /// Milliseconds since the UNIX epoch.
    pub const fn as_millis(self) -> u64 {
        self.0
    }

    /// Whole seconds since the UNIX epoch.
    pub const fn as_secs(self) -> u64 {
        self.0 / 1000
    }
}

/// Trait for providing request timestamps.
pub trait TimestampProvider: Send + Sync {
    /// Capture the timestamp for the next request.
    fn next_timestamp(&self) -> Timestamp;
}

/// A timestamp provider based on the system clock that never hands out the same
/// millisecond twice.
///
/// If two requests are signed within the same millisecond, the second one gets
/// `last + 1`, so no request ever reuses an earlier request's timestamp.
pub struct IncreasingTimestamp {
    last_millis: AtomicU64,
}

impl IncreasingTimestamp {
    /// Create a new increasing timestamp provider.
    pub fn new() -> Self {
        Self {
            last_millis: AtomicU64::new(0),
        }
    }

    fn current_time_millis() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

impl Default for IncreasingTimestamp {
    fn default() -> Self {
        Self::new()
    }
}

impl TimestampProvider for IncreasingTimestamp {
    fn next_timestamp(&self) -> Timestamp {
        let now = Self::current_time_millis();

        loop {
            let last = self.last_millis.load(Ordering::SeqCst);
            let next = now.max(last + 1);

            if self
                .last_millis
                .compare_exchange(last, next, Ordering::SeqCst, Ordering::SeqCst)
                .is_ok()
            {
                return Timestamp(next);
            }
        }
    }
}
