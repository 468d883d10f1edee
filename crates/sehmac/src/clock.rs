//! Clock abstraction for window-derived token expiry.
//!
//! When a caller supplies a validity window instead of an explicit expiry, the
//! signer reads the current wall-clock time once to compute `exp`. That read is
//! the only ambient input to an otherwise pure computation, so it sits behind
//! [`Clock`]: production code uses [`SystemClock`], deterministic tests pin the
//! time with [`FixedClock`].

use chrono::Utc;

/// Source of the current Unix time, in whole seconds.
pub trait Clock {
    /// Return the current Unix timestamp in seconds.
    fn unix_now(&self) -> i64;
}

/// The system wall clock (UTC).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_now(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// A clock frozen at a fixed Unix timestamp, for deterministic tests.
///
/// # Examples
///
/// ```
/// use sehmac::clock::{Clock, FixedClock};
///
/// assert_eq!(FixedClock(1_700_000_000).unix_now(), 1_700_000_000);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn unix_now(&self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_return_fixed_timestamp() {
        let clock = FixedClock(42);
        assert_eq!(clock.unix_now(), 42);
        assert_eq!(clock.unix_now(), 42);
    }

    #[test]
    fn test_should_read_system_clock_as_positive_unix_time() {
        // Anything after 2001-09-09 (Unix 1e9) is a sane wall clock.
        assert!(SystemClock.unix_now() > 1_000_000_000);
    }
}
