//! Time source port and its system adapter.
//!
//! Code crash if there is a physical inconsistency (unrecoverable state).

use crate::timestamp::Timestamp;

/// Port for getting the current time.
pub trait Clock: Send + Sync {
    /// Get the current Unix timestamp in milliseconds.
    fn now_millis(&self) -> Timestamp;
}

/// System clock using the OS time.
#[derive(Debug)]
pub struct SystemClock;

impl SystemClock {
    /// Create a new system-backed clock.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> Timestamp {
        let elapsed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("system time before Unix epoch");

        Timestamp::from_millis(elapsed.as_millis() as u64)
    }
}

/// Clock stuck at a given instant, for tests.
#[cfg(test)]
#[derive(Debug)]
pub struct FixedClock {
    timestamp: Timestamp,
}

#[cfg(test)]
impl FixedClock {
    /// Create a clock that always reports `timestamp`.
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }
}

#[cfg(test)]
impl Clock for FixedClock {
    fn now_millis(&self) -> Timestamp {
        self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_does_not_go_backward() {
        let clock = SystemClock::new();

        let first = clock.now_millis();
        let second = clock.now_millis();
        assert!(second >= first);
        assert!(first.as_millis() > 0);
    }

    #[test]
    fn fixed_clock_reports_its_value() {
        let clock = FixedClock::new(Timestamp::from_millis(1_700_000_000_000));

        assert_eq!(clock.now_millis().as_millis(), 1_700_000_000_000);
        assert_eq!(clock.now_millis(), clock.now_millis());
    }
}
