//! One-time capture of the process load time.

use std::sync::OnceLock;

use tracing::info;

use crate::clock::{Clock, SystemClock};
use crate::timestamp::Timestamp;

static READER: OnceLock<SnapshotClockReader> = OnceLock::new();

/// Holds the wall-clock time observed when the component was created.
///
/// The stored value is immutable for the component lifetime, so it can be
/// read from any number of threads without locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotClockReader {
    load_time: Timestamp,
}

impl SnapshotClockReader {
    /// Sample `clock` once and record the result.
    ///
    /// Emits a single diagnostic line with the captured value. Use
    /// [`SnapshotClockReader::global`] to guarantee at most one capture per
    /// process.
    pub fn new(clock: &dyn Clock) -> Self {
        let load_time = clock.now_millis();
        info!(load_time_ms = %load_time, "captured process load time");

        SnapshotClockReader { load_time }
    }

    /// Process-wide instance, created on first access.
    ///
    /// Every later call returns the same instance: one clock sample and one
    /// diagnostic line per process lifetime, however many times callers
    /// re-initialize.
    pub fn global() -> &'static SnapshotClockReader {
        READER.get_or_init(|| SnapshotClockReader::new(&SystemClock::new()))
    }

    /// Timestamp captured at construction. Idempotent across calls.
    pub fn load_time(&self) -> Timestamp {
        self.load_time
    }
}
