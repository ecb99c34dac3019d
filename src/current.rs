//! On-demand asynchronous reads of the wall clock.

use std::fmt;
use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::timestamp::Timestamp;

/// Reads the current wall-clock time through a deferred contract.
///
/// Every invocation of [`AsyncClockReader::get_current_time`] produces a
/// future that resolves exactly once with a fresh [`Timestamp`]. The reader
/// keeps no mutable state, so any number of invocations can be driven
/// concurrently.
pub struct AsyncClockReader {
    clock: Arc<dyn Clock>,
}

impl AsyncClockReader {
    /// Create a reader backed by the given time source.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Get the current wall-clock time.
    ///
    /// The underlying clock sample is effectively instantaneous, so the
    /// returned future resolves on its first poll; the asynchronous shape is
    /// the contract, not a latency hint. Completion order between concurrent
    /// invocations is unspecified and must not be relied upon.
    pub async fn get_current_time(&self) -> Timestamp {
        self.clock.now_millis()
    }
}

impl Default for AsyncClockReader {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock::new()))
    }
}

impl fmt::Debug for AsyncClockReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncClockReader").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    #[tokio::test]
    async fn sequential_reads_do_not_go_backward() {
        let reader = AsyncClockReader::default();

        let first = reader.get_current_time().await;
        let second = reader.get_current_time().await;
        assert!(second >= first);
    }

    #[tokio::test]
    async fn concurrent_reads_complete_independently() {
        let reader = AsyncClockReader::default();

        // Neither future is awaited before the other is created.
        let (first, second) =
            tokio::join!(reader.get_current_time(), reader.get_current_time());
        assert!(first.as_millis() > 0);
        assert!(second.as_millis() > 0);
    }

    #[tokio::test]
    async fn reads_come_from_the_injected_clock() {
        let reader = AsyncClockReader::new(Arc::new(FixedClock::new(
            Timestamp::from_millis(1_700_000_000_000),
        )));

        let time = reader.get_current_time().await;
        assert_eq!(time.as_millis(), 1_700_000_000_000);
    }
}
