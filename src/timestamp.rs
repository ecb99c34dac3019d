//! Millisecond-precision wall-clock timestamps.

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Milliseconds elapsed since the Unix epoch (1970-01-01T00:00:00Z).
///
/// This is wall-clock time: it can jump backward when the system clock is
/// adjusted (NTP sync, manual change). Callers needing a monotonic counter
/// should use [`std::time::Instant`] instead.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Wraps a raw millisecond count.
    pub const fn from_millis(millis: u64) -> Self {
        Timestamp(millis)
    }

    /// Raw millisecond count.
    pub const fn as_millis(self) -> u64 {
        self.0
    }

    /// Converts to an UTC date-time.
    ///
    /// Returns `None` when the value falls outside the range `chrono` can
    /// represent.
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        i64::try_from(self.0)
            .ok()
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Timestamp {
    fn from(millis: u64) -> Self {
        Timestamp(millis)
    }
}

impl From<Timestamp> for u64 {
    fn from(timestamp: Timestamp) -> Self {
        timestamp.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MILLIS: u64 = 1_700_000_000_000;

    #[test]
    fn displays_as_decimal_millis() {
        assert_eq!(Timestamp::from_millis(MILLIS).to_string(), "1700000000000");
        assert_eq!(Timestamp::from_millis(0).to_string(), "0");
    }

    #[test]
    fn orders_by_millis() {
        let earlier = Timestamp::from_millis(MILLIS);
        let later = Timestamp::from_millis(MILLIS + 50);
        assert!(earlier < later);
        assert_eq!(earlier, Timestamp::from_millis(MILLIS));
    }

    #[test]
    fn converts_to_utc_datetime() {
        let date = Timestamp::from_millis(MILLIS).to_datetime().unwrap();
        assert_eq!(date.to_rfc3339(), "2023-11-14T22:13:20+00:00");
    }

    #[test]
    fn out_of_range_conversion_is_none() {
        assert!(Timestamp::from_millis(u64::MAX).to_datetime().is_none());
    }

    #[test]
    fn serializes_as_bare_integer() {
        let timestamp = Timestamp::from_millis(MILLIS);
        assert_eq!(
            serde_json::to_string(&timestamp).unwrap(),
            "1700000000000"
        );

        let parsed: Timestamp =
            serde_json::from_str("1700000000000").unwrap();
        assert_eq!(parsed, timestamp);
    }
}
