#![forbid(unsafe_code)]
#![deny(
    dead_code,
    unused_imports,
    unused_mut,
    missing_docs,
    missing_debug_implementations
)]

//! Chrona gives asynchronous services a small, predictable view of the wall
//! clock: on-demand reads through a deferred contract, and a snapshot of the
//! time the process came up, captured and logged exactly once.

pub mod clock;
pub mod config;
pub mod current;
pub mod error;
pub mod snapshot;
pub mod telemetry;
pub mod timestamp;

pub use clock::{Clock, SystemClock};
pub use current::AsyncClockReader;
pub use snapshot::SnapshotClockReader;
pub use timestamp::Timestamp;
