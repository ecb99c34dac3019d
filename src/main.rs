//! Chrona entrypoint: report the load time and the current time.

use chrona::config::Configuration;
use chrona::{AsyncClockReader, SnapshotClockReader, telemetry};

#[tokio::main]
async fn main() {
    telemetry::init();

    let config = match Configuration::default().read() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "cannot read configuration");
            std::process::exit(1);
        },
    };

    let snapshot = SnapshotClockReader::global();
    let reader = AsyncClockReader::default();
    let now = reader.get_current_time().await;

    if config.rfc3339 {
        let started = snapshot
            .load_time()
            .to_datetime()
            .map(|date| date.to_rfc3339());
        let current = now.to_datetime().map(|date| date.to_rfc3339());

        tracing::info!(
            name = %config.name,
            started = ?started,
            current = ?current,
            "clock service ready"
        );
    } else {
        tracing::info!(
            name = %config.name,
            load_time_ms = %snapshot.load_time(),
            now_ms = %now,
            "clock service ready"
        );
    }
}
