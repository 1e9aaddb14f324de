//! Tracing initialization for host binaries and tests.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber, filtered by `TESTGATE_LOG`
/// (defaults to `info`). Later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("TESTGATE_LOG")
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
