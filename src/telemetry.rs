//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Installs a stdout subscriber printing timestamp, level and message.
///
/// The level filter comes from `RUST_LOG`, defaulting to `info`. Calling this
/// again after a subscriber is installed does nothing.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .with_target(false)
        .try_init();
}
