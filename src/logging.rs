//! Logging setup.
//!
//! The library only emits `tracing` events; installing a subscriber is
//! left to binaries and tests.

use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber.
///
/// # Environment
/// - `RUST_LOG`: filter directives (default: `info`),
///   e.g. `RUST_LOG=u_workout=debug`.
///
/// Does nothing if a subscriber is already installed.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Installs a debug-level subscriber writing to the test harness.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
