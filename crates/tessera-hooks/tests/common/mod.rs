//! Shared test helpers.

use tracing_subscriber::EnvFilter;

/// Initializes tracing once per test binary; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
