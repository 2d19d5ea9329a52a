//! Logging Infrastructure

use tracing_subscriber::EnvFilter;

/// Initialize the logger
///
/// `filter` uses tracing env-filter syntax; `DEPOT_LOG` takes precedence
/// when set.
pub fn init_logger(filter: &str) {
    let filter = EnvFilter::try_from_env("DEPOT_LOG")
        .unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_target(false)
        .init();
}
