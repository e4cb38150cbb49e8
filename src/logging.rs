// ./src/logging.rs

use tracing_subscriber::{fmt, EnvFilter};

/// Default filter when neither `RUST_LOG` nor an explicit level is given.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Builds the filter: an explicit level wins, then `RUST_LOG`, then the default.
pub fn env_filter(level: Option<&str>) -> EnvFilter {
    match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL)),
    }
}

/// Installs the global tracing subscriber, writing to stderr.
///
/// Returns false if a subscriber was already installed.
pub fn init_tracing(level: Option<&str>) -> bool {
    fmt()
        .with_env_filter(env_filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
