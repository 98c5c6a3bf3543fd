//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

/// Install the global tracing subscriber using the configured level filter
/// and output format ("pretty" or "json").
///
/// Safe to call more than once — later calls are no-ops, which keeps tests
/// that each try to initialize logging from panicking.
pub fn init(config: &AppConfig) {
    let filter = EnvFilter::try_new(&config.log).unwrap_or_else(|_| EnvFilter::new("info"));
    let result = if config.log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .try_init()
    };
    // Already-initialized is the only expected failure; ignore it.
    let _ = result;
}
