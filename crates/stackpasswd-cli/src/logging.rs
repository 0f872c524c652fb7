//! Tracing setup. Logs go to stderr so stdout carries only the record.

use tracing_subscriber::EnvFilter;

use crate::constants::{DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER};

/// Pick the filter: `RUST_LOG` wins, then `--verbose`, then the quiet default.
pub fn log_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
