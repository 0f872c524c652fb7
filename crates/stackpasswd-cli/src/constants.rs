//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// Every fatal error exits with the same status so scripts only need to
/// check for non-zero.
pub mod exit_codes {
    /// Any fatal error (terminal read, entropy, derivation, output).
    pub const FAILURE: i32 = 1;
}

/// Log filter used with `--verbose` when `RUST_LOG` is unset.
pub const VERBOSE_LOG_FILTER: &str = "stackpasswd=debug,stackpasswd_core=debug,warn";

/// Log filter used by default when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";
