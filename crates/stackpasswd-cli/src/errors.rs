//! CLI error types for structured error handling.
//!
//! Core errors are mapped onto these at the top of `main`, which prints the
//! message and exits.

use std::fmt;

use stackpasswd_core::PasswdError;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Terminal input could not be read
    InputFailed(String),

    /// The random source failed
    EntropyFailed(String),

    /// Anything else: derivation, output, completions
    Internal(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InputFailed(message) => write!(f, "password error: {}", message),
            CliError::EntropyFailed(message) => {
                write!(f, "error generating salt: {}", message)
            }
            CliError::Internal(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl From<PasswdError> for CliError {
    fn from(err: PasswdError) -> Self {
        match err {
            PasswdError::Input(message) => CliError::InputFailed(message),
            PasswdError::Entropy(message) => CliError::EntropyFailed(message),
            other => CliError::Internal(other.to_string()),
        }
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<PasswdError>() {
            Ok(core) => core.into(),
            Err(err) => CliError::Internal(format!("{:#}", err)),
        }
    }
}

impl CliError {
    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        use super::constants::exit_codes;
        match self {
            CliError::InputFailed(_) | CliError::EntropyFailed(_) | CliError::Internal(_) => {
                exit_codes::FAILURE
            }
        }
    }

    /// Print error message to stderr and exit with appropriate code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);
        std::process::exit(self.exit_code())
    }
}
