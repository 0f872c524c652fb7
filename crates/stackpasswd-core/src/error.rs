//! Error types for stackpasswd core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps every
//! variant to a single failure exit code.

use thiserror::Error;

/// Result type alias for stackpasswd operations.
pub type Result<T> = std::result::Result<T, PasswdError>;

/// Core error type for stackpasswd operations.
#[derive(Debug, Error)]
pub enum PasswdError {
    /// Reading from the terminal failed
    #[error("Password error: {0}")]
    Input(String),

    /// The random source could not supply a salt
    #[error("Error generating salt: {0}")]
    Entropy(String),

    /// Parameters or input rejected before derivation
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<getrandom::Error> for PasswdError {
    fn from(err: getrandom::Error) -> Self {
        PasswdError::Entropy(err.to_string())
    }
}
