//! Masked password entry with confirmation.
//!
//! The terminal is a [`PasswordTerminal`] so the retry loop runs the same way
//! against a real TTY and a scripted one.

use std::io;

use zeroize::Zeroizing;

use crate::error::{PasswdError, Result};

/// Prompt for the first entry.
pub const PASSWORD_PROMPT: &str = "Password: ";

/// Prompt for the confirmation entry.
pub const CONFIRM_PROMPT: &str = "Confirm:  ";

/// Shown when the two entries differ.
pub const MISMATCH_MESSAGE: &str = "Password confirmation failed.  Please try again.";

/// Shown when both entries are empty.
pub const EMPTY_MESSAGE: &str = "Password cannot be empty.  Please try again.";

/// Terminal capability used by the confirmation loop.
pub trait PasswordTerminal {
    /// Show `prompt` and read one line without echoing it.
    fn read_masked(&mut self, prompt: &str) -> io::Result<Zeroizing<Vec<u8>>>;

    /// Show a message to the user between attempts.
    fn notify(&mut self, message: &str);
}

/// A confirmed, non-empty password. Zeroized on drop.
pub struct Password(Zeroizing<Vec<u8>>);

impl Password {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Password").field(&"[REDACTED]").finish()
    }
}

/// Read a password twice until both entries match and are non-empty.
///
/// There is no attempt limit. A read failure on either prompt aborts with
/// [`PasswdError::Input`].
pub fn read_confirmed_password<T: PasswordTerminal + ?Sized>(terminal: &mut T) -> Result<Password> {
    let mut attempt: u32 = 0;

    loop {
        attempt += 1;
        let first = terminal
            .read_masked(PASSWORD_PROMPT)
            .map_err(|e| PasswdError::Input(e.to_string()))?;
        let second = terminal
            .read_masked(CONFIRM_PROMPT)
            .map_err(|e| PasswdError::Input(e.to_string()))?;

        if first.as_slice() != second.as_slice() {
            tracing::debug!(attempt, "password confirmation mismatch");
            terminal.notify(MISMATCH_MESSAGE);
            continue;
        }

        if first.is_empty() {
            tracing::debug!(attempt, "empty password rejected");
            terminal.notify(EMPTY_MESSAGE);
            continue;
        }

        tracing::debug!(attempt, "password confirmed");
        return Ok(Password(first));
    }
}
