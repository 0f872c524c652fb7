//! Masked password input on the controlling terminal.

use std::fmt;
use std::io::{self, IsTerminal, Write};

use console::Term;
use dialoguer::theme::Theme;
use dialoguer::Password;
use zeroize::Zeroizing;

use stackpasswd_core::PasswordTerminal;

/// Writes prompts exactly as given, without the `: ` suffix of the default theme.
struct VerbatimTheme;

impl Theme for VerbatimTheme {
    fn format_password_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        write!(f, "{}", prompt)
    }
}

/// Stream that carries prompts and retry notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PromptStream {
    Stderr,
    Stdout,
}

impl PromptStream {
    /// Prefer stderr so stdout keeps only the record; fall back to stdout
    /// when stderr is redirected.
    fn select(stderr_is_tty: bool, stdout_is_tty: bool) -> Option<Self> {
        if stderr_is_tty {
            Some(PromptStream::Stderr)
        } else if stdout_is_tty {
            Some(PromptStream::Stdout)
        } else {
            None
        }
    }

    fn term(self) -> Term {
        match self {
            PromptStream::Stderr => Term::stderr(),
            PromptStream::Stdout => Term::stdout(),
        }
    }
}

/// Terminal backed by `dialoguer`.
///
/// Input requires stdin to be a TTY. Prompts go to stderr, or to stdout when
/// only stdout is a TTY.
pub struct DialoguerTerminal {
    stdin_is_tty: bool,
    prompt_stream: Option<PromptStream>,
}

impl DialoguerTerminal {
    pub fn new() -> Self {
        Self {
            stdin_is_tty: io::stdin().is_terminal(),
            prompt_stream: PromptStream::select(
                io::stderr().is_terminal(),
                io::stdout().is_terminal(),
            ),
        }
    }

    fn prompt_term(&self) -> io::Result<Term> {
        match (self.stdin_is_tty, self.prompt_stream) {
            (true, Some(stream)) => Ok(stream.term()),
            _ => Err(io::Error::new(
                io::ErrorKind::NotConnected,
                "no TTY available to read the password from",
            )),
        }
    }
}

impl PasswordTerminal for DialoguerTerminal {
    fn read_masked(&mut self, prompt: &str) -> io::Result<Zeroizing<Vec<u8>>> {
        let term = self.prompt_term()?;

        Password::with_theme(&VerbatimTheme)
            .with_prompt(prompt)
            .allow_empty_password(true)
            .report(false)
            .interact_on(&term)
            .map(|value| Zeroizing::new(value.into_bytes()))
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
    }

    fn notify(&mut self, message: &str) {
        match self.prompt_stream {
            Some(PromptStream::Stdout) => {
                let mut out = io::stdout().lock();
                let _ = writeln!(out, "{}", message);
                let _ = out.flush();
            }
            _ => eprintln!("{}", message),
        }
    }
}
