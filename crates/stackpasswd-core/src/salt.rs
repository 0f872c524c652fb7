//! Salt generation.
//!
//! Salts come from a [`SaltSource`]. Production code uses [`OsRandom`],
//! which reads the operating system's CSPRNG through `getrandom`.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{PasswdError, Result};

/// A source of cryptographically secure random bytes.
pub trait SaltSource {
    /// Fill `buf` completely or fail.
    fn fill(&mut self, buf: &mut [u8]) -> Result<()>;
}

/// The operating system random source.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl SaltSource for OsRandom {
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        getrandom::getrandom(buf)?;
        Ok(())
    }
}

/// Random salt bytes for one derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Salt(Vec<u8>);

impl Salt {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Standard base64 with padding.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.0)
    }
}

/// Generate a salt of `len` bytes from `source`.
///
/// Fails with [`PasswdError::Entropy`] if the source cannot supply the bytes.
pub fn generate_salt<S: SaltSource + ?Sized>(source: &mut S, len: usize) -> Result<Salt> {
    if len == 0 {
        return Err(PasswdError::InvalidInput(
            "Salt length must be greater than zero".to_string(),
        ));
    }

    let mut bytes = vec![0u8; len];
    source.fill(&mut bytes)?;
    tracing::debug!(len, "generated salt");
    Ok(Salt(bytes))
}
