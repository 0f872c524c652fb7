//! Fixed key derivation parameters.

/// PBKDF2 iteration count written into every record.
pub const ITERATIONS: u32 = 100_000;

/// Length of the derived key in bytes.
pub const KEY_LENGTH: usize = 64;

/// Length of the random salt in bytes.
pub const SALT_LENGTH: usize = 64;

/// Parameters for one derivation.
///
/// Instances are immutable; the program only ever uses [`KdfParams::DEFAULT`].
/// Other values exist so tests can run cheap derivations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfParams {
    pub iterations: u32,
    pub key_len: usize,
    pub salt_len: usize,
}

impl KdfParams {
    pub const DEFAULT: KdfParams = KdfParams {
        iterations: ITERATIONS,
        key_len: KEY_LENGTH,
        salt_len: SALT_LENGTH,
    };
}

impl Default for KdfParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}
