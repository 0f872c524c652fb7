//! Key derivation using PBKDF2-HMAC-SHA1.
//!
//! The stored-credential format expects PBKDF2 with HMAC-SHA1 as the PRF.
//! SHA-1 is weak as a plain hash but remains sound as an HMAC PRF.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use sha1::Sha1;
use zeroize::ZeroizeOnDrop;

use crate::error::{PasswdError, Result};
use crate::params::KdfParams;

/// A key derived from a password.
///
/// Key material is zeroized from memory when dropped.
#[derive(Clone, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: Vec<u8>,
}

impl DerivedKey {
    /// Get a reference to the raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.key
    }

    /// Standard base64 with padding.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.key)
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Derive a key from `password` and `salt` with PBKDF2-HMAC-SHA1.
///
/// Same password, salt and parameters always produce the same key.
///
/// # Examples
///
/// ```
/// use stackpasswd_core::{derive_key, KdfParams};
///
/// let params = KdfParams { iterations: 1, key_len: 20, salt_len: 4 };
/// let key = derive_key(b"password", b"salt", &params).unwrap();
/// assert_eq!(key.as_bytes().len(), 20);
/// ```
pub fn derive_key(password: &[u8], salt: &[u8], params: &KdfParams) -> Result<DerivedKey> {
    if password.is_empty() {
        return Err(PasswdError::InvalidInput(
            "Password cannot be empty".to_string(),
        ));
    }

    if params.iterations == 0 {
        return Err(PasswdError::InvalidInput(
            "Iteration count must be greater than zero".to_string(),
        ));
    }

    if params.key_len == 0 {
        return Err(PasswdError::InvalidInput(
            "Key length must be greater than zero".to_string(),
        ));
    }

    let mut key = vec![0u8; params.key_len];
    pbkdf2::pbkdf2_hmac::<Sha1>(password, salt, params.iterations, &mut key);
    tracing::debug!(
        iterations = params.iterations,
        key_len = params.key_len,
        "derived key"
    );

    Ok(DerivedKey { key })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cheap_params(key_len: usize) -> KdfParams {
        KdfParams {
            iterations: 2,
            key_len,
            salt_len: 16,
        }
    }

    #[test]
    fn test_rfc6070_vector() {
        let params = KdfParams {
            iterations: 1,
            key_len: 20,
            salt_len: 4,
        };
        let key = derive_key(b"password", b"salt", &params).unwrap();
        assert_eq!(
            hex::encode(key.as_bytes()),
            "0c60c80f961f0e71f3a9b524af6012062fe037a6"
        );
    }

    #[test]
    fn test_key_derivation_deterministic() {
        let salt = [7u8; 16];
        let key1 = derive_key(b"test-password", &salt, &cheap_params(64)).unwrap();
        let key2 = derive_key(b"test-password", &salt, &cheap_params(64)).unwrap();
        assert_eq!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_salt_different_key() {
        let key1 = derive_key(b"test-password", &[1u8; 16], &cheap_params(64)).unwrap();
        let key2 = derive_key(b"test-password", &[2u8; 16], &cheap_params(64)).unwrap();
        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_password_different_key() {
        let salt = [3u8; 16];
        let key1 = derive_key(b"password-one", &salt, &cheap_params(64)).unwrap();
        let key2 = derive_key(b"password-two", &salt, &cheap_params(64)).unwrap();
        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_key_length() {
        let key = derive_key(b"test-password", &[0u8; 16], &cheap_params(64)).unwrap();
        assert_eq!(key.as_bytes().len(), 64);
    }

    #[test]
    fn test_empty_password_rejected() {
        let result = derive_key(b"", &[0u8; 16], &cheap_params(64));
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Password cannot be empty"));
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let params = KdfParams {
            iterations: 0,
            ..cheap_params(64)
        };
        let result = derive_key(b"test-password", &[0u8; 16], &params);
        assert!(matches!(result, Err(PasswdError::InvalidInput(_))));
    }

    #[test]
    fn test_derived_key_debug_redacts() {
        let key = derive_key(b"test-password", &[0u8; 16], &cheap_params(64)).unwrap();
        let debug_output = format!("{:?}", key);
        assert!(debug_output.contains("REDACTED"));

        let key_hex = hex::encode(&key.as_bytes()[..4]);
        assert!(!debug_output.contains(&key_hex));
    }
}
