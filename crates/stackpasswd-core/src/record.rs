//! The output record.

use std::fmt;

use serde::Serialize;

use crate::kdf::DerivedKey;
use crate::params::KdfParams;
use crate::salt::Salt;

/// The stored-credential line: base64 salt, base64 key and iteration count.
///
/// `Display` renders `<salt>:<key>:<iterations>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CredentialRecord {
    pub salt: String,
    pub key: String,
    pub iterations: u32,
}

impl CredentialRecord {
    pub fn new(salt: &Salt, key: &DerivedKey, params: &KdfParams) -> Self {
        Self {
            salt: salt.to_base64(),
            key: key.to_base64(),
            iterations: params.iterations,
        }
    }
}

impl fmt::Display for CredentialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.salt, self.key, self.iterations)
    }
}
