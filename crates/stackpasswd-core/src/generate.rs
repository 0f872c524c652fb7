//! The full derivation sequence: password, salt, key, record.

use crate::error::Result;
use crate::kdf::derive_key;
use crate::params::KdfParams;
use crate::password::{read_confirmed_password, PasswordTerminal};
use crate::record::CredentialRecord;
use crate::salt::{generate_salt, SaltSource};

/// Read a confirmed password, generate a salt and derive the record.
///
/// Nothing is printed here; callers write the record only on success.
pub fn generate_record<T, S>(
    terminal: &mut T,
    salt_source: &mut S,
    params: &KdfParams,
) -> Result<CredentialRecord>
where
    T: PasswordTerminal + ?Sized,
    S: SaltSource + ?Sized,
{
    let password = read_confirmed_password(terminal)?;
    let salt = generate_salt(salt_source, params.salt_len)?;
    let key = derive_key(password.as_bytes(), salt.as_bytes(), params)?;
    Ok(CredentialRecord::new(&salt, &key, params))
}
