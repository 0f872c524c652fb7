//! # Stackpasswd Core
//!
//! Core library for stackpasswd - derives salted PBKDF2 password hashes in the
//! `salt:key:iterations` stored-credential format.
//!
//! This crate holds the whole derivation flow independent of any terminal.
//! The terminal and the random source are traits so the flow can be driven
//! from tests.
//!
//! ## Architecture
//!
//! - **params**: Fixed KDF parameters (iterations, key and salt length)
//! - **password**: Masked password entry with confirmation loop
//! - **salt**: Salt generation from a secure random source
//! - **kdf**: PBKDF2-HMAC-SHA1 key derivation
//! - **record**: Text encoding of the output line
//! - **generate**: The prompt → salt → derive → record sequence

pub mod error;
pub mod generate;
pub mod kdf;
pub mod params;
pub mod password;
pub mod record;
pub mod salt;

pub use error::{PasswdError, Result};
pub use generate::generate_record;
pub use kdf::{derive_key, DerivedKey};
pub use params::KdfParams;
pub use password::{read_confirmed_password, Password, PasswordTerminal};
pub use record::CredentialRecord;
pub use salt::{generate_salt, OsRandom, Salt, SaltSource};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
