//! Credential hashing and verification.
//!
//! Stored credentials come in two kinds: Argon2 PHC hashes for every
//! account written by this codebase, and legacy plaintext values carried
//! over from the pre-hashing data set. The kind is tagged per record by
//! inspecting the stored string; the plaintext branch exists only as a
//! migration affordance and is never produced by new writes.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use subtle::ConstantTimeEq;

use crate::error::AppError;

/// The kind of credential stored for a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoredCredential<'a> {
    /// Argon2 PHC string (`$argon2id$...`).
    Argon2(&'a str),
    /// Pre-migration plaintext value.
    LegacyPlaintext(&'a str),
}

impl<'a> StoredCredential<'a> {
    /// Classify a stored credential string by its format.
    pub fn from_stored(stored: &'a str) -> Self {
        if stored.starts_with("$argon2") {
            StoredCredential::Argon2(stored)
        } else {
            StoredCredential::LegacyPlaintext(stored)
        }
    }
}

/// Check a supplied password against a stored credential.
///
/// Hashed records go through Argon2 verification; legacy plaintext
/// records are compared in constant time.
pub fn verify_password(stored: &str, supplied: &str) -> bool {
    match StoredCredential::from_stored(stored) {
        StoredCredential::Argon2(hash) => match PasswordHash::new(hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(supplied.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        },
        StoredCredential::LegacyPlaintext(plain) => {
            plain.as_bytes().ct_eq(supplied.as_bytes()).into()
        }
    }
}

/// Hash a password with Argon2id and a fresh random salt.
///
/// Returns the PHC-format string to store. Every new or updated
/// credential must pass through here.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Generic(format!("Password hashing failed: {e}")))?;
    Ok(hash.to_string())
}
