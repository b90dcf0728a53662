//! Argon2 password hashing
//!
//! Hashing and verification are CPU-bound; the async entry points run them
//! on tokio's blocking pool so request workers stay free.

use anyhow::{anyhow, Result};
use argon2::password_hash::{PasswordHash, SaltString};
use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use once_cell::sync::Lazy;

/// Hash compared against on unknown-email sign-ins so both paths cost one verify
static DUMMY_HASH: Lazy<Option<String>> =
    Lazy::new(|| hash_password("carepath-unknown-account").ok());

/// Hash a password into a PHC string with a random salt
pub fn hash_password(password: &str) -> Result<String> {
    let mut salt_bytes = [0u8; 16];
    getrandom::getrandom(&mut salt_bytes).map_err(|e| anyhow!(e.to_string()))?;
    let salt = SaltString::encode_b64(&salt_bytes).map_err(|e| anyhow!(e.to_string()))?;

    let phc = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow!(e.to_string()))?
        .to_string();

    Ok(phc)
}

/// Check a password against a stored PHC string. Unparseable hashes never match.
pub fn verify_password(hash: &str, password: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            tracing::warn!(error = %e, "Stored password hash is not a PHC string");
            false
        }
    }
}

/// Check a sign-in attempt. With no stored hash the password is still run
/// against [`DUMMY_HASH`] and the result is always `false`.
pub fn verify_sign_in(stored_hash: Option<&str>, password: &str) -> bool {
    match stored_hash {
        Some(hash) => verify_password(hash, password),
        None => {
            if let Some(dummy) = DUMMY_HASH.as_deref() {
                verify_password(dummy, password);
            }
            false
        }
    }
}

/// [`hash_password`] on the blocking pool
pub async fn hash_password_async(password: String) -> Result<String> {
    tokio::task::spawn_blocking(move || hash_password(&password)).await?
}

/// [`verify_sign_in`] on the blocking pool
pub async fn verify_sign_in_async(stored_hash: Option<String>, password: String) -> Result<bool> {
    let matched =
        tokio::task::spawn_blocking(move || verify_sign_in(stored_hash.as_deref(), &password))
            .await?;
    Ok(matched)
}
