use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// Well-formed hash with default Argon2id parameters that no password reproduces.
const UNMATCHABLE_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// One-way salted password hashing and verification (Argon2id).
///
/// Hashes are PHC strings, so algorithm, parameters and salt travel with the
/// hash and verification needs nothing but the stored string.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher;

impl PasswordHasher {
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password with a fresh random salt.
    ///
    /// # Errors
    /// * `HashingFailed` - Argon2 rejected the input or parameters
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored PHC hash.
    ///
    /// The derived output is compared in constant time by `password-hash`.
    ///
    /// # Errors
    /// * `VerificationFailed` - Stored hash cannot be parsed
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| PasswordError::VerificationFailed(e.to_string()))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Returns true iff `password` reproduces `hash`.
    ///
    /// A malformed stored hash is a non-match.
    pub fn matches(&self, password: &str, hash: &str) -> bool {
        match self.verify(password, hash) {
            Ok(is_valid) => is_valid,
            Err(e) => {
                tracing::warn!(error = %e, "Stored password hash is malformed, treating as mismatch");
                false
            }
        }
    }

    /// Spend the same Argon2 work as `verify` on a user that does not exist.
    ///
    /// Keeps an unknown identifier from answering faster than a wrong password.
    pub fn verify_unknown(&self, password: &str) {
        let _ = self.verify(password, UNMATCHABLE_HASH);
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
