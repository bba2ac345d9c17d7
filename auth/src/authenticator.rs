use chrono::Duration;

use crate::jwt::Claims;
use crate::jwt::TokenCodec;
use crate::jwt::TokenError;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token issuance.
///
/// Operates on a user record that has already been looked up; finding the
/// record is the caller's concern.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_codec: TokenCodec,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `signing_key` - Process-wide secret used to sign and verify tokens
    /// * `token_ttl` - Lifetime of issued tokens
    pub fn new(signing_key: &[u8], token_ttl: Duration) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_codec: TokenCodec::new(signing_key, token_ttl),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a password and issue a token for `subject` / `role`.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject` - Identifier embedded as the token subject
    /// * `role` - Role label embedded in the token
    ///
    /// # Returns
    /// Signed access token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match, or the stored hash is malformed
    /// * `Token` - Token issuance failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &str,
        role: &str,
    ) -> Result<String, AuthenticationError> {
        if !self.password_hasher.matches(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.token_codec.issue(subject, role)?)
    }

    /// Burn password-verification time for an identifier with no user record.
    pub fn reject_unknown_user(&self, password: &str) {
        self.password_hasher.verify_unknown(password);
    }

    /// Verify a token and return its claims.
    ///
    /// # Errors
    /// * `TokenError` - Token is malformed, forged or expired
    pub fn verify_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.token_codec.verify(token)
    }

    /// True iff `token` is well formed, correctly signed and unexpired.
    pub fn validate_token(&self, token: &str) -> bool {
        match self.verify_token(token) {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!(error = %e, "Token rejected");
                false
            }
        }
    }
}
