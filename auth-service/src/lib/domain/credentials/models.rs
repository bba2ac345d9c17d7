use std::fmt;

/// Login credentials presented for a single authentication attempt.
///
/// The secret is plaintext and lives only for the request; `Debug` never
/// renders it.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub identifier: String,
    pub secret: String,
}

impl Credentials {
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Stored user record as returned by the credential store.
///
/// Read-only to authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// Unique key, e.g. email
    pub identifier: String,
    /// PHC string produced by the store's one-way salted hashing scheme
    pub password_hash: String,
    /// Single role label, embedded in issued tokens
    pub role: String,
}
