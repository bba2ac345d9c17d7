use thiserror::Error;

/// Error reported by a credential store adapter.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CredentialStoreError {
    #[error("Credential store unavailable: {0}")]
    Unavailable(String),
}

/// Reason an authentication attempt was rejected.
///
/// Internal only: callers of the service see every variant as the same
/// empty result, so account existence cannot be probed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthenticationFailure {
    #[error("No user with this identifier")]
    LookupMiss,

    #[error("User lookup failed: {0}")]
    LookupFailed(#[from] CredentialStoreError),

    #[error("Password does not match")]
    PasswordMismatch,

    #[error("Token issuance failed: {0}")]
    IssuanceFailed(String),
}
