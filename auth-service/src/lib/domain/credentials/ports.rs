use async_trait::async_trait;

use crate::credentials::errors::CredentialStoreError;
use crate::credentials::models::Credentials;
use crate::credentials::models::UserRecord;

/// Port for authentication operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Exchange credentials for an access token.
    ///
    /// # Arguments
    /// * `credentials` - Identifier and plaintext secret
    ///
    /// # Returns
    /// Signed access token, or `None` for any rejection. Unknown identifier,
    /// wrong secret and store failure are indistinguishable.
    async fn authenticate(&self, credentials: &Credentials) -> Option<String>;

    /// True iff `token` is well formed, correctly signed and unexpired.
    ///
    /// No claims are surfaced; callers needing them verify the token themselves.
    fn validate(&self, token: &str) -> bool;
}

/// Lookup of stored user records by identifier.
///
/// Storage and concurrency discipline belong to the implementation.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Retrieve the user record for `identifier`.
    ///
    /// # Returns
    /// Optional user record (None if not found)
    ///
    /// # Errors
    /// * `Unavailable` - Store could not be reached or answer
    async fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<UserRecord>, CredentialStoreError>;
}
