use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::credentials::errors::CredentialStoreError;
use crate::credentials::models::UserRecord;
use crate::credentials::ports::CredentialStore;

/// Process-local credential store keyed by identifier.
///
/// Stands in for the real user store in tests and local development.
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    users: RwLock<HashMap<String, UserRecord>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the record for `record.identifier`.
    ///
    /// # Errors
    /// * `Unavailable` - Lock poisoned by a panicking writer
    pub fn upsert(&self, record: UserRecord) -> Result<(), CredentialStoreError> {
        let mut users = self
            .users
            .write()
            .map_err(|e| CredentialStoreError::Unavailable(e.to_string()))?;

        users.insert(record.identifier.clone(), record);
        Ok(())
    }

    /// Remove the record for `identifier`, returning it if present.
    ///
    /// # Errors
    /// * `Unavailable` - Lock poisoned by a panicking writer
    pub fn remove(&self, identifier: &str) -> Result<Option<UserRecord>, CredentialStoreError> {
        let mut users = self
            .users
            .write()
            .map_err(|e| CredentialStoreError::Unavailable(e.to_string()))?;

        Ok(users.remove(identifier))
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<UserRecord>, CredentialStoreError> {
        let users = self
            .users
            .read()
            .map_err(|e| CredentialStoreError::Unavailable(e.to_string()))?;

        Ok(users.get(identifier).cloned())
    }
}
