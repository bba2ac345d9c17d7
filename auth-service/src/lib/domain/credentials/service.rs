use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;

use crate::credentials::errors::AuthenticationFailure;
use crate::credentials::models::Credentials;
use crate::credentials::ports::AuthServicePort;
use crate::credentials::ports::CredentialStore;

/// Domain service implementation for authentication.
///
/// Stateless per request: shares only the store handle and the authenticator,
/// whose signing key is immutable after construction.
pub struct AuthService<CS>
where
    CS: CredentialStore,
{
    store: Arc<CS>,
    authenticator: Arc<Authenticator>,
}

impl<CS> AuthService<CS>
where
    CS: CredentialStore,
{
    /// Create a new authentication service with injected dependencies.
    ///
    /// # Arguments
    /// * `store` - Credential lookup implementation
    /// * `authenticator` - Password verification and token issuance
    pub fn new(store: Arc<CS>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            store,
            authenticator,
        }
    }

    /// Run the lookup, verify and issue gates, keeping the rejection reason.
    ///
    /// # Errors
    /// * `LookupMiss` - No user with this identifier
    /// * `LookupFailed` - Store returned an error
    /// * `PasswordMismatch` - Secret does not match the stored hash
    /// * `IssuanceFailed` - Token could not be signed
    pub async fn try_authenticate(
        &self,
        credentials: &Credentials,
    ) -> Result<String, AuthenticationFailure> {
        let user = match self
            .store
            .find_by_identifier(&credentials.identifier)
            .await?
        {
            Some(user) => user,
            None => {
                self.authenticator.reject_unknown_user(&credentials.secret);
                return Err(AuthenticationFailure::LookupMiss);
            }
        };

        self.authenticator
            .authenticate(
                &credentials.secret,
                &user.password_hash,
                &user.identifier,
                &user.role,
            )
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => AuthenticationFailure::PasswordMismatch,
                AuthenticationError::Token(err) => {
                    AuthenticationFailure::IssuanceFailed(err.to_string())
                }
            })
    }
}

#[async_trait]
impl<CS> AuthServicePort for AuthService<CS>
where
    CS: CredentialStore,
{
    async fn authenticate(&self, credentials: &Credentials) -> Option<String> {
        match self.try_authenticate(credentials).await {
            Ok(token) => {
                tracing::info!(identifier = %credentials.identifier, "Access token issued");
                Some(token)
            }
            Err(
                e @ (AuthenticationFailure::LookupFailed(_)
                | AuthenticationFailure::IssuanceFailed(_)),
            ) => {
                tracing::error!(
                    identifier = %credentials.identifier,
                    error = %e,
                    "Authentication rejected"
                );
                None
            }
            Err(e) => {
                tracing::debug!(
                    identifier = %credentials.identifier,
                    reason = %e,
                    "Authentication rejected"
                );
                None
            }
        }
    }

    fn validate(&self, token: &str) -> bool {
        self.authenticator.validate_token(token)
    }
}
