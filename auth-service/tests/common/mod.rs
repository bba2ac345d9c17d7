use std::sync::Arc;

use auth::Authenticator;
use auth_service::config::AuthConfig;
use auth_service::config::Config;
use auth_service::credentials::models::UserRecord;
use auth_service::credentials::service::AuthService;
use auth_service::repositories::InMemoryCredentialStore;

pub const SIGNING_KEY: &str = "integration_test_signing_key_32b!!";

/// Service wired the way a host process wires it, over an in-memory store
pub struct TestApp {
    pub service: AuthService<InMemoryCredentialStore>,
    pub store: Arc<InMemoryCredentialStore>,
    pub authenticator: Arc<Authenticator>,
}

impl TestApp {
    pub fn spawn() -> Self {
        Self::spawn_with_ttl(3600)
    }

    pub fn spawn_with_ttl(token_ttl_seconds: i64) -> Self {
        let config = Config {
            auth: AuthConfig {
                signing_key: SIGNING_KEY.to_string(),
                token_ttl_seconds,
            },
        };
        config.auth.validate().expect("Invalid test configuration");

        let authenticator = Arc::new(Authenticator::new(
            config.auth.signing_key.as_bytes(),
            config.auth.token_ttl(),
        ));
        let store = Arc::new(InMemoryCredentialStore::new());
        let service = AuthService::new(Arc::clone(&store), Arc::clone(&authenticator));

        Self {
            service,
            store,
            authenticator,
        }
    }

    /// Store a user whose password hash is produced by the real hashing scheme
    pub fn register(&self, identifier: &str, password: &str, role: &str) {
        let password_hash = self
            .authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        self.store
            .upsert(UserRecord {
                identifier: identifier.to_string(),
                password_hash,
                role: role.to_string(),
            })
            .expect("Failed to store user");
    }
}
