use std::env;

use chrono::Duration;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

const DEFAULT_TOKEN_TTL_SECONDS: i64 = 60 * 60;
const MAX_TOKEN_TTL_SECONDS: i64 = 5 * 365 * 24 * 60 * 60;
const RECOMMENDED_SIGNING_KEY_BYTES: usize = 32;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub auth: AuthConfig,
}

#[derive(Deserialize, Clone)]
pub struct AuthConfig {
    pub signing_key: String,
    #[serde(default = "default_token_ttl_seconds")]
    pub token_ttl_seconds: i64,
}

fn default_token_ttl_seconds() -> i64 {
    DEFAULT_TOKEN_TTL_SECONDS
}

impl AuthConfig {
    /// Token lifetime, clamped to `0..=MAX_TOKEN_TTL_SECONDS`.
    ///
    /// Equal to `token_ttl_seconds` once `validate` has passed.
    pub fn token_ttl(&self) -> Duration {
        Duration::seconds(self.token_ttl_seconds.clamp(0, MAX_TOKEN_TTL_SECONDS))
    }

    /// Reject settings the token codec cannot work with.
    ///
    /// # Errors
    /// * `ConfigError::Message` - Signing key is empty, or TTL is negative or
    ///   longer than five years
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.signing_key.is_empty() {
            return Err(ConfigError::Message(
                "auth.signing_key must not be empty".to_string(),
            ));
        }

        if self.token_ttl_seconds < 0 {
            return Err(ConfigError::Message(format!(
                "auth.token_ttl_seconds must not be negative, got {}",
                self.token_ttl_seconds
            )));
        }

        if self.token_ttl_seconds > MAX_TOKEN_TTL_SECONDS {
            return Err(ConfigError::Message(format!(
                "auth.token_ttl_seconds must be at most {}, got {}",
                MAX_TOKEN_TTL_SECONDS, self.token_ttl_seconds
            )));
        }

        if self.signing_key.len() < RECOMMENDED_SIGNING_KEY_BYTES {
            tracing::warn!(
                length = self.signing_key.len(),
                recommended = RECOMMENDED_SIGNING_KEY_BYTES,
                "Signing key is shorter than recommended for HS256"
            );
        }

        Ok(())
    }
}

// The signing key must never end up in logs.
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("signing_key", &"<redacted>")
            .field("token_ttl_seconds", &self.token_ttl_seconds)
            .finish()
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (AUTH__SIGNING_KEY, AUTH__TOKEN_TTL_SECONDS)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: AUTH__SIGNING_KEY=... overrides auth.signing_key
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        Self::from_builder(configuration)
    }

    fn from_builder(configuration: ConfigBuilder) -> Result<Self, ConfigError> {
        let config: Config = configuration.try_deserialize()?;
        config.auth.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use config::FileFormat;

    use super::*;

    fn from_toml(source: &str) -> Result<Config, ConfigError> {
        let configuration = ConfigBuilder::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?;

        Config::from_builder(configuration)
    }

    #[test]
    fn test_load_full_config() {
        let config = from_toml(
            r#"
            [auth]
            signing_key = "a_signing_key_that_is_long_enough!"
            token_ttl_seconds = 900
            "#,
        )
        .expect("Failed to load config");

        assert_eq!(config.auth.signing_key, "a_signing_key_that_is_long_enough!");
        assert_eq!(config.auth.token_ttl(), Duration::minutes(15));
    }

    #[test]
    fn test_token_ttl_defaults_to_one_hour() {
        let config = from_toml(
            r#"
            [auth]
            signing_key = "a_signing_key_that_is_long_enough!"
            "#,
        )
        .expect("Failed to load config");

        assert_eq!(config.auth.token_ttl(), Duration::hours(1));
    }

    #[test]
    fn test_signing_key_is_required() {
        let result = from_toml(
            r#"
            [auth]
            token_ttl_seconds = 900
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_signing_key_rejected() {
        let result = from_toml(
            r#"
            [auth]
            signing_key = ""
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Message(_))));
    }

    #[test]
    fn test_negative_ttl_rejected() {
        let result = from_toml(
            r#"
            [auth]
            signing_key = "a_signing_key_that_is_long_enough!"
            token_ttl_seconds = -1
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Message(_))));
    }

    #[test]
    fn test_out_of_range_ttl_rejected() {
        for ttl in ["10000000000000", "9223372036854775807", "157680001"] {
            let result = from_toml(&format!(
                r#"
                [auth]
                signing_key = "a_signing_key_that_is_long_enough!"
                token_ttl_seconds = {}
                "#,
                ttl
            ));
            assert!(
                matches!(result, Err(ConfigError::Message(_))),
                "ttl {} was accepted",
                ttl
            );
        }
    }

    #[test]
    fn test_maximum_ttl_accepted() {
        let config = from_toml(
            r#"
            [auth]
            signing_key = "a_signing_key_that_is_long_enough!"
            token_ttl_seconds = 157680000
            "#,
        )
        .expect("Five years is allowed");

        assert_eq!(config.auth.token_ttl(), Duration::days(5 * 365));
    }

    #[test]
    fn test_token_ttl_never_panics_on_unvalidated_input() {
        let auth = AuthConfig {
            signing_key: "key".to_string(),
            token_ttl_seconds: i64::MAX,
        };

        assert!(auth.validate().is_err());
        assert_eq!(auth.token_ttl(), Duration::seconds(MAX_TOKEN_TTL_SECONDS));
    }

    #[test]
    fn test_debug_redacts_signing_key() {
        let config = from_toml(
            r#"
            [auth]
            signing_key = "super_secret_signing_key_value!!"
            "#,
        )
        .unwrap();

        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super_secret_signing_key_value"));
        assert!(rendered.contains("<redacted>"));
    }
}
