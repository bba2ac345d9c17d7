use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use super::errors::TokenError;

/// Access token claims.
///
/// Every field is required: a token missing any of them does not decode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier, e.g. email)
    pub sub: String,

    /// Role label of the subject
    pub role: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Token identifier, unique per issued token
    pub jti: String,
}

impl Claims {
    /// Build claims for `subject` valid for `ttl` from `issued_at`.
    ///
    /// # Errors
    /// * `EncodingFailed` - Expiry falls outside the representable date range
    pub fn new(
        subject: impl ToString,
        role: impl ToString,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<Self, TokenError> {
        let expiration = issued_at.checked_add_signed(ttl).ok_or_else(|| {
            TokenError::EncodingFailed(format!(
                "expiry overflows: {} + {}s",
                issued_at,
                ttl.num_seconds()
            ))
        })?;

        Ok(Self {
            sub: subject.to_string(),
            role: role.to_string(),
            iat: issued_at.timestamp(),
            exp: expiration.timestamp(),
            jti: Uuid::new_v4().to_string(),
        })
    }

    /// Expiry is strict: a token is expired at the second `exp` is reached.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }
}
