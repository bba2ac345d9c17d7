use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Issues and verifies signed access tokens.
///
/// Tokens are compact HS256 JWTs (three base64url segments), safe to carry in
/// an HTTP header. The signing key is fixed for the lifetime of the codec and
/// never rotated.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenCodec {
    /// Create a codec signing with `signing_key`, issuing tokens valid for `ttl`.
    pub fn new(signing_key: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked strictly against our own clock in `verify_at`.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.required_spec_claims.clear();

        Self {
            encoding_key: EncodingKey::from_secret(signing_key),
            decoding_key: DecodingKey::from_secret(signing_key),
            validation,
            ttl,
        }
    }

    /// Issue a token for `subject` with `role`, valid from now for the codec TTL.
    ///
    /// # Errors
    /// * `EncodingFailed` - Claims could not be serialized or signed
    pub fn issue(&self, subject: &str, role: &str) -> Result<String, TokenError> {
        self.issue_at(subject, role, Utc::now())
    }

    /// Issue a token as if the current time were `issued_at`.
    ///
    /// # Errors
    /// * `EncodingFailed` - Expiry overflows, or claims could not be serialized or signed
    pub fn issue_at(
        &self,
        subject: &str,
        role: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let claims = Claims::new(subject, role, issued_at, self.ttl)?;

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify a token against the current time.
    ///
    /// # Errors
    /// * `Malformed` - Token cannot be parsed into the expected structure
    /// * `InvalidSignature` - Signature does not match the claims
    /// * `Expired` - Signature is valid but the token has expired
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify a token as if the current time were `now`.
    ///
    /// The signature is checked first, so a forged token is reported as
    /// `InvalidSignature` whatever its `exp` claim says.
    ///
    /// # Errors
    /// * `Malformed` - Token cannot be parsed into the expected structure
    /// * `InvalidSignature` - Signature does not match the claims
    /// * `Expired` - Signature is valid and `now >= exp`
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed(e.to_string()),
            })?;

        if token_data.claims.is_expired(now.timestamp()) {
            return Err(TokenError::Expired);
        }

        Ok(token_data.claims)
    }
}
