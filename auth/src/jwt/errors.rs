use thiserror::Error;

/// Failure kinds for token issuance and verification.
///
/// `verify` yields exactly one of `Malformed`, `InvalidSignature` or `Expired`
/// for any token it rejects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is expired")]
    Expired,
}
