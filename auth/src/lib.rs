//! Credential authentication primitives
//!
//! - Password hashing and verification (Argon2id, PHC strings)
//! - Signed, time-bounded access tokens (HS256 JWT) carrying subject and role
//! - Authentication coordination for an already looked-up user record
//!
//! Services own the user lookup and adapt these implementations behind their
//! own ports.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.matches("my_password", &hash));
//! assert!(!hasher.matches("my_password", "not-a-hash"));
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::TokenCodec;
//! use chrono::Duration;
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(1));
//! let token = codec.issue("alice@example.com", "ADMIN").unwrap();
//! let claims = codec.verify(&token).unwrap();
//! assert_eq!(claims.role, "ADMIN");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//! use chrono::Duration;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(1));
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! let token = auth
//!     .authenticate("password123", &hash, "alice@example.com", "ADMIN")
//!     .unwrap();
//!
//! assert!(auth.validate_token(&token));
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::TokenCodec;
pub use jwt::TokenError;
pub use password::PasswordError;
pub use password::PasswordHasher;
