//! Authentication infrastructure library
//!
//! Reusable building blocks for credential checking and token issuance:
//! - Password hashing and verification (bcrypt, fixed work factor)
//! - Typed JWT claims with access/refresh discrimination
//! - Token issuance and verification with independent expirations
//!
//! The service crate owns the account domain; this crate never touches
//! storage or the network, so it stays reusable across services.
//!
//! # Examples
//!
//! ## Password hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("wrong_password", &hash));
//! ```
//!
//! ## Token issuance
//! ```
//! use auth::TokenIssuer;
//! use auth::TokenKind;
//! use chrono::Utc;
//!
//! let issuer = TokenIssuer::new(b"secret_key_at_least_32_bytes_long!", 30, 7);
//! let token = issuer
//!     .issue("user@example.com", 1, 1, TokenKind::Access, Utc::now())
//!     .unwrap();
//!
//! let claims = issuer.verify(&token, TokenKind::Access).unwrap();
//! assert_eq!(claims.account_id, 1);
//! assert_eq!(claims.tenant_id, 1);
//! ```

pub mod issuer;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use issuer::TokenIssuer;
pub use jsonwebtoken::Algorithm;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::TokenClaims;
pub use jwt::TokenKind;
pub use password::PasswordError;
pub use password::PasswordHasher;
