use thiserror::Error;

use super::claims::TokenKind;

/// Error type for JWT operations.
#[derive(Debug, Clone, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Failed to decode token: {0}")]
    DecodingFailed(String),

    #[error("Token is expired")]
    TokenExpired,

    #[error("Expected a {expected} token, got {actual}")]
    UnexpectedKind {
        expected: TokenKind,
        actual: TokenKind,
    },
}
