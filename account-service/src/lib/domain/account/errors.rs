use thiserror::Error;

/// Top-level error for authentication operations.
///
/// The first two variants are expected, user-facing outcomes; the rest are
/// operator-facing faults that callers map to a server error. Display
/// strings of the user-facing variants are part of the HTTP contract.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Unknown identifier or wrong password. The two cases are collapsed on
    /// purpose so callers cannot probe which identifiers exist.
    #[error("Invalid credentials")]
    CredentialsRejected,

    #[error("Account is deactivated")]
    AccountDeactivated,

    #[error("Account store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Token signing failed: {0}")]
    SigningFailure(#[from] auth::JwtError),

    #[error("{0} timed out")]
    Timeout(&'static str),

    #[error("Internal error: {0}")]
    Internal(String),
}
