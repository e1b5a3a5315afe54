use async_trait::async_trait;

use crate::account::errors::AuthError;
use crate::account::models::Account;
use crate::account::models::Role;
use crate::account::models::TokenPair;

/// Port for the authentication facade.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Authenticate a login identifier and password, issuing a token pair.
    ///
    /// # Arguments
    /// * `identifier` - Email address or CPF, matched verbatim
    /// * `password` - Plaintext password, consumed and never stored
    ///
    /// # Returns
    /// Token pair with role and portal kind for the account
    ///
    /// # Errors
    /// * `CredentialsRejected` - Unknown identifier or wrong password
    /// * `AccountDeactivated` - Account exists but is inactive
    /// * `StoreUnavailable` / `SigningFailure` / `Timeout` / `Internal` -
    ///   unexpected faults, never surfaced as a credential rejection
    async fn authenticate(
        &self,
        identifier: &str,
        password: &str,
    ) -> Result<TokenPair, AuthError>;
}

/// Read-only lookup of account records.
#[async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Find the account whose email or CPF equals `identifier`.
    ///
    /// The identifier is treated as an opaque string: no case folding, no
    /// trimming. Both login columns are checked in one query.
    ///
    /// # Returns
    /// Optional account entity (None if no row matches)
    ///
    /// # Errors
    /// * `StoreUnavailable` - The store could not be reached
    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<Account>, AuthError>;
}

/// Derives the coarse access role for an account.
///
/// Kept behind a trait so the current email heuristic can be replaced by a
/// stored role assignment without touching the facade.
pub trait RoleResolver: Send + Sync + 'static {
    fn resolve(&self, account: &Account) -> Role;
}
