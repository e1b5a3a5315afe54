use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use auth::TokenKind;
use chrono::Utc;
use tokio::time::timeout;

use crate::account::errors::AuthError;
use crate::account::models::TokenPair;
use crate::account::ports::AccountRepository;
use crate::account::ports::AuthServicePort;
use crate::account::ports::RoleResolver;

/// Upper bound on one store round-trip. Elapsing is an internal fault,
/// never a credential rejection.
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Upper bound on one password verification, work factor included.
const VERIFY_TIMEOUT: Duration = Duration::from_secs(5);

/// Authentication facade.
///
/// Orchestrates lookup, the active-account check, credential verification,
/// role derivation, and token issuance — in that order. Holds no mutable
/// state; concurrent authentications need no coordination.
pub struct AuthService<AR, RR>
where
    AR: AccountRepository,
    RR: RoleResolver,
{
    repository: Arc<AR>,
    role_resolver: RR,
    password_hasher: auth::PasswordHasher,
    token_issuer: Arc<auth::TokenIssuer>,
}

impl<AR, RR> AuthService<AR, RR>
where
    AR: AccountRepository,
    RR: RoleResolver,
{
    /// Create a new authentication service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Account lookup implementation
    /// * `role_resolver` - Role derivation implementation
    /// * `token_issuer` - Shared issuer holding the process-wide signing key
    pub fn new(repository: Arc<AR>, role_resolver: RR, token_issuer: Arc<auth::TokenIssuer>) -> Self {
        Self {
            repository,
            role_resolver,
            password_hasher: auth::PasswordHasher::new(),
            token_issuer,
        }
    }
}

#[async_trait]
impl<AR, RR> AuthServicePort for AuthService<AR, RR>
where
    AR: AccountRepository,
    RR: RoleResolver,
{
    async fn authenticate(
        &self,
        identifier: &str,
        password: &str,
    ) -> Result<TokenPair, AuthError> {
        let account = timeout(
            LOOKUP_TIMEOUT,
            self.repository.find_by_identifier(identifier),
        )
        .await
        .map_err(|_| AuthError::Timeout("account lookup"))??
        .ok_or(AuthError::CredentialsRejected)?;

        if !account.is_active {
            return Err(AuthError::AccountDeactivated);
        }

        // bcrypt is deliberately slow; keep it off the async workers so one
        // verification cannot stall unrelated requests.
        let hasher = self.password_hasher.clone();
        let candidate = password.to_owned();
        let stored_hash = account.password_hash.clone();
        let verified = timeout(
            VERIFY_TIMEOUT,
            tokio::task::spawn_blocking(move || hasher.verify(&candidate, &stored_hash)),
        )
        .await
        .map_err(|_| AuthError::Timeout("password verification"))?
        .map_err(|e| AuthError::Internal(format!("Password verification task failed: {}", e)))?;

        if !verified {
            return Err(AuthError::CredentialsRejected);
        }

        let role = self.role_resolver.resolve(&account);

        let now = Utc::now();
        let access_token = self.token_issuer.issue(
            &account.email,
            account.id,
            account.tenant_id,
            TokenKind::Access,
            now,
        )?;
        let refresh_token = self.token_issuer.issue(
            &account.email,
            account.id,
            account.tenant_id,
            TokenKind::Refresh,
            now,
        )?;

        tracing::debug!(
            account_id = account.id,
            tenant_id = account.tenant_id,
            role = %role,
            "Issued token pair"
        );

        Ok(TokenPair {
            access_token,
            refresh_token,
            expires_in: self.token_issuer.access_token_ttl_seconds(),
            account_id: account.id,
            role,
            account_kind: role.account_kind(),
            requires_2fa: account.requires_2fa,
            must_reset_password: account.must_reset_password,
        })
    }
}
