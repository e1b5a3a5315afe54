use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::Algorithm;

use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::jwt::TokenClaims;
use crate::jwt::TokenKind;

/// Builds, signs, and verifies the tokens of an authentication result.
///
/// Access tokens are short-lived (minutes), refresh tokens long-lived
/// (days). The two tokens of a pair share the claim schema; only `type`
/// and `exp` differ between them.
pub struct TokenIssuer {
    jwt: JwtHandler,
    access_token_ttl: Duration,
    refresh_token_ttl: Duration,
}

impl TokenIssuer {
    /// Create an HS256 issuer.
    ///
    /// # Arguments
    /// * `secret` - Symmetric signing key
    /// * `access_token_minutes` - Access token lifetime
    /// * `refresh_token_days` - Refresh token lifetime
    pub fn new(secret: &[u8], access_token_minutes: i64, refresh_token_days: i64) -> Self {
        Self::with_algorithm(
            secret,
            Algorithm::HS256,
            access_token_minutes,
            refresh_token_days,
        )
    }

    /// Create an issuer with an explicit signing algorithm.
    pub fn with_algorithm(
        secret: &[u8],
        algorithm: Algorithm,
        access_token_minutes: i64,
        refresh_token_days: i64,
    ) -> Self {
        Self {
            jwt: JwtHandler::with_algorithm(secret, algorithm),
            access_token_ttl: Duration::minutes(access_token_minutes),
            refresh_token_ttl: Duration::days(refresh_token_days),
        }
    }

    /// Seconds until a freshly issued access token expires.
    pub fn access_token_ttl_seconds(&self) -> i64 {
        self.access_token_ttl.num_seconds()
    }

    fn ttl(&self, kind: TokenKind) -> Duration {
        match kind {
            TokenKind::Access => self.access_token_ttl,
            TokenKind::Refresh => self.refresh_token_ttl,
        }
    }

    /// Build and sign one token of the given kind.
    ///
    /// `now` is caller-supplied so both tokens of a pair share the same
    /// issuance instant.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed
    pub fn issue(
        &self,
        subject: &str,
        account_id: i64,
        tenant_id: i64,
        kind: TokenKind,
        now: DateTime<Utc>,
    ) -> Result<String, JwtError> {
        let claims = TokenClaims::new(subject, account_id, tenant_id, kind, now + self.ttl(kind));
        self.jwt.encode(&claims)
    }

    /// Validate signature and expiry, then require the expected kind.
    ///
    /// # Errors
    /// * `TokenExpired` - `exp` has passed
    /// * `DecodingFailed` - signature mismatch or malformed token
    /// * `UnexpectedKind` - valid token of the other kind
    pub fn verify(&self, token: &str, expected: TokenKind) -> Result<TokenClaims, JwtError> {
        let claims: TokenClaims = self.jwt.decode(token)?;

        if claims.token_type != expected {
            return Err(JwtError::UnexpectedKind {
                expected,
                actual: claims.token_type,
            });
        }

        Ok(claims)
    }
}
