use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Distinguishes the two tokens of a pair structurally, so a refresh token
/// cannot stand in for an access token or vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Claim set embedded in every issued token.
///
/// The wire names (`sub`, `user_id`, `tenant_id`, `type`, `exp`) are fixed:
/// downstream services validate exactly this shape, and `tenant_id` is what
/// they use to enforce tenant isolation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenClaims {
    /// Subject: the account's email address.
    pub sub: String,

    /// Owning account.
    #[serde(rename = "user_id")]
    pub account_id: i64,

    /// Organizational partition the account belongs to.
    pub tenant_id: i64,

    /// Access or refresh.
    #[serde(rename = "type")]
    pub token_type: TokenKind,

    /// Expiration time (Unix timestamp, seconds).
    pub exp: i64,
}

impl TokenClaims {
    /// Build a claim set expiring at the given instant.
    pub fn new(
        subject: impl Into<String>,
        account_id: i64,
        tenant_id: i64,
        token_type: TokenKind,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            sub: subject.into(),
            account_id,
            tenant_id,
            token_type,
            exp: expires_at.timestamp(),
        }
    }

    /// Check expiry against a caller-supplied timestamp.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn test_wire_field_names() {
        let claims = TokenClaims::new(
            "user@example.com",
            42,
            7,
            TokenKind::Access,
            Utc::now() + Duration::minutes(30),
        );

        let value = serde_json::to_value(&claims).unwrap();
        assert_eq!(value["sub"], "user@example.com");
        assert_eq!(value["user_id"], 42);
        assert_eq!(value["tenant_id"], 7);
        assert_eq!(value["type"], "access");
        assert!(value["exp"].is_i64());
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(TokenKind::Refresh).unwrap(),
            serde_json::json!("refresh")
        );
        assert_eq!(TokenKind::Access.to_string(), "access");
    }

    #[test]
    fn test_is_expired() {
        let claims = TokenClaims {
            sub: "user@example.com".to_string(),
            account_id: 1,
            tenant_id: 1,
            token_type: TokenKind::Access,
            exp: 1000,
        };

        assert!(!claims.is_expired(999));
        assert!(!claims.is_expired(1000)); // exactly at expiration
        assert!(claims.is_expired(1001));
    }
}
