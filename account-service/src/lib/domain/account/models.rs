use std::fmt;

/// Account record as read from the relational store.
///
/// This subsystem never writes accounts; the rows are owned by the admin
/// side of the platform and consumed read-only here.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: i64,
    /// Organizational partition; every issued token echoes this value.
    pub tenant_id: i64,
    pub email: String,
    /// National tax identifier (CPF); optional second login identifier.
    pub cpf: Option<String>,
    pub password_hash: String,
    /// Inactive accounts never authenticate, password notwithstanding.
    pub is_active: bool,
    pub is_superuser: bool,
    /// Surfaced to clients, not enforced by this service.
    pub requires_2fa: bool,
    pub must_reset_password: bool,
}

/// Coarse access role carried in the login response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Doctor,
    Secretary,
    Patient,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Doctor => "doctor",
            Role::Secretary => "secretary",
            Role::Patient => "patient",
            Role::User => "user",
        }
    }

    /// Patients use the patient portal; every other role is staff.
    pub fn account_kind(&self) -> AccountKind {
        match self {
            Role::Patient => AccountKind::Patient,
            _ => AccountKind::Staff,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which portal the account belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Staff,
    Patient,
}

impl AccountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Staff => "staff",
            AccountKind::Patient => "patient",
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a successful authentication.
///
/// Returned to the caller and never stored server-side. The two tokens
/// always share subject, account, and tenant; only kind and expiry differ.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    /// Seconds until the access token expires; redundant with the embedded
    /// claim but cheap for clients to consume.
    pub expires_in: i64,
    pub account_id: i64,
    pub role: Role,
    pub account_kind: AccountKind,
    pub requires_2fa: bool,
    pub must_reset_password: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_kind_from_role() {
        assert_eq!(Role::Patient.account_kind(), AccountKind::Patient);
        assert_eq!(Role::Admin.account_kind(), AccountKind::Staff);
        assert_eq!(Role::Doctor.account_kind(), AccountKind::Staff);
        assert_eq!(Role::Secretary.account_kind(), AccountKind::Staff);
        assert_eq!(Role::User.account_kind(), AccountKind::Staff);
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(Role::Admin.as_str(), "admin");
        assert_eq!(Role::User.to_string(), "user");
        assert_eq!(AccountKind::Staff.as_str(), "staff");
        assert_eq!(AccountKind::Patient.to_string(), "patient");
    }
}
