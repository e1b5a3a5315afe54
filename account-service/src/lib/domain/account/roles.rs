use crate::account::models::Account;
use crate::account::models::Role;
use crate::account::ports::RoleResolver;

/// Role derivation from account flags and email content.
///
/// First match wins: superuser outranks any email match, "doctor" outranks
/// "secretary" outranks "patient". Downstream authorization depends on
/// this exact precedence, so it must not be reordered.
// TODO: replace the substring heuristic with a stored role column once the
// account table carries one.
pub struct EmailRoleResolver;

impl RoleResolver for EmailRoleResolver {
    fn resolve(&self, account: &Account) -> Role {
        if account.is_superuser {
            return Role::Admin;
        }

        let email = account.email.to_lowercase();
        if email.contains("doctor") {
            Role::Doctor
        } else if email.contains("secretary") {
            Role::Secretary
        } else if email.contains("patient") {
            Role::Patient
        } else {
            Role::User
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account_with(email: &str, is_superuser: bool) -> Account {
        Account {
            id: 1,
            tenant_id: 1,
            email: email.to_string(),
            cpf: None,
            password_hash: "$2b$12$unused".to_string(),
            is_active: true,
            is_superuser,
            requires_2fa: false,
            must_reset_password: false,
        }
    }

    #[test]
    fn test_superuser_outranks_email_match() {
        let resolver = EmailRoleResolver;
        let account = account_with("doctor@clinic.com", true);

        assert_eq!(resolver.resolve(&account), Role::Admin);
    }

    #[test]
    fn test_email_substring_precedence() {
        let resolver = EmailRoleResolver;

        assert_eq!(
            resolver.resolve(&account_with("doctor@clinic.com", false)),
            Role::Doctor
        );
        assert_eq!(
            resolver.resolve(&account_with("secretary@clinic.com", false)),
            Role::Secretary
        );
        assert_eq!(
            resolver.resolve(&account_with("patient.joao@example.com", false)),
            Role::Patient
        );
        assert_eq!(
            resolver.resolve(&account_with("maria@example.com", false)),
            Role::User
        );
    }

    #[test]
    fn test_doctor_outranks_secretary_when_both_match() {
        let resolver = EmailRoleResolver;
        let account = account_with("secretary.of.doctor@clinic.com", false);

        assert_eq!(resolver.resolve(&account), Role::Doctor);
    }

    #[test]
    fn test_match_is_case_insensitive_on_email() {
        let resolver = EmailRoleResolver;
        let account = account_with("Doctor.Silva@Clinic.com", false);

        assert_eq!(resolver.resolve(&account), Role::Doctor);
    }
}
