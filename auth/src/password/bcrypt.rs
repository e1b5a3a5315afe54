use bcrypt::hash;
use bcrypt::verify;

use super::errors::PasswordError;

/// Work factor applied to every newly hashed credential. Verification
/// honors whatever cost is recorded in the stored hash itself.
const BCRYPT_COST: u32 = 12;

/// Password hashing implementation.
///
/// Provides cryptographic password hashing (internally uses bcrypt).
#[derive(Clone)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Create a new password hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password securely.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// Modular crypt format hash (includes version, cost, and salt)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        hash(password, BCRYPT_COST).map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// Fails closed: a stored hash that cannot be parsed counts as a
    /// mismatch, never as a fault a caller could confuse with a valid
    /// credential. Neither the password nor the hash is ever logged.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash in modular crypt format
    ///
    /// # Returns
    /// True if the password matches, false otherwise
    pub fn verify(&self, password: &str, stored_hash: &str) -> bool {
        match verify(password, stored_hash) {
            Ok(matches) => matches,
            Err(e) => {
                tracing::warn!(error = %e, "stored password hash is unusable, rejecting credential");
                false
            }
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let password = "my_secure_password";

        let hash = hasher.hash(password).expect("Failed to hash password");

        assert!(hasher.verify(password, &hash));
        assert!(!hasher.verify("wrong_password", &hash));
    }

    #[test]
    fn test_hash_uses_fixed_cost() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("password").expect("Failed to hash password");

        // $2b$12$... carries the work factor in the prefix
        assert!(hash.starts_with("$2"));
        assert!(hash.contains("$12$"));
    }

    #[test]
    fn test_verify_malformed_hash_fails_closed() {
        let hasher = PasswordHasher::new();

        assert!(!hasher.verify("password", "not-a-bcrypt-hash"));
        assert!(!hasher.verify("password", ""));
        assert!(!hasher.verify("password", "$argon2id$v=19$m=19456,t=2,p=1$abc$def"));
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = PasswordHasher::new();

        let first = hasher.hash("password").unwrap();
        let second = hasher.hash("password").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("password", &first));
        assert!(hasher.verify("password", &second));
    }
}
