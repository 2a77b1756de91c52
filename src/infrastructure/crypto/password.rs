//! Password hashing utilities

use bcrypt::{hash, verify};

/// Hash a password using bcrypt with an explicit work factor (4..=31)
pub fn hash_password_with_cost(password: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
    hash(password, cost)
}

/// Verify a password against a hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
    verify(password, hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::support::testing::TEST_BCRYPT_COST;

    #[test]
    fn test_hash_and_verify() {
        let password = "secure_password_123";
        let hashed = hash_password_with_cost(password, TEST_BCRYPT_COST).unwrap();

        assert!(verify_password(password, &hashed).unwrap());
        assert!(!verify_password("wrong_password", &hashed).unwrap());
    }

    #[test]
    fn hash_is_salted_2b_format() {
        let a = hash_password_with_cost("password", TEST_BCRYPT_COST).unwrap();
        let b = hash_password_with_cost("password", TEST_BCRYPT_COST).unwrap();

        assert!(a.starts_with("$2b$04$"));
        assert_ne!(a, "password");
        assert_ne!(a, b);
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(verify_password("password", "HASHED_PASSWORD").is_err());
    }
}
