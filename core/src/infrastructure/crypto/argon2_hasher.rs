use argon2::{
    Argon2, PasswordHasher, PasswordVerifier,
    password_hash::{PasswordHash, SaltString, rand_core::OsRng},
};
use tracing::error;

use crate::domain::{auth::ports::HasherPort, common::entities::app_errors::CoreError};

#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    pub fn new() -> Self {
        Self
    }
}

impl HasherPort for Argon2Hasher {
    fn hash_password(&self, password: &str) -> Result<String, CoreError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| {
                error!("Failed to hash password: {e}");
                CoreError::Internal
            })?;

        Ok(hash.to_string())
    }

    fn verify_password(&self, password: &str, hash: &str) -> Result<bool, CoreError> {
        let parsed = PasswordHash::new(hash).map_err(|e| {
            error!("Stored password hash is malformed: {e}");
            CoreError::Internal
        })?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_round_trip() {
        let hasher = Argon2Hasher::new();
        let hash = hasher.hash_password("123456").unwrap();
        assert!(hasher.verify_password("123456", &hash).unwrap());
        assert!(!hasher.verify_password("654321", &hash).unwrap());
    }

    #[test]
    fn same_password_hashes_differently() {
        let hasher = Argon2Hasher::new();
        let first = hasher.hash_password("123456").unwrap();
        let second = hasher.hash_password("123456").unwrap();
        assert_ne!(first, second);
    }
}
