//! bcrypt implementation of the password hasher trait

use cz_core::services::verification::PasswordHasherTrait;

/// Password hasher backed by bcrypt
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasherTrait for BcryptHasher {
    fn hash(&self, plaintext: &str) -> Result<String, String> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| format!("bcrypt hash failed: {}", e))
    }

    fn verify(&self, plaintext: &str, digest: &str) -> Result<bool, String> {
        bcrypt::verify(plaintext, digest).map_err(|e| format!("bcrypt verify failed: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        // Minimum cost keeps the test fast
        let hasher = BcryptHasher::new(4);
        let digest = hasher.hash("secret1").unwrap();

        assert_ne!(digest, "secret1");
        assert!(hasher.verify("secret1", &digest).unwrap());
        assert!(!hasher.verify("secret2", &digest).unwrap());
    }
}
