//! Mock hasher for account service tests

use crate::services::verification::PasswordHasherTrait;

/// Deterministic fake hasher: digest is a tagged copy of the plaintext
pub struct MockHasher;

impl PasswordHasherTrait for MockHasher {
    fn hash(&self, plaintext: &str) -> Result<String, String> {
        Ok(format!("hashed:{}", plaintext))
    }

    fn verify(&self, plaintext: &str, digest: &str) -> Result<bool, String> {
        Ok(digest == format!("hashed:{}", plaintext))
    }
}
