//! Traits for email notification and credential hashing

use async_trait::async_trait;

/// Trait for the outbound email capability
///
/// Dispatch is best-effort from the flows' perspective: a failed send is
/// reported to the caller but never rolls back a completed state
/// transition. Implementations return a provider message id on success.
#[async_trait]
pub trait NotifierTrait: Send + Sync {
    /// Deliver a one-time passcode to the given address
    async fn send_otp(&self, email: &str, code: &str) -> Result<String, String>;

    /// Tell the principal their account is now verified
    async fn send_verification_success(&self, email: &str) -> Result<String, String>;

    /// Deliver a freshly generated plaintext password
    async fn send_new_password(&self, email: &str, password: &str) -> Result<String, String>;
}

/// Trait for the one-way password hashing primitive
///
/// Owned by the account-store boundary; the algorithm behind it is a
/// pluggable implementation detail (bcrypt in this workspace).
pub trait PasswordHasherTrait: Send + Sync {
    /// Hash a plaintext credential into a storable digest
    fn hash(&self, plaintext: &str) -> Result<String, String>;

    /// Check a plaintext credential against a stored digest
    fn verify(&self, plaintext: &str, digest: &str) -> Result<bool, String>;
}
