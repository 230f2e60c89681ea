//! Token repository trait defining the interface for OTP token persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::VerificationToken;
use crate::errors::DomainError;

/// Repository contract for VerificationToken persistence operations
///
/// The store itself does not enforce a single outstanding token per owner;
/// the issuing flow maintains that by deleting previous tokens on reissue.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Persist a new verification token
    async fn insert(&self, token: VerificationToken) -> Result<VerificationToken, DomainError>;

    /// Find any outstanding token for an owner
    async fn find_by_owner(
        &self,
        owner_id: Uuid,
    ) -> Result<Option<VerificationToken>, DomainError>;

    /// Find a token matching both owner and exact code
    async fn find_by_owner_and_code(
        &self,
        owner_id: Uuid,
        code: &str,
    ) -> Result<Option<VerificationToken>, DomainError>;

    /// Delete a token by its identifier
    ///
    /// # Returns
    /// * `Ok(true)` - Token existed and was removed
    /// * `Ok(false)` - No token with the given id
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Delete every token belonging to an owner, returning how many
    /// were removed
    async fn delete_by_owner(&self, owner_id: Uuid) -> Result<u64, DomainError>;
}
