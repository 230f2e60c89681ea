//! Principal repository trait defining the interface for account persistence.
//!
//! The trait is async-first and uses Result types for proper error
//! handling; implementations live in the infrastructure layer and must
//! keep the abstraction boundary between domain and storage intact.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::{Principal, PrincipalRole};
use crate::errors::DomainError;

/// Repository contract for Principal persistence operations
#[async_trait]
pub trait PrincipalRepository: Send + Sync {
    /// Find a principal by its unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(Principal))` - Principal found
    /// * `Ok(None)` - No principal with the given id
    /// * `Err(DomainError)` - Store error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Principal>, DomainError>;

    /// Find a principal by email within one role's namespace
    async fn find_by_email(
        &self,
        email: &str,
        role: PrincipalRole,
    ) -> Result<Option<Principal>, DomainError>;

    /// Persist a freshly created principal
    ///
    /// Fails with a store error when the `(email, role)` pair is already
    /// taken; callers are expected to have checked first for a friendlier
    /// failure.
    async fn insert(&self, principal: Principal) -> Result<Principal, DomainError>;

    /// Atomically flip `otp_verified` from false to true
    ///
    /// This is a single conditional update: it succeeds at most once per
    /// principal, so concurrent confirmation attempts cannot both win.
    ///
    /// # Returns
    /// * `Ok(true)` - The principal was unverified and is now verified
    /// * `Ok(false)` - The principal was already verified (or absent)
    async fn mark_verified(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Replace the principal's credential digest
    ///
    /// # Returns
    /// * `Ok(true)` - Digest replaced
    /// * `Ok(false)` - No principal with the given id
    async fn update_credential(&self, id: Uuid, digest: &str) -> Result<bool, DomainError>;
}
