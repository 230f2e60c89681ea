//! In-memory implementation of PrincipalRepository for tests and development

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::{Principal, PrincipalRole};
use crate::errors::DomainError;

use super::r#trait::PrincipalRepository;

/// Mock principal repository backed by a HashMap
#[derive(Clone)]
pub struct MockPrincipalRepository {
    principals: Arc<RwLock<HashMap<Uuid, Principal>>>,
}

impl MockPrincipalRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            principals: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed the repository with an existing principal
    pub async fn seed(&self, principal: Principal) {
        self.principals
            .write()
            .await
            .insert(principal.id, principal);
    }

    /// Number of stored principals
    pub async fn len(&self) -> usize {
        self.principals.read().await.len()
    }
}

impl Default for MockPrincipalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PrincipalRepository for MockPrincipalRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Principal>, DomainError> {
        let principals = self.principals.read().await;
        Ok(principals.get(&id).cloned())
    }

    async fn find_by_email(
        &self,
        email: &str,
        role: PrincipalRole,
    ) -> Result<Option<Principal>, DomainError> {
        let principals = self.principals.read().await;
        Ok(principals
            .values()
            .find(|p| p.email == email && p.role == role)
            .cloned())
    }

    async fn insert(&self, principal: Principal) -> Result<Principal, DomainError> {
        let mut principals = self.principals.write().await;

        let duplicate = principals
            .values()
            .any(|p| p.email == principal.email && p.role == principal.role);
        // Mirrors the store's unique (email, role) constraint
        if duplicate {
            return Err(DomainError::EmailAlreadyRegistered);
        }

        principals.insert(principal.id, principal.clone());
        Ok(principal)
    }

    async fn mark_verified(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut principals = self.principals.write().await;

        match principals.get_mut(&id) {
            Some(principal) if !principal.otp_verified => {
                principal.otp_verified = true;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn update_credential(&self, id: Uuid, digest: &str) -> Result<bool, DomainError> {
        let mut principals = self.principals.write().await;

        if let Some(principal) = principals.get_mut(&id) {
            principal.credential_digest = digest.to_string();
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
