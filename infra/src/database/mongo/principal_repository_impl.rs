//! MongoDB implementation of the PrincipalRepository trait

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::Collection;
use uuid::Uuid;

use cz_core::domain::entities::{Principal, PrincipalRole};
use cz_core::errors::DomainError;
use cz_core::repositories::PrincipalRepository;

use super::documents::PrincipalDocument;
use crate::database::connection::MongoHandle;

/// MongoDB-backed principal repository
pub struct MongoPrincipalRepository {
    collection: Collection<PrincipalDocument>,
}

impl MongoPrincipalRepository {
    pub fn new(handle: &MongoHandle) -> Self {
        Self {
            collection: handle.principals(),
        }
    }
}

#[async_trait]
impl PrincipalRepository for MongoPrincipalRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Principal>, DomainError> {
        let doc = self
            .collection
            .find_one(doc! { "_id": id.to_string() }, None)
            .await
            .map_err(|e| DomainError::store(format!("principal lookup failed: {}", e)))?;

        doc.map(Principal::try_from).transpose()
    }

    async fn find_by_email(
        &self,
        email: &str,
        role: PrincipalRole,
    ) -> Result<Option<Principal>, DomainError> {
        let doc = self
            .collection
            .find_one(doc! { "email": email, "role": role.as_str() }, None)
            .await
            .map_err(|e| DomainError::store(format!("principal lookup failed: {}", e)))?;

        doc.map(Principal::try_from).transpose()
    }

    async fn insert(&self, principal: Principal) -> Result<Principal, DomainError> {
        self.collection
            .insert_one(PrincipalDocument::from(&principal), None)
            .await
            .map_err(|e| {
                // The unique (email, role) index turns races into E11000
                if e.to_string().contains("E11000") {
                    DomainError::EmailAlreadyRegistered
                } else {
                    DomainError::store(format!("principal insert failed: {}", e))
                }
            })?;

        Ok(principal)
    }

    async fn mark_verified(&self, id: Uuid) -> Result<bool, DomainError> {
        // Conditional update: only the first caller flips the flag
        let result = self
            .collection
            .update_one(
                doc! { "_id": id.to_string(), "otp_verified": false },
                doc! { "$set": { "otp_verified": true } },
                None,
            )
            .await
            .map_err(|e| DomainError::store(format!("principal update failed: {}", e)))?;

        Ok(result.modified_count == 1)
    }

    async fn update_credential(&self, id: Uuid, digest: &str) -> Result<bool, DomainError> {
        let result = self
            .collection
            .update_one(
                doc! { "_id": id.to_string() },
                doc! { "$set": { "credential_digest": digest } },
                None,
            )
            .await
            .map_err(|e| DomainError::store(format!("principal update failed: {}", e)))?;

        Ok(result.matched_count == 1)
    }
}
