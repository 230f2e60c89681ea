//! MongoDB implementation of the TokenRepository trait

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::Collection;
use uuid::Uuid;

use cz_core::domain::entities::VerificationToken;
use cz_core::errors::DomainError;
use cz_core::repositories::TokenRepository;

use super::documents::TokenDocument;
use crate::database::connection::MongoHandle;

/// MongoDB-backed verification token repository
pub struct MongoTokenRepository {
    collection: Collection<TokenDocument>,
}

impl MongoTokenRepository {
    pub fn new(handle: &MongoHandle) -> Self {
        Self {
            collection: handle.verification_tokens(),
        }
    }
}

#[async_trait]
impl TokenRepository for MongoTokenRepository {
    async fn insert(&self, token: VerificationToken) -> Result<VerificationToken, DomainError> {
        self.collection
            .insert_one(TokenDocument::from(&token), None)
            .await
            .map_err(|e| DomainError::store(format!("token insert failed: {}", e)))?;

        Ok(token)
    }

    async fn find_by_owner(
        &self,
        owner_id: Uuid,
    ) -> Result<Option<VerificationToken>, DomainError> {
        let doc = self
            .collection
            .find_one(doc! { "owner_id": owner_id.to_string() }, None)
            .await
            .map_err(|e| DomainError::store(format!("token lookup failed: {}", e)))?;

        doc.map(VerificationToken::try_from).transpose()
    }

    async fn find_by_owner_and_code(
        &self,
        owner_id: Uuid,
        code: &str,
    ) -> Result<Option<VerificationToken>, DomainError> {
        let doc = self
            .collection
            .find_one(doc! { "owner_id": owner_id.to_string(), "code": code }, None)
            .await
            .map_err(|e| DomainError::store(format!("token lookup failed: {}", e)))?;

        doc.map(VerificationToken::try_from).transpose()
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id.to_string() }, None)
            .await
            .map_err(|e| DomainError::store(format!("token delete failed: {}", e)))?;

        Ok(result.deleted_count == 1)
    }

    async fn delete_by_owner(&self, owner_id: Uuid) -> Result<u64, DomainError> {
        let result = self
            .collection
            .delete_many(doc! { "owner_id": owner_id.to_string() }, None)
            .await
            .map_err(|e| DomainError::store(format!("token delete failed: {}", e)))?;

        Ok(result.deleted_count)
    }
}
