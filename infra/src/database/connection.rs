//! MongoDB client setup and index management

use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Database, IndexModel};

use cz_core::errors::DomainError;
use cz_shared::config::DatabaseConfig;

use super::mongo::{PrincipalDocument, TokenDocument, PRINCIPALS, VERIFICATION_TOKENS};

/// Handle to the application database
#[derive(Clone)]
pub struct MongoHandle {
    database: Database,
}

impl MongoHandle {
    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn principals(&self) -> mongodb::Collection<PrincipalDocument> {
        self.database.collection(PRINCIPALS)
    }

    pub fn verification_tokens(&self) -> mongodb::Collection<TokenDocument> {
        self.database.collection(VERIFICATION_TOKENS)
    }
}

/// Connect to MongoDB and ensure the indexes the repositories rely on
///
/// The token TTL index is a server-side safety net; expiry is still
/// enforced on every lookup since Mongo only sweeps periodically.
pub async fn connect(
    config: &DatabaseConfig,
    token_ttl_minutes: i64,
) -> Result<MongoHandle, DomainError> {
    let mut options = ClientOptions::parse(&config.uri)
        .await
        .map_err(|e| DomainError::store(format!("invalid MongoDB uri: {}", e)))?;
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout));
    options.server_selection_timeout = Some(Duration::from_secs(config.connect_timeout));

    let client = Client::with_options(options)
        .map_err(|e| DomainError::store(format!("MongoDB client init failed: {}", e)))?;
    let database = client.database(&config.database);

    let handle = MongoHandle { database };
    ensure_indexes(&handle, token_ttl_minutes).await?;

    tracing::info!(
        database = %config.database,
        event = "database_connected",
        "MongoDB connection established"
    );

    Ok(handle)
}

async fn ensure_indexes(handle: &MongoHandle, token_ttl_minutes: i64) -> Result<(), DomainError> {
    // One account per (email, role)
    let email_role = IndexModel::builder()
        .keys(doc! { "email": 1, "role": 1 })
        .options(IndexOptions::builder().unique(true).build())
        .build();
    handle
        .principals()
        .create_index(email_role, None)
        .await
        .map_err(|e| DomainError::store(format!("principal index creation failed: {}", e)))?;

    let ttl = Duration::from_secs((token_ttl_minutes.max(0) as u64) * 60);
    let token_expiry = IndexModel::builder()
        .keys(doc! { "created_at": 1 })
        .options(IndexOptions::builder().expire_after(ttl).build())
        .build();
    handle
        .verification_tokens()
        .create_index(token_expiry, None)
        .await
        .map_err(|e| DomainError::store(format!("token index creation failed: {}", e)))?;

    let token_owner = IndexModel::builder()
        .keys(doc! { "owner_id": 1 })
        .build();
    handle
        .verification_tokens()
        .create_index(token_owner, None)
        .await
        .map_err(|e| DomainError::store(format!("token index creation failed: {}", e)))?;

    Ok(())
}
