//! Wire shapes for the MongoDB collections
//!
//! UUIDs are stored as their canonical string form, timestamps as BSON
//! datetimes so the server-side TTL index can see them.

use chrono::{DateTime, Utc};
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use cz_core::domain::entities::{Principal, PrincipalRole, VerificationToken};
use cz_core::errors::DomainError;

/// Document shape of the `principals` collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrincipalDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub credential_digest: String,
    pub otp_verified: bool,
    pub role: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl From<&Principal> for PrincipalDocument {
    fn from(principal: &Principal) -> Self {
        Self {
            id: principal.id.to_string(),
            email: principal.email.clone(),
            credential_digest: principal.credential_digest.clone(),
            otp_verified: principal.otp_verified,
            role: principal.role.as_str().to_string(),
            created_at: principal.created_at,
        }
    }
}

impl TryFrom<PrincipalDocument> for Principal {
    type Error = DomainError;

    fn try_from(doc: PrincipalDocument) -> Result<Self, Self::Error> {
        Ok(Principal {
            id: parse_uuid(&doc.id)?,
            email: doc.email,
            credential_digest: doc.credential_digest,
            otp_verified: doc.otp_verified,
            role: doc
                .role
                .parse::<PrincipalRole>()
                .map_err(|_| DomainError::store(format!("unknown role '{}'", doc.role)))?,
            created_at: doc.created_at,
        })
    }
}

/// Document shape of the `verification_tokens` collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub owner_id: String,
    pub code: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl From<&VerificationToken> for TokenDocument {
    fn from(token: &VerificationToken) -> Self {
        Self {
            id: token.id.to_string(),
            owner_id: token.owner_id.to_string(),
            code: token.code.clone(),
            created_at: token.created_at,
        }
    }
}

impl TryFrom<TokenDocument> for VerificationToken {
    type Error = DomainError;

    fn try_from(doc: TokenDocument) -> Result<Self, Self::Error> {
        Ok(VerificationToken {
            id: parse_uuid(&doc.id)?,
            owner_id: parse_uuid(&doc.owner_id)?,
            code: doc.code,
            created_at: doc.created_at,
        })
    }
}

fn parse_uuid(raw: &str) -> Result<Uuid, DomainError> {
    raw.parse()
        .map_err(|_| DomainError::store(format!("malformed uuid '{}' in document", raw)))
}
