//! Principal entity: a patient or doctor account subject to
//! email verification and password recovery.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of account a principal represents.
///
/// Email uniqueness is scoped per role: a patient and a doctor may share
/// an address, two patients may not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrincipalRole {
    Patient,
    Doctor,
}

impl PrincipalRole {
    /// Stable string tag used in persistence and JWT claims
    pub fn as_str(&self) -> &'static str {
        match self {
            PrincipalRole::Patient => "patient",
            PrincipalRole::Doctor => "doctor",
        }
    }
}

impl std::fmt::Display for PrincipalRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PrincipalRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "patient" => Ok(PrincipalRole::Patient),
            "doctor" => Ok(PrincipalRole::Doctor),
            other => Err(format!("Unknown principal role: {}", other)),
        }
    }
}

/// A patient or doctor account
///
/// `otp_verified` starts `false` at signup and transitions to `true`
/// exactly once through the verification flow; repeated confirmation is
/// rejected. The credential digest is replaced by password recovery and
/// by an authenticated password change, never exposed outward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Unique identifier
    pub id: Uuid,

    /// Email address (unique per role)
    pub email: String,

    /// One-way hash of the password credential
    pub credential_digest: String,

    /// Whether the account's email has been verified via OTP
    pub otp_verified: bool,

    /// Account kind
    pub role: PrincipalRole,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,
}

impl Principal {
    /// Create a fresh, unverified principal
    pub fn new(email: impl Into<String>, credential_digest: String, role: PrincipalRole) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            credential_digest,
            otp_verified: false,
            role,
            created_at: Utc::now(),
        }
    }

    /// Public projection of the account, safe to return over the wire
    pub fn profile(&self) -> PrincipalProfile {
        PrincipalProfile {
            id: self.id,
            email: self.email.clone(),
            otp_verified: self.otp_verified,
            role: self.role,
            created_at: self.created_at,
        }
    }
}

/// Public view of a principal. Never carries the credential digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrincipalProfile {
    pub id: Uuid,
    pub email: String,
    pub otp_verified: bool,
    pub role: PrincipalRole,
    pub created_at: DateTime<Utc>,
}
