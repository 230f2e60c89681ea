//! Types for verification service results

use crate::domain::entities::{PrincipalProfile, VerificationToken};

/// Result of issuing a verification token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// The token that was created and persisted
    pub token: VerificationToken,
    /// Provider message id for the OTP email, `None` when dispatch failed
    pub message_id: Option<String>,
}

/// Result of starting a password recovery
#[derive(Debug, Clone)]
pub struct RecoveryStarted {
    /// Public record of the principal recovering access
    pub profile: PrincipalProfile,
    /// Provider message id for the OTP email, `None` when dispatch failed
    pub message_id: Option<String>,
}

/// Acknowledgment of a completed password recovery
///
/// References the address the new credential was sent to; the credential
/// itself only ever exists in the outbound message.
#[derive(Debug, Clone)]
pub struct RecoveryAck {
    pub email: String,
}
