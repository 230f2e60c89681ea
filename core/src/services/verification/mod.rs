//! Verification service module for OTP-based email verification
//!
//! This module provides the complete one-time-passcode workflow:
//! - Token issuance for new signups (delete-previous-on-reissue)
//! - Single-use confirmation with an atomic verified-state transition
//! - Password recovery with credential regeneration
//! - Integration with the email notifier and the password hasher

mod config;
mod service;
mod traits;
mod types;


pub use config::VerificationConfig;
pub use service::VerificationService;
pub use traits::{NotifierTrait, PasswordHasherTrait};
pub use types::{IssuedToken, RecoveryAck, RecoveryStarted};
