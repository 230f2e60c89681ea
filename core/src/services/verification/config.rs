//! Configuration for the verification service

use crate::domain::entities::verification_token::DEFAULT_TTL_MINUTES;

/// Default length of a regenerated recovery password
pub const DEFAULT_PASSWORD_LENGTH: usize = 8;

/// Configuration for the verification service
#[derive(Debug, Clone)]
pub struct VerificationConfig {
    /// Minutes before an outstanding token stops being accepted
    pub code_ttl_minutes: i64,
    /// Length of the alphanumeric password generated during recovery
    pub generated_password_length: usize,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_ttl_minutes: DEFAULT_TTL_MINUTES,
            generated_password_length: DEFAULT_PASSWORD_LENGTH,
        }
    }
}
