//! Verification token entity for OTP-based email verification.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of the one-time passcode
pub const CODE_LENGTH: usize = 4;

/// Default time-to-live for verification tokens (10 minutes)
pub const DEFAULT_TTL_MINUTES: i64 = 10;

/// A single-use OTP bound to one principal
///
/// Created when signup or forgot-password is invoked, destroyed on the
/// one successful validation. At most one live token per owner is
/// maintained by the issuing flow (previous tokens are deleted on reissue).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationToken {
    /// Unique identifier for the token
    pub id: Uuid,

    /// Identifier of the principal this token belongs to
    pub owner_id: Uuid,

    /// The 4-digit passcode
    pub code: String,

    /// Timestamp when the token was created
    pub created_at: DateTime<Utc>,
}

impl VerificationToken {
    /// Creates a new verification token with a random 4-digit code
    pub fn new(owner_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            code: Self::generate_code(),
            created_at: Utc::now(),
        }
    }

    /// Generates a random 4-digit code, each digit drawn independently
    /// and uniformly from 0-9. Leading zeros are preserved.
    pub fn generate_code() -> String {
        let mut rng = rand::thread_rng();
        (0..CODE_LENGTH)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect()
    }

    /// Exact, case-sensitive comparison against a submitted code
    pub fn matches(&self, submitted: &str) -> bool {
        self.code == submitted
    }

    /// Whether the token is older than the given time-to-live
    pub fn is_expired(&self, ttl_minutes: i64) -> bool {
        Utc::now() > self.created_at + Duration::minutes(ttl_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_verification_token() {
        let owner_id = Uuid::new_v4();
        let token = VerificationToken::new(owner_id);

        assert_eq!(token.owner_id, owner_id);
        assert_eq!(token.code.len(), CODE_LENGTH);
        assert!(!token.is_expired(DEFAULT_TTL_MINUTES));
    }

    #[test]
    fn test_generate_code_format() {
        for _ in 0..200 {
            let code = VerificationToken::generate_code();
            assert_eq!(code.len(), CODE_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_digit()));

            // Leading zeros must survive as part of the string
            let num: u32 = code.parse().expect("generated code is numeric");
            assert!(num < 10_000);
        }
    }

    #[test]
    fn test_code_distribution_not_constant() {
        let codes: Vec<String> = (0..100)
            .map(|_| VerificationToken::generate_code())
            .collect();

        let unique = codes.iter().collect::<std::collections::HashSet<_>>().len();
        assert!(unique > 1);
    }

    #[test]
    fn test_matches_is_exact() {
        let mut token = VerificationToken::new(Uuid::new_v4());
        token.code = "0042".to_string();

        assert!(token.matches("0042"));
        assert!(!token.matches("42"));
        assert!(!token.matches("0043"));
        assert!(!token.matches(""));
    }

    #[test]
    fn test_expiry() {
        let mut token = VerificationToken::new(Uuid::new_v4());
        assert!(!token.is_expired(DEFAULT_TTL_MINUTES));

        token.created_at = Utc::now() - Duration::minutes(DEFAULT_TTL_MINUTES + 1);
        assert!(token.is_expired(DEFAULT_TTL_MINUTES));
    }
}
