//! Main verification service implementation

use rand::Rng;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Principal, PrincipalRole, VerificationToken};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{PrincipalRepository, TokenRepository};

use super::config::VerificationConfig;
use super::traits::{NotifierTrait, PasswordHasherTrait};
use super::types::{IssuedToken, RecoveryAck, RecoveryStarted};

/// Alphabet for regenerated recovery passwords
const PASSWORD_ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Service driving the OTP verification and password-recovery lifecycle
pub struct VerificationService<P, T, N, H>
where
    P: PrincipalRepository,
    T: TokenRepository,
    N: NotifierTrait,
    H: PasswordHasherTrait,
{
    /// Principal repository for account state
    principals: Arc<P>,
    /// Token repository for outstanding OTPs
    tokens: Arc<T>,
    /// Email notifier for OTP and confirmation messages
    notifier: Arc<N>,
    /// Password hasher for recovery credential regeneration
    hasher: Arc<H>,
    /// Service configuration
    config: VerificationConfig,
}

impl<P, T, N, H> VerificationService<P, T, N, H>
where
    P: PrincipalRepository,
    T: TokenRepository,
    N: NotifierTrait,
    H: PasswordHasherTrait,
{
    /// Create a new verification service
    pub fn new(
        principals: Arc<P>,
        tokens: Arc<T>,
        notifier: Arc<N>,
        hasher: Arc<H>,
        config: VerificationConfig,
    ) -> Self {
        Self {
            principals,
            tokens,
            notifier,
            hasher,
            config,
        }
    }

    /// Bind a freshly created, unverified principal to a new OTP
    ///
    /// Any previous tokens for the owner are invalidated first, so only
    /// the newest code is accepted. The OTP email is dispatched
    /// best-effort: a notifier failure is logged and reported through
    /// `message_id: None`, but the token stays issued.
    pub async fn begin_verification(&self, principal: &Principal) -> DomainResult<IssuedToken> {
        let removed = self.tokens.delete_by_owner(principal.id).await?;
        if removed > 0 {
            tracing::info!(
                owner = %principal.id,
                removed,
                event = "previous_tokens_invalidated",
                "Invalidated previous verification tokens on reissue"
            );
        }

        let token = self.tokens.insert(VerificationToken::new(principal.id)).await?;

        tracing::info!(
            owner = %principal.id,
            token_id = %token.id,
            event = "otp_issued",
            "Issued new verification token"
        );

        let message_id = match self.notifier.send_otp(&principal.email, &token.code).await {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::warn!(
                    owner = %principal.id,
                    error = %e,
                    event = "otp_dispatch_failed",
                    "Failed to dispatch OTP email; token remains valid"
                );
                None
            }
        };

        Ok(IssuedToken { token, message_id })
    }

    /// Confirm a signup verification with a submitted code
    ///
    /// Failure ladder: `InvalidRequest` for missing/blank input,
    /// `PrincipalNotFound`, `AlreadyVerified`, `TokenNotFound`,
    /// `TokenExpired`, `CodeMismatch`. On success the verified transition
    /// happens through a single conditional update, so concurrent
    /// confirmations cannot both succeed; the token is consumed and a
    /// confirmation email goes out best-effort.
    pub async fn confirm_verification(
        &self,
        owner_id: &str,
        submitted_code: &str,
    ) -> DomainResult<()> {
        let owner = Self::parse_request(owner_id, submitted_code)?;

        let principal = self
            .principals
            .find_by_id(owner)
            .await?
            .ok_or(DomainError::PrincipalNotFound)?;

        if principal.otp_verified {
            return Err(DomainError::AlreadyVerified);
        }

        let token = self.validate_code(owner, submitted_code).await?;

        // Atomic false->true transition; losing a concurrent race surfaces
        // as AlreadyVerified rather than a double success.
        if !self.principals.mark_verified(owner).await? {
            return Err(DomainError::AlreadyVerified);
        }

        self.tokens.delete_by_id(token.id).await?;

        tracing::info!(
            owner = %owner,
            event = "otp_verified",
            "Account email verified"
        );

        if let Err(e) = self.notifier.send_verification_success(&principal.email).await {
            tracing::warn!(
                owner = %owner,
                error = %e,
                event = "confirmation_dispatch_failed",
                "Failed to dispatch verification-success email"
            );
        }

        Ok(())
    }

    /// Start password recovery for the account matching `email`
    ///
    /// The address is trimmed and lowercased before lookup, matching the
    /// normalized form signup stores.
    pub async fn begin_recovery(
        &self,
        email: &str,
        role: PrincipalRole,
    ) -> DomainResult<RecoveryStarted> {
        let email = email.trim().to_lowercase();
        let principal = self
            .principals
            .find_by_email(&email, role)
            .await?
            .ok_or(DomainError::PrincipalNotFound)?;

        let issued = self.begin_verification(&principal).await?;

        Ok(RecoveryStarted {
            profile: principal.profile(),
            message_id: issued.message_id,
        })
    }

    /// Complete password recovery with a submitted code
    ///
    /// Same request-shape and mismatch failures as confirmation, but no
    /// already-verified guard: recovery is re-runnable. On success a fresh
    /// alphanumeric credential replaces the stored digest, the token is
    /// consumed, and the plaintext is emailed to the principal. The
    /// plaintext never appears in the returned acknowledgment.
    pub async fn confirm_recovery(
        &self,
        owner_id: &str,
        submitted_code: &str,
    ) -> DomainResult<RecoveryAck> {
        let owner = Self::parse_request(owner_id, submitted_code)?;

        let principal = self
            .principals
            .find_by_id(owner)
            .await?
            .ok_or(DomainError::PrincipalNotFound)?;

        let token = self.validate_code(owner, submitted_code).await?;

        let new_password = Self::generate_password(self.config.generated_password_length);
        let digest = self
            .hasher
            .hash(&new_password)
            .map_err(DomainError::internal)?;

        if !self.principals.update_credential(owner, &digest).await? {
            return Err(DomainError::PrincipalNotFound);
        }

        self.tokens.delete_by_id(token.id).await?;

        tracing::info!(
            owner = %owner,
            event = "password_regenerated",
            "Replaced credential after recovery confirmation"
        );

        if let Err(e) = self
            .notifier
            .send_new_password(&principal.email, &new_password)
            .await
        {
            tracing::warn!(
                owner = %owner,
                error = %e,
                event = "new_password_dispatch_failed",
                "Failed to dispatch new-password email"
            );
        }

        Ok(RecoveryAck {
            email: principal.email,
        })
    }

    /// Generate a random alphanumeric password of the given length,
    /// drawn uniformly from the 62-character alphabet
    pub fn generate_password(length: usize) -> String {
        let mut rng = rand::thread_rng();
        (0..length)
            .map(|_| PASSWORD_ALPHABET[rng.gen_range(0..PASSWORD_ALPHABET.len())] as char)
            .collect()
    }

    /// Validate the confirmation request shape and parse the owner id
    fn parse_request(owner_id: &str, submitted_code: &str) -> DomainResult<Uuid> {
        if owner_id.trim().is_empty() || submitted_code.trim().is_empty() {
            return Err(DomainError::invalid_request(
                "Invalid request, missing parameters!",
            ));
        }

        owner_id
            .parse()
            .map_err(|_| DomainError::invalid_request("Invalid owner id"))
    }

    /// Look up the owner's outstanding token and match the submitted code
    ///
    /// Expired tokens are deleted on sight and reported as `TokenExpired`.
    async fn validate_code(
        &self,
        owner: Uuid,
        submitted_code: &str,
    ) -> DomainResult<VerificationToken> {
        let outstanding = self
            .tokens
            .find_by_owner(owner)
            .await?
            .ok_or(DomainError::TokenNotFound)?;

        if outstanding.is_expired(self.config.code_ttl_minutes) {
            tracing::info!(
                owner = %owner,
                token_id = %outstanding.id,
                event = "otp_expired",
                "Discarding expired verification token"
            );
            self.tokens.delete_by_id(outstanding.id).await?;
            return Err(DomainError::TokenExpired);
        }

        self.tokens
            .find_by_owner_and_code(owner, submitted_code)
            .await?
            .ok_or(DomainError::CodeMismatch)
    }
}
