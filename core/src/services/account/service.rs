//! Main account service implementation

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Principal, PrincipalRole};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::PrincipalRepository;
use crate::services::verification::PasswordHasherTrait;

use super::config::AccountConfig;
use super::types::{Claims, Session};

/// Minimum accepted password length on signup and password change
const MIN_PASSWORD_LENGTH: usize = 6;

/// Service driving account registration, signin and password changes
pub struct AccountService<P, H>
where
    P: PrincipalRepository,
    H: PasswordHasherTrait,
{
    /// Principal repository for account state
    principals: Arc<P>,
    /// Password hasher for credential digests
    hasher: Arc<H>,
    /// Service configuration
    config: AccountConfig,
}

impl<P, H> AccountService<P, H>
where
    P: PrincipalRepository,
    H: PasswordHasherTrait,
{
    /// Create a new account service
    pub fn new(principals: Arc<P>, hasher: Arc<H>, config: AccountConfig) -> Self {
        Self {
            principals,
            hasher,
            config,
        }
    }

    /// Register a new, unverified account
    ///
    /// The email must not already be registered for the same role. The
    /// returned principal still has to complete OTP verification.
    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        role: PrincipalRole,
    ) -> DomainResult<Principal> {
        let email = Self::validate_email(email)?;
        Self::validate_password(password)?;

        if self.principals.find_by_email(&email, role).await?.is_some() {
            return Err(DomainError::EmailAlreadyRegistered);
        }

        let digest = self
            .hasher
            .hash(password)
            .map_err(DomainError::internal)?;

        let principal = self
            .principals
            .insert(Principal::new(&email, digest, role))
            .await?;

        tracing::info!(
            principal_id = %principal.id,
            role = %role,
            event = "account_created",
            "account registered, pending verification"
        );

        Ok(principal)
    }

    /// Authenticate an account and mint a signed session token
    pub async fn signin(
        &self,
        email: &str,
        password: &str,
        role: PrincipalRole,
    ) -> DomainResult<Session> {
        let email = Self::validate_email(email)?;

        let principal = self
            .principals
            .find_by_email(&email, role)
            .await?
            .ok_or(DomainError::PrincipalNotFound)?;

        let matches = self
            .hasher
            .verify(password, &principal.credential_digest)
            .map_err(DomainError::internal)?;
        if !matches {
            return Err(DomainError::InvalidCredentials);
        }

        let token = self.sign_session(&principal)?;

        tracing::info!(
            principal_id = %principal.id,
            role = %role,
            event = "signin",
            "session issued"
        );

        Ok(Session {
            email: principal.email,
            token,
            otp_verified: principal.otp_verified,
        })
    }

    /// Replace the account's password after checking the current one
    pub async fn change_password(
        &self,
        owner_id: &str,
        old_password: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        if old_password.is_empty() {
            return Err(DomainError::invalid_request(
                "Invalid request, missing parameters!",
            ));
        }
        Self::validate_password(new_password)?;

        let owner_id: Uuid = owner_id
            .parse()
            .map_err(|_| DomainError::invalid_request("Invalid owner id"))?;

        let principal = self
            .principals
            .find_by_id(owner_id)
            .await?
            .ok_or(DomainError::PrincipalNotFound)?;

        let matches = self
            .hasher
            .verify(old_password, &principal.credential_digest)
            .map_err(DomainError::internal)?;
        if !matches {
            return Err(DomainError::InvalidCredentials);
        }

        let digest = self
            .hasher
            .hash(new_password)
            .map_err(DomainError::internal)?;
        if !self.principals.update_credential(owner_id, &digest).await? {
            return Err(DomainError::PrincipalNotFound);
        }

        tracing::info!(
            principal_id = %owner_id,
            event = "password_changed",
            "credential replaced"
        );

        Ok(())
    }

    /// Sign a session token for the principal
    fn sign_session(&self, principal: &Principal) -> DomainResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: principal.id.to_string(),
            role: principal.role.as_str().to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(self.config.token_ttl_hours)).timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret.as_bytes()),
        )
        .map_err(|e| DomainError::internal(format!("token signing failed: {}", e)))
    }

    fn validate_email(email: &str) -> DomainResult<String> {
        let email = email.trim().to_lowercase();
        if !cz_shared::utils::validation::is_valid_email(&email) {
            return Err(DomainError::invalid_request("Invalid Email"));
        }
        Ok(email)
    }

    fn validate_password(password: &str) -> DomainResult<()> {
        if password.len() < MIN_PASSWORD_LENGTH {
            return Err(DomainError::invalid_request(
                "Password must be at least 6 characters",
            ));
        }
        Ok(())
    }
}
