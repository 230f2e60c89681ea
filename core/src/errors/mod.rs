//! Domain-specific error types and error handling.
//!
//! Every failure a flow can produce is an explicit variant; flows never
//! panic and never leak a raw store error upward. Presentation-layer
//! concerns (HTTP status, response body) live in the api crate.

use thiserror::Error;

/// Core domain errors for the verification, recovery, and account flows
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("Principal not found")]
    PrincipalNotFound,

    #[error("No verification token outstanding for this account")]
    TokenNotFound,

    #[error("The submitted code does not match")]
    CodeMismatch,

    #[error("The account is already verified")]
    AlreadyVerified,

    #[error("The verification code has expired")]
    TokenExpired,

    #[error("An account already exists for this email")]
    EmailAlreadyRegistered,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Store failure: {message}")]
    Store { message: String },

    #[error("Notifier failure: {message}")]
    Notifier { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Stable machine-readable code for each variant
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::InvalidRequest { .. } => "INVALID_REQUEST",
            DomainError::PrincipalNotFound => "PRINCIPAL_NOT_FOUND",
            DomainError::TokenNotFound => "TOKEN_NOT_FOUND",
            DomainError::CodeMismatch => "CODE_MISMATCH",
            DomainError::AlreadyVerified => "ALREADY_VERIFIED",
            DomainError::TokenExpired => "TOKEN_EXPIRED",
            DomainError::EmailAlreadyRegistered => "EMAIL_ALREADY_REGISTERED",
            DomainError::InvalidCredentials => "INVALID_CREDENTIALS",
            DomainError::Store { .. } => "STORE_FAILURE",
            DomainError::Notifier { .. } => "NOTIFIER_FAILURE",
            DomainError::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// Shorthand for a malformed-input failure
    pub fn invalid_request(message: impl Into<String>) -> Self {
        DomainError::InvalidRequest {
            message: message.into(),
        }
    }

    /// Shorthand for wrapping a persistence-layer error
    pub fn store(message: impl std::fmt::Display) -> Self {
        DomainError::Store {
            message: message.to_string(),
        }
    }

    /// Shorthand for an unexpected internal failure
    pub fn internal(message: impl std::fmt::Display) -> Self {
        DomainError::Internal {
            message: message.to_string(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
