//! Email delivery module
//!
//! `HttpMailer` talks to an HTTP mail-delivery API; `MockMailer` records
//! messages in memory instead of sending and is meant for development
//! and tests.

pub mod templates;

mod http_mailer;
mod mock_mailer;

pub use http_mailer::HttpMailer;
pub use mock_mailer::{MockMailer, RecordedMail};

use async_trait::async_trait;

use cz_core::services::verification::NotifierTrait;
use cz_shared::config::MailConfig;

/// Notifier selected by the `MAIL_PROVIDER` setting
pub enum Mailer {
    Http(HttpMailer),
    Mock(MockMailer),
}

impl Mailer {
    pub fn from_config(config: &MailConfig) -> Result<Self, String> {
        match config.provider.as_str() {
            "mock" => Ok(Self::Mock(MockMailer::new())),
            "http" => Ok(Self::Http(HttpMailer::new(config)?)),
            other => Err(format!("unknown mail provider '{}'", other)),
        }
    }
}

#[async_trait]
impl NotifierTrait for Mailer {
    async fn send_otp(&self, email: &str, code: &str) -> Result<String, String> {
        match self {
            Self::Http(m) => m.send_otp(email, code).await,
            Self::Mock(m) => m.send_otp(email, code).await,
        }
    }

    async fn send_verification_success(&self, email: &str) -> Result<String, String> {
        match self {
            Self::Http(m) => m.send_verification_success(email).await,
            Self::Mock(m) => m.send_verification_success(email).await,
        }
    }

    async fn send_new_password(&self, email: &str, password: &str) -> Result<String, String> {
        match self {
            Self::Http(m) => m.send_new_password(email, password).await,
            Self::Mock(m) => m.send_new_password(email, password).await,
        }
    }
}

/// Mask an email address for log output, keeping only the first
/// character of the local part and the domain
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let head = local.chars().next().unwrap_or('*');
            format!("{}***@{}", head, domain)
        }
        None => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::mask_email;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("alice@example.com"), "a***@example.com");
        assert_eq!(mask_email("not-an-address"), "***");
    }
}
