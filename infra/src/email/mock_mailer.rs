//! In-memory mailer for development and tests

use std::sync::Mutex;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use cz_core::services::verification::NotifierTrait;

use super::mask_email;

/// A message captured by [`MockMailer`] instead of being sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedMail {
    Otp { email: String, code: String },
    VerificationSuccess { email: String },
    NewPassword { email: String, password: String },
}

/// Notifier that records messages in memory instead of sending
///
/// Selected with `MAIL_PROVIDER=mock`; each message is kept in an
/// in-process buffer and the OTP is also written to the log so the flow
/// can be exercised without a mail account.
#[derive(Default)]
pub struct MockMailer {
    sent: Mutex<Vec<RecordedMail>>,
}

impl MockMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every message recorded so far, oldest first.
    pub fn sent_messages(&self) -> Vec<RecordedMail> {
        match self.sent.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// The most recent OTP recorded for `email`, if any.
    pub fn last_otp_for(&self, email: &str) -> Option<String> {
        self.sent_messages()
            .into_iter()
            .rev()
            .find_map(|mail| match mail {
                RecordedMail::Otp { email: to, code } if to == email => Some(code),
                _ => None,
            })
    }

    fn record(&self, mail: RecordedMail) {
        match self.sent.lock() {
            Ok(mut guard) => guard.push(mail),
            Err(poisoned) => poisoned.into_inner().push(mail),
        }
    }

    fn fake_id() -> String {
        format!("mock-{}", Uuid::new_v4())
    }
}

#[async_trait]
impl NotifierTrait for MockMailer {
    async fn send_otp(&self, email: &str, code: &str) -> Result<String, String> {
        info!(to = %mask_email(email), code = %code, "mock mailer: OTP email");
        self.record(RecordedMail::Otp {
            email: email.to_string(),
            code: code.to_string(),
        });
        Ok(Self::fake_id())
    }

    async fn send_verification_success(&self, email: &str) -> Result<String, String> {
        info!(to = %mask_email(email), "mock mailer: verification confirmation");
        self.record(RecordedMail::VerificationSuccess {
            email: email.to_string(),
        });
        Ok(Self::fake_id())
    }

    async fn send_new_password(&self, email: &str, password: &str) -> Result<String, String> {
        info!(
            to = %mask_email(email),
            password_length = password.len(),
            "mock mailer: new password email"
        );
        self.record(RecordedMail::NewPassword {
            email: email.to_string(),
            password: password.to_string(),
        });
        Ok(Self::fake_id())
    }
}
