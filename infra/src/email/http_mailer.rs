//! HTTP mail-API notifier implementation

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use cz_core::services::verification::NotifierTrait;
use cz_shared::config::MailConfig;

use super::templates;
use super::mask_email;

/// Request body accepted by the mail delivery API
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
}

/// Response body returned by the mail delivery API
#[derive(Debug, Deserialize)]
struct SendResponse {
    id: Option<String>,
}

/// Notifier that delivers email through a JSON mail API
pub struct HttpMailer {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    from_address: String,
}

impl HttpMailer {
    pub fn new(config: &MailConfig) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| format!("mail client init failed: {}", e))?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            from_address: config.from_address.clone(),
        })
    }

    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<String, String> {
        let body = SendRequest {
            from: &self.from_address,
            to,
            subject,
            html,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("mail request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            warn!(
                to = %mask_email(to),
                status = %status,
                "mail API rejected the message"
            );
            return Err(format!("mail API returned {}: {}", status, detail));
        }

        let parsed: SendResponse = response
            .json()
            .await
            .map_err(|e| format!("mail API response unreadable: {}", e))?;

        let message_id = parsed.id.unwrap_or_else(|| "unknown".to_string());
        debug!(to = %mask_email(to), message_id = %message_id, "mail accepted");
        Ok(message_id)
    }
}

#[async_trait]
impl NotifierTrait for HttpMailer {
    async fn send_otp(&self, email: &str, code: &str) -> Result<String, String> {
        self.send(email, templates::SUBJECT_VERIFY, &templates::otp_email(code))
            .await
    }

    async fn send_verification_success(&self, email: &str) -> Result<String, String> {
        self.send(
            email,
            templates::SUBJECT_VERIFIED,
            &templates::verification_success_email(),
        )
        .await
    }

    async fn send_new_password(&self, email: &str, password: &str) -> Result<String, String> {
        self.send(
            email,
            templates::SUBJECT_NEW_PASSWORD,
            &templates::new_password_email(password),
        )
        .await
    }
}
