//! Outbound mail (notifier) configuration module

use serde::{Deserialize, Serialize};

/// Configuration for the outbound email service
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// Mail provider ("http" for the JSON mail API, "mock" for development)
    pub provider: String,

    /// Base URL of the JSON mail API
    pub api_url: String,

    /// API key for the mail provider
    pub api_key: String,

    /// Sender address placed on every outbound message
    pub from_address: String,

    /// Timeout for mail API requests in seconds
    pub request_timeout_secs: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            provider: String::from("mock"),
            api_url: String::new(),
            api_key: String::new(),
            from_address: String::from("curezone01@gmail.com"),
            request_timeout_secs: 30,
        }
    }
}

impl MailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            provider: std::env::var("MAIL_PROVIDER").unwrap_or_else(|_| "mock".to_string()),
            api_url: std::env::var("MAIL_API_URL").unwrap_or_default(),
            api_key: std::env::var("MAIL_API_KEY").unwrap_or_default(),
            from_address: std::env::var("MAIL_FROM_ADDRESS")
                .unwrap_or_else(|_| "curezone01@gmail.com".to_string()),
            request_timeout_secs: std::env::var("MAIL_REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),
        }
    }
}
