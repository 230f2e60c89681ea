//! Configuration for the account service

/// Default lifetime of a signed session token
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

/// Configuration for the account service
#[derive(Debug, Clone)]
pub struct AccountConfig {
    /// HMAC secret used to sign session tokens
    pub jwt_secret: String,
    /// Hours before a session token expires
    pub token_ttl_hours: i64,
}

impl AccountConfig {
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            token_ttl_hours: DEFAULT_TOKEN_TTL_HOURS,
        }
    }
}
