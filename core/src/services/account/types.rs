//! Types for account service results

use serde::{Deserialize, Serialize};

/// Claims carried by a signed session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Principal id
    pub sub: String,
    /// Principal role ("patient" or "doctor")
    pub role: String,
    /// Issued-at, seconds since the epoch
    pub iat: i64,
    /// Expiry, seconds since the epoch
    pub exp: i64,
}

/// An authenticated session handed back on successful signin
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Address the session belongs to
    pub email: String,
    /// Signed bearer token
    pub token: String,
    /// Whether the account has completed email verification
    pub otp_verified: bool,
}
