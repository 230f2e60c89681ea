//! Account endpoint request payloads
//!
//! All payloads are camelCase on the wire. Validation here only rejects
//! outright malformed shapes; the services re-check domain rules.

use serde::Deserialize;
use validator::Validate;

/// Body of `POST /signup`
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[validate(email(message = "Invalid Email"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Body of `POST /signin`
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SigninRequest {
    #[validate(email(message = "Invalid Email"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Body of `POST /verifyotp` and `POST /forgotpassword/verifyotp`
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpRequest {
    #[validate(length(min = 1, message = "Invalid request, missing parameters!"))]
    pub owner_id: String,
    #[validate(length(min = 1, message = "Invalid request, missing parameters!"))]
    pub otp: String,
}

/// Body of `POST /forgot-password`
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordRequest {
    #[validate(email(message = "Invalid Email"))]
    pub email: String,
}

/// Body of `PUT /update-password/{id}`
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
    #[validate(length(min = 1, message = "Invalid request, missing parameters!"))]
    pub old_password: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub new_password: String,
}
