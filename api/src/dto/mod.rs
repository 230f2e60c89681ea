//! Request payloads

mod accounts;

pub use accounts::{
    ForgotPasswordRequest, SigninRequest, SignupRequest, UpdatePasswordRequest, VerifyOtpRequest,
};
