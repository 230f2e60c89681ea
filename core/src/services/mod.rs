//! Business services

pub mod account;
pub mod verification;

pub use account::AccountService;
pub use verification::VerificationService;
