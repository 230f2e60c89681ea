//! Domain entities

pub mod principal;
pub mod verification_token;

pub use principal::{Principal, PrincipalProfile, PrincipalRole};
pub use verification_token::VerificationToken;
