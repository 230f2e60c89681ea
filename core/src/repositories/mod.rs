//! Repository interfaces and in-memory mocks

pub mod principal;
pub mod token;

pub use principal::{MockPrincipalRepository, PrincipalRepository};
pub use token::{MockTokenRepository, TokenRepository};
