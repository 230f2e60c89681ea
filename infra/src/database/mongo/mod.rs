//! MongoDB implementations of the repository traits

mod documents;
mod principal_repository_impl;
mod token_repository_impl;

pub use documents::{PrincipalDocument, TokenDocument};
pub use principal_repository_impl::MongoPrincipalRepository;
pub use token_repository_impl::MongoTokenRepository;

/// Collection holding patient and doctor accounts
pub const PRINCIPALS: &str = "principals";
/// Collection holding outstanding OTP tokens
pub const VERIFICATION_TOKENS: &str = "verification_tokens";
