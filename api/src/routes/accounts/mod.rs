//! Account lifecycle endpoints, shared by the patient and doctor scopes
//!
//! Each handler is generic over the repository and collaborator traits;
//! the scope it is mounted under injects the `PrincipalRole` it serves.

pub mod forgot_password;
pub mod recover_password;
pub mod signin;
pub mod signup;
pub mod update_password;
pub mod verify_otp;

pub use forgot_password::forgot_password;
pub use recover_password::recover_password;
pub use signin::signin;
pub use signup::signup;
pub use update_password::update_password;
pub use verify_otp::verify_otp;

use std::sync::Arc;

use cz_core::repositories::{PrincipalRepository, TokenRepository};
use cz_core::services::account::AccountService;
use cz_core::services::verification::{NotifierTrait, PasswordHasherTrait, VerificationService};

/// Shared services handed to every handler
pub struct AppState<P, T, N, H>
where
    P: PrincipalRepository,
    T: TokenRepository,
    N: NotifierTrait,
    H: PasswordHasherTrait,
{
    pub accounts: Arc<AccountService<P, H>>,
    pub verification: Arc<VerificationService<P, T, N, H>>,
}
