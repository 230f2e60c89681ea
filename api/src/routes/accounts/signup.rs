//! Handler for `POST /{role}/signup`

use actix_web::{web, HttpResponse};
use validator::Validate;

use cz_core::domain::entities::PrincipalRole;
use cz_core::repositories::{PrincipalRepository, TokenRepository};
use cz_core::services::verification::{NotifierTrait, PasswordHasherTrait};
use cz_shared::ApiResponse;

use super::AppState;
use crate::dto::SignupRequest;
use crate::handlers::error::{to_response, validation_response};

/// Register an account and start email verification
///
/// Returns 201 with the new principal's public record; the client needs
/// the id to call `/verifyotp`.
pub async fn signup<P, T, N, H>(
    state: web::Data<AppState<P, T, N, H>>,
    role: web::Data<PrincipalRole>,
    payload: web::Json<SignupRequest>,
) -> HttpResponse
where
    P: PrincipalRepository + 'static,
    T: TokenRepository + 'static,
    N: NotifierTrait + 'static,
    H: PasswordHasherTrait + 'static,
{
    if let Err(errors) = payload.validate() {
        return validation_response(&errors);
    }

    let principal = match state
        .accounts
        .signup(&payload.email, &payload.password, **role)
        .await
    {
        Ok(principal) => principal,
        Err(err) => return to_response(err),
    };

    if let Err(err) = state.verification.begin_verification(&principal).await {
        return to_response(err);
    }

    HttpResponse::Created().json(ApiResponse::success_with(
        "Account created, verification code sent to your email",
        principal.profile(),
    ))
}
