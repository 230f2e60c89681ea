//! Handler for `POST /{role}/forgot-password`

use actix_web::{web, HttpResponse};
use validator::Validate;

use cz_core::domain::entities::PrincipalRole;
use cz_core::repositories::{PrincipalRepository, TokenRepository};
use cz_core::services::verification::{NotifierTrait, PasswordHasherTrait};
use cz_shared::ApiResponse;

use super::AppState;
use crate::dto::ForgotPasswordRequest;
use crate::handlers::error::{to_response, validation_response};

/// Start password recovery for an email address
///
/// Returns 201 with the account's public record so the client can call
/// `/forgotpassword/verifyotp` with the owner id.
pub async fn forgot_password<P, T, N, H>(
    state: web::Data<AppState<P, T, N, H>>,
    role: web::Data<PrincipalRole>,
    payload: web::Json<ForgotPasswordRequest>,
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

    match state
        .verification
        .begin_recovery(&payload.email, **role)
        .await
    {
        Ok(started) => HttpResponse::Created().json(ApiResponse::success_with(
            "Verification code sent to your email",
            started.profile,
        )),
        Err(err) => to_response(err),
    }
}
