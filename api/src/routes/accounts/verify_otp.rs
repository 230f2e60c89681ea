//! Handler for `POST /{role}/verifyotp`

use actix_web::{web, HttpResponse};
use validator::Validate;

use cz_core::repositories::{PrincipalRepository, TokenRepository};
use cz_core::services::verification::{NotifierTrait, PasswordHasherTrait};
use cz_shared::ApiResponse;

use super::AppState;
use crate::dto::VerifyOtpRequest;
use crate::handlers::error::{to_response, validation_response};

/// Confirm the signup verification code
pub async fn verify_otp<P, T, N, H>(
    state: web::Data<AppState<P, T, N, H>>,
    payload: web::Json<VerifyOtpRequest>,
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
        .confirm_verification(&payload.owner_id, &payload.otp)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::<serde_json::Value>::success(
            "Your Email is Verified",
        )),
        Err(err) => to_response(err),
    }
}
