//! Handler for `POST /{role}/forgotpassword/verifyotp`

use actix_web::{web, HttpResponse};
use validator::Validate;

use cz_core::repositories::{PrincipalRepository, TokenRepository};
use cz_core::services::verification::{NotifierTrait, PasswordHasherTrait};
use cz_shared::ApiResponse;

use super::AppState;
use crate::dto::VerifyOtpRequest;
use crate::handlers::error::{to_response, validation_response};

/// Confirm the recovery code and mail out a regenerated password
pub async fn recover_password<P, T, N, H>(
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
        .confirm_recovery(&payload.owner_id, &payload.otp)
        .await
    {
        Ok(ack) => HttpResponse::Ok().json(ApiResponse::<serde_json::Value>::success(format!(
            "Password has been sent to your email {}",
            ack.email
        ))),
        Err(err) => to_response(err),
    }
}
