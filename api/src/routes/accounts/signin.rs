//! Handler for `POST /{role}/signin`

use actix_web::{web, HttpResponse};
use validator::Validate;

use cz_core::domain::entities::PrincipalRole;
use cz_core::repositories::{PrincipalRepository, TokenRepository};
use cz_core::services::verification::{NotifierTrait, PasswordHasherTrait};
use cz_shared::ApiResponse;

use super::AppState;
use crate::dto::SigninRequest;
use crate::handlers::error::{to_response, validation_response};

/// Authenticate and hand back a signed session token
pub async fn signin<P, T, N, H>(
    state: web::Data<AppState<P, T, N, H>>,
    role: web::Data<PrincipalRole>,
    payload: web::Json<SigninRequest>,
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
        .accounts
        .signin(&payload.email, &payload.password, **role)
        .await
    {
        Ok(session) => HttpResponse::Ok().json(ApiResponse::success_with("Signed in", session)),
        Err(err) => to_response(err),
    }
}
