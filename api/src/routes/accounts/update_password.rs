//! Handler for `PUT /{role}/update-password/{id}`

use actix_web::{web, HttpResponse};
use validator::Validate;

use cz_core::repositories::{PrincipalRepository, TokenRepository};
use cz_core::services::verification::{NotifierTrait, PasswordHasherTrait};
use cz_shared::ApiResponse;

use super::AppState;
use crate::dto::UpdatePasswordRequest;
use crate::handlers::error::{to_response, validation_response};

/// Change an account's password, checking the current one first
pub async fn update_password<P, T, N, H>(
    state: web::Data<AppState<P, T, N, H>>,
    path: web::Path<String>,
    payload: web::Json<UpdatePasswordRequest>,
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

    let owner_id = path.into_inner();
    match state
        .accounts
        .change_password(&owner_id, &payload.old_password, &payload.new_password)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::<serde_json::Value>::success(
            "Password Changed Successfully",
        )),
        Err(err) => to_response(err),
    }
}
