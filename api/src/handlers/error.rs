//! Mapping from domain errors to HTTP responses
//!
//! Every failure leaves the service as `{ success: false, message }`
//! with a status of 400 for rejected input, 404 for a missing account,
//! and 500 for infrastructure faults. Infrastructure detail never
//! reaches the client.

use actix_web::HttpResponse;
use validator::ValidationErrors;

use cz_core::errors::DomainError;
use cz_shared::ApiResponse;

/// Client-facing message for a domain error
pub fn client_message(err: &DomainError) -> String {
    match err {
        DomainError::InvalidRequest { message } => message.clone(),
        DomainError::PrincipalNotFound => "Sorry, User Not Found".to_string(),
        DomainError::TokenNotFound => "No verification code found for this account".to_string(),
        DomainError::CodeMismatch => "Please Enter Valid OTP".to_string(),
        DomainError::AlreadyVerified => "The Account is Already Verified".to_string(),
        DomainError::TokenExpired => "The verification code has expired".to_string(),
        DomainError::EmailAlreadyRegistered => {
            "Already have an account on this email".to_string()
        }
        DomainError::InvalidCredentials => "Wrong Password".to_string(),
        DomainError::Store { .. } | DomainError::Notifier { .. } | DomainError::Internal { .. } => {
            "Something went wrong, please try again".to_string()
        }
    }
}

/// Convert a domain error into the enveloped HTTP response
pub fn to_response(err: DomainError) -> HttpResponse {
    let message = client_message(&err);
    let body = ApiResponse::<serde_json::Value>::error(message);

    match err {
        DomainError::PrincipalNotFound => HttpResponse::NotFound().json(body),
        DomainError::Store { message } | DomainError::Internal { message } => {
            log::error!("request failed: {}", message);
            HttpResponse::InternalServerError().json(body)
        }
        DomainError::Notifier { message } => {
            log::error!("mail dispatch failed: {}", message);
            HttpResponse::InternalServerError().json(body)
        }
        _ => HttpResponse::BadRequest().json(body),
    }
}

/// Reject a payload that failed DTO validation, echoing the first
/// declared message
pub fn validation_response(errors: &ValidationErrors) -> HttpResponse {
    let message = errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Invalid request, missing parameters!".to_string());

    HttpResponse::BadRequest().json(ApiResponse::<serde_json::Value>::error(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = to_response(DomainError::PrincipalNotFound);
        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_store_failure_hides_detail() {
        let err = DomainError::store("connection refused to 10.0.0.5");
        assert_eq!(
            client_message(&err),
            "Something went wrong, please try again"
        );
    }

    #[test]
    fn test_domain_rejections_map_to_400() {
        for err in [
            DomainError::CodeMismatch,
            DomainError::AlreadyVerified,
            DomainError::TokenNotFound,
            DomainError::TokenExpired,
            DomainError::InvalidCredentials,
        ] {
            let response = to_response(err);
            assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
        }
    }
}
