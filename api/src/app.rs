//! Application factory
//!
//! Builds the Actix-web application with both role scopes mounted over
//! the same generic handlers; the scope-level `PrincipalRole` data tells
//! each handler which kind of account it is serving.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use cz_core::domain::entities::PrincipalRole;
use cz_core::repositories::{PrincipalRepository, TokenRepository};
use cz_core::services::verification::{NotifierTrait, PasswordHasherTrait};
use cz_shared::ApiResponse;

use crate::middleware::cors::create_cors;
use crate::routes::accounts::{
    forgot_password, recover_password, signin, signup, update_password, verify_otp, AppState,
};

/// Create and configure the application with all dependencies
pub fn create_app<P, T, N, H>(
    app_state: web::Data<AppState<P, T, N, H>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    P: PrincipalRepository + 'static,
    T: TokenRepository + 'static,
    N: NotifierTrait + 'static,
    H: PasswordHasherTrait + 'static,
{
    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        .wrap(create_cors())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .service(role_scope::<P, T, N, H>("/patients", PrincipalRole::Patient))
                .service(role_scope::<P, T, N, H>("/doctors", PrincipalRole::Doctor)),
        )
        .default_service(web::route().to(not_found))
}

/// Mount the account lifecycle routes for one principal role
fn role_scope<P, T, N, H>(
    path: &str,
    role: PrincipalRole,
) -> actix_web::Scope
where
    P: PrincipalRepository + 'static,
    T: TokenRepository + 'static,
    N: NotifierTrait + 'static,
    H: PasswordHasherTrait + 'static,
{
    web::scope(path)
        .app_data(web::Data::new(role))
        .route("/signup", web::post().to(signup::<P, T, N, H>))
        .route("/signin", web::post().to(signin::<P, T, N, H>))
        .route("/verifyotp", web::post().to(verify_otp::<P, T, N, H>))
        .route("/forgot-password", web::post().to(forgot_password::<P, T, N, H>))
        .route(
            "/forgotpassword/verifyotp",
            web::post().to(recover_password::<P, T, N, H>),
        )
        .route(
            "/update-password/{id}",
            web::put().to(update_password::<P, T, N, H>),
        )
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "curezone-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::<serde_json::Value>::error("Route not found"))
}
