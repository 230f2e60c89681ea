//! End-to-end tests for the account lifecycle routes
//!
//! The full Actix application is exercised against in-memory
//! repositories and the logging-only mailer; OTP codes are read back
//! through the token repository.

use std::sync::Arc;

use actix_web::{test, web};
use serde_json::{json, Value};
use uuid::Uuid;

use cz_api::app::create_app;
use cz_api::routes::accounts::AppState;
use cz_core::repositories::{
    MockPrincipalRepository, MockTokenRepository, TokenRepository,
};
use cz_core::services::account::{AccountConfig, AccountService};
use cz_core::services::verification::{VerificationConfig, VerificationService};
use cz_infra::{BcryptHasher, MockMailer};

type State = AppState<MockPrincipalRepository, MockTokenRepository, MockMailer, BcryptHasher>;

fn build_state() -> (Arc<MockTokenRepository>, web::Data<State>) {
    let principals = Arc::new(MockPrincipalRepository::new());
    let tokens = Arc::new(MockTokenRepository::new());
    let notifier = Arc::new(MockMailer::new());
    // Minimum bcrypt cost keeps the suite fast
    let hasher = Arc::new(BcryptHasher::new(4));

    let accounts = Arc::new(AccountService::new(
        principals.clone(),
        hasher.clone(),
        AccountConfig::new("test-secret"),
    ));
    let verification = Arc::new(VerificationService::new(
        principals,
        tokens.clone(),
        notifier,
        hasher,
        VerificationConfig::default(),
    ));

    (
        tokens,
        web::Data::new(AppState {
            accounts,
            verification,
        }),
    )
}

fn signup_req(scope: &str, email: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri(&format!("/api/v1/{}/signup", scope))
        .set_json(json!({ "email": email, "password": "secret1" }))
}

#[actix_web::test]
async fn test_signup_then_verify_flow() {
    let (tokens, state) = build_state();
    let app = test::init_service(create_app(state)).await;

    let body: Value =
        test::call_and_read_body_json(&app, signup_req("patients", "a@x.com").to_request()).await;
    assert_eq!(body["success"], true);
    let owner_id = body["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["data"]["otpVerified"], false);

    // Read the issued code back from the store
    let owner: Uuid = owner_id.parse().unwrap();
    let token = tokens.find_by_owner(owner).await.unwrap().unwrap();
    assert_eq!(token.code.len(), 4);

    let req = test::TestRequest::post()
        .uri("/api/v1/patients/verifyotp")
        .set_json(json!({ "ownerId": owner_id, "otp": token.code }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Your Email is Verified");

    // Replay is rejected
    let req = test::TestRequest::post()
        .uri("/api/v1/patients/verifyotp")
        .set_json(json!({ "ownerId": owner_id, "otp": token.code }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "The Account is Already Verified");
}

#[actix_web::test]
async fn test_verify_with_wrong_code() {
    let (tokens, state) = build_state();
    let app = test::init_service(create_app(state)).await;

    let body: Value =
        test::call_and_read_body_json(&app, signup_req("patients", "a@x.com").to_request()).await;
    let owner_id = body["data"]["id"].as_str().unwrap().to_string();
    let owner: Uuid = owner_id.parse().unwrap();
    let token = tokens.find_by_owner(owner).await.unwrap().unwrap();
    let wrong = if token.code == "0000" { "0001" } else { "0000" };

    let req = test::TestRequest::post()
        .uri("/api/v1/patients/verifyotp")
        .set_json(json!({ "ownerId": owner_id, "otp": wrong }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Please Enter Valid OTP");

    // Token survives a failed attempt
    assert!(tokens.find_by_owner(owner).await.unwrap().is_some());
}

#[actix_web::test]
async fn test_verify_unknown_owner_is_404() {
    let (_, state) = build_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/patients/verifyotp")
        .set_json(json!({ "ownerId": Uuid::new_v4().to_string(), "otp": "1234" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Sorry, User Not Found");
}

#[actix_web::test]
async fn test_verify_missing_otp_is_rejected() {
    let (_, state) = build_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/patients/verifyotp")
        .set_json(json!({ "ownerId": Uuid::new_v4().to_string(), "otp": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn test_signin_after_signup() {
    let (_, state) = build_state();
    let app = test::init_service(create_app(state)).await;
    let _: Value =
        test::call_and_read_body_json(&app, signup_req("doctors", "doc@x.com").to_request()).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/doctors/signin")
        .set_json(json!({ "email": "doc@x.com", "password": "secret1" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert!(!body["data"]["token"].as_str().unwrap().is_empty());
    assert_eq!(body["data"]["otpVerified"], false);

    let req = test::TestRequest::post()
        .uri("/api/v1/doctors/signin")
        .set_json(json!({ "email": "doc@x.com", "password": "wrong-password" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Wrong Password");
}

#[actix_web::test]
async fn test_roles_are_isolated() {
    let (_, state) = build_state();
    let app = test::init_service(create_app(state)).await;
    let _: Value =
        test::call_and_read_body_json(&app, signup_req("patients", "a@x.com").to_request()).await;

    // A patient account does not exist under the doctor scope
    let req = test::TestRequest::post()
        .uri("/api/v1/doctors/signin")
        .set_json(json!({ "email": "a@x.com", "password": "secret1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_duplicate_signup_is_rejected() {
    let (_, state) = build_state();
    let app = test::init_service(create_app(state)).await;
    let _: Value =
        test::call_and_read_body_json(&app, signup_req("patients", "a@x.com").to_request()).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/patients/signup")
        .set_json(json!({ "email": "a@x.com", "password": "secret2" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Already have an account on this email");
}

#[actix_web::test]
async fn test_forgot_password_flow() {
    let (tokens, state) = build_state();
    let app = test::init_service(create_app(state)).await;
    let _: Value =
        test::call_and_read_body_json(&app, signup_req("patients", "a@x.com").to_request()).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/patients/forgot-password")
        .set_json(json!({ "email": "a@x.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let body: Value = test::read_body_json(resp).await;
    let owner_id = body["data"]["id"].as_str().unwrap().to_string();

    let owner: Uuid = owner_id.parse().unwrap();
    let token = tokens.find_by_owner(owner).await.unwrap().unwrap();

    let req = test::TestRequest::post()
        .uri("/api/v1/patients/forgotpassword/verifyotp")
        .set_json(json!({ "ownerId": owner_id, "otp": token.code }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(
        body["message"],
        "Password has been sent to your email a@x.com"
    );

    // Old password no longer works
    let req = test::TestRequest::post()
        .uri("/api/v1/patients/signin")
        .set_json(json!({ "email": "a@x.com", "password": "secret1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_forgot_password_unknown_email_is_404() {
    let (_, state) = build_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/patients/forgot-password")
        .set_json(json!({ "email": "nobody@x.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_update_password() {
    let (_, state) = build_state();
    let app = test::init_service(create_app(state)).await;
    let body: Value =
        test::call_and_read_body_json(&app, signup_req("patients", "a@x.com").to_request()).await;
    let owner_id = body["data"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/patients/update-password/{}", owner_id))
        .set_json(json!({ "oldPassword": "secret1", "newPassword": "secret2" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Password Changed Successfully");

    // New password signs in, old one does not
    let req = test::TestRequest::post()
        .uri("/api/v1/patients/signin")
        .set_json(json!({ "email": "a@x.com", "password": "secret2" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/patients/update-password/{}", owner_id))
        .set_json(json!({ "oldPassword": "secret1", "newPassword": "secret3" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Wrong Password");
}

#[actix_web::test]
async fn test_health_endpoint() {
    let (_, state) = build_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");
}
