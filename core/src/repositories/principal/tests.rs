//! Tests for the mock principal repository

use uuid::Uuid;

use crate::domain::entities::{Principal, PrincipalRole};
use crate::repositories::principal::{MockPrincipalRepository, PrincipalRepository};

fn patient(email: &str) -> Principal {
    Principal::new(email, "digest".to_string(), PrincipalRole::Patient)
}

#[tokio::test]
async fn test_insert_and_find() {
    let repo = MockPrincipalRepository::new();
    let principal = patient("a@x.com");
    let id = principal.id;

    repo.insert(principal).await.unwrap();

    let by_id = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(by_id.email, "a@x.com");

    let by_email = repo
        .find_by_email("a@x.com", PrincipalRole::Patient)
        .await
        .unwrap();
    assert!(by_email.is_some());
}

#[tokio::test]
async fn test_email_unique_per_role() {
    let repo = MockPrincipalRepository::new();
    repo.insert(patient("a@x.com")).await.unwrap();

    // Same email, same role: rejected
    assert!(repo.insert(patient("a@x.com")).await.is_err());

    // Same email, other role: allowed
    let doctor = Principal::new("a@x.com", "digest".to_string(), PrincipalRole::Doctor);
    assert!(repo.insert(doctor).await.is_ok());
}

#[tokio::test]
async fn test_mark_verified_is_one_shot() {
    let repo = MockPrincipalRepository::new();
    let principal = patient("a@x.com");
    let id = principal.id;
    repo.insert(principal).await.unwrap();

    assert!(repo.mark_verified(id).await.unwrap());
    // Second transition must not win
    assert!(!repo.mark_verified(id).await.unwrap());

    let stored = repo.find_by_id(id).await.unwrap().unwrap();
    assert!(stored.otp_verified);
}

#[tokio::test]
async fn test_mark_verified_unknown_id() {
    let repo = MockPrincipalRepository::new();
    assert!(!repo.mark_verified(Uuid::new_v4()).await.unwrap());
}

#[tokio::test]
async fn test_update_credential() {
    let repo = MockPrincipalRepository::new();
    let principal = patient("a@x.com");
    let id = principal.id;
    repo.insert(principal).await.unwrap();

    assert!(repo.update_credential(id, "new-digest").await.unwrap());
    let stored = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.credential_digest, "new-digest");

    assert!(!repo
        .update_credential(Uuid::new_v4(), "other")
        .await
        .unwrap());
}
