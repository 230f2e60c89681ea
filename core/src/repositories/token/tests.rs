//! Tests for the mock token repository

use uuid::Uuid;

use crate::domain::entities::VerificationToken;
use crate::repositories::token::{MockTokenRepository, TokenRepository};

#[tokio::test]
async fn test_insert_and_find_by_owner() {
    let repo = MockTokenRepository::new();
    let owner = Uuid::new_v4();
    let token = VerificationToken::new(owner);

    repo.insert(token.clone()).await.unwrap();

    let found = repo.find_by_owner(owner).await.unwrap().unwrap();
    assert_eq!(found.id, token.id);

    assert!(repo.find_by_owner(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_find_by_owner_and_code_exact() {
    let repo = MockTokenRepository::new();
    let owner = Uuid::new_v4();
    let mut token = VerificationToken::new(owner);
    token.code = "1234".to_string();
    repo.insert(token).await.unwrap();

    assert!(repo
        .find_by_owner_and_code(owner, "1234")
        .await
        .unwrap()
        .is_some());
    assert!(repo
        .find_by_owner_and_code(owner, "9999")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_delete_by_id() {
    let repo = MockTokenRepository::new();
    let token = VerificationToken::new(Uuid::new_v4());
    let id = token.id;
    repo.insert(token).await.unwrap();

    assert!(repo.delete_by_id(id).await.unwrap());
    assert!(!repo.delete_by_id(id).await.unwrap());
}

#[tokio::test]
async fn test_delete_by_owner_removes_all() {
    let repo = MockTokenRepository::new();
    let owner = Uuid::new_v4();
    repo.insert(VerificationToken::new(owner)).await.unwrap();
    repo.insert(VerificationToken::new(owner)).await.unwrap();
    repo.insert(VerificationToken::new(Uuid::new_v4()))
        .await
        .unwrap();

    assert_eq!(repo.delete_by_owner(owner).await.unwrap(), 2);
    assert_eq!(repo.len().await, 1);
}
