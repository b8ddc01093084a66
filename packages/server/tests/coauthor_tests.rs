//! Integration tests for secondary co-author binding.

use chrono::Utc;
use outlet_core::common::errors::CoauthorError;
use outlet_core::domains::coauthors::{set_secondary_author, REVENUE_SPLIT};
use outlet_core::domains::votes::RoleCounts;
use outlet_core::kernel::test_dependencies::MemorySubmissionStore;
use uuid::Uuid;

#[tokio::test]
async fn binding_sets_the_fixed_split_and_lock() {
    let store = MemorySubmissionStore::new();
    let id = store.insert_published(Utc::now(), RoleCounts::default());

    let binding = set_secondary_author(&store, id, "0xCoAuthor").await.unwrap();

    assert_eq!(binding.wallet, "0xCoAuthor");
    assert_eq!(binding.split, REVENUE_SPLIT);
    assert!(binding.locked);

    let record = store
        .records()
        .into_iter()
        .find(|r| r.id == id)
        .unwrap();
    assert_eq!(record.secondary_author_wallet.as_deref(), Some("0xCoAuthor"));
    assert_eq!(record.secondary_author_split.as_deref(), Some("50_50"));
    assert!(record.secondary_author_locked);
}

#[tokio::test]
async fn rebinding_the_same_wallet_is_a_noop() {
    let store = MemorySubmissionStore::new();
    let id = store.insert_published(Utc::now(), RoleCounts::default());

    set_secondary_author(&store, id, "0xCoAuthor").await.unwrap();
    let err = set_secondary_author(&store, id, "0xCoAuthor")
        .await
        .unwrap_err();

    assert!(matches!(err, CoauthorError::NoOp));
}

#[tokio::test]
async fn whitespace_around_the_wallet_is_ignored() {
    let store = MemorySubmissionStore::new();
    let id = store.insert_published(Utc::now(), RoleCounts::default());

    set_secondary_author(&store, id, "0xCoAuthor").await.unwrap();
    let err = set_secondary_author(&store, id, "  0xCoAuthor  ")
        .await
        .unwrap_err();

    assert!(matches!(err, CoauthorError::NoOp));
}

#[tokio::test]
async fn a_different_wallet_replaces_the_binding() {
    let store = MemorySubmissionStore::new();
    let id = store.insert_published(Utc::now(), RoleCounts::default());

    set_secondary_author(&store, id, "0xFirst").await.unwrap();
    let binding = set_secondary_author(&store, id, "0xSecond").await.unwrap();

    assert_eq!(binding.wallet, "0xSecond");
}

#[tokio::test]
async fn empty_wallet_is_a_validation_error() {
    let store = MemorySubmissionStore::new();
    let id = store.insert_published(Utc::now(), RoleCounts::default());

    let err = set_secondary_author(&store, id, "   ").await.unwrap_err();
    assert!(matches!(err, CoauthorError::Validation(_)));
}

#[tokio::test]
async fn unknown_article_is_not_found() {
    let store = MemorySubmissionStore::new();
    let err = set_secondary_author(&store, Uuid::new_v4(), "0xCoAuthor")
        .await
        .unwrap_err();
    assert!(matches!(err, CoauthorError::NotFound));
}
