//! Integration tests for the 72h approval vote read path.

use std::sync::Arc;

use chrono::{Duration, Utc};
use outlet_core::domains::votes::{vote_snapshot, RoleCounts, VoteRead, VOTE_WINDOW_HOURS};
use outlet_core::kernel::test_dependencies::MemorySubmissionStore;
use outlet_core::kernel::BaseSubmissionStore;
use uuid::Uuid;

#[tokio::test]
async fn snapshot_reports_counts_and_open_window() {
    let store = Arc::new(MemorySubmissionStore::new());
    let published = Utc::now() - Duration::hours(1);
    let counts = RoleCounts {
        journalist: 3,
        editor: 1,
        outlet: 1,
        community: 12,
    };
    let id = store.insert_published(published, counts);

    let snap = match vote_snapshot(store.as_ref(), id).await.unwrap() {
        VoteRead::Window(snap) => snap,
        other => panic!("expected a vote window, got {other:?}"),
    };

    assert!(snap.open);
    assert_eq!(snap.counts, counts);
    assert_eq!(snap.ends_at, published + Duration::hours(VOTE_WINDOW_HOURS));
}

#[tokio::test]
async fn window_closes_after_72_hours() {
    let store = Arc::new(MemorySubmissionStore::new());
    let published = Utc::now() - Duration::hours(VOTE_WINDOW_HOURS) - Duration::seconds(1);
    let id = store.insert_published(published, RoleCounts::default());

    let snap = match vote_snapshot(store.as_ref(), id).await.unwrap() {
        VoteRead::Window(snap) => snap,
        other => panic!("expected a vote window, got {other:?}"),
    };

    assert!(!snap.open);
}

#[tokio::test]
async fn unknown_article_is_not_found() {
    let store = MemorySubmissionStore::new();
    let read = vote_snapshot(&store, Uuid::new_v4()).await.unwrap();
    assert!(matches!(read, VoteRead::NotFound));
}

#[tokio::test]
async fn unpublished_article_has_counters_but_no_window() {
    let store = MemorySubmissionStore::new();
    let record = store
        .create(outlet_core::domains::submissions::NewSubmission {
            title: "Pending piece".to_string(),
            content: "Still in the queue".to_string(),
            image_url: None,
            fee_amount: 25.0,
            fee_asset: "0xPressToken".to_string(),
            tx_reference: "0xfeed".to_string(),
        })
        .await
        .unwrap();

    let counts = match vote_snapshot(&store, record.id).await.unwrap() {
        VoteRead::NotPublished { counts } => counts,
        other => panic!("expected no window, got {other:?}"),
    };
    assert_eq!(counts, RoleCounts::default());
}
