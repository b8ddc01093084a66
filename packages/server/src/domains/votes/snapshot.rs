//! Read path for article approval votes.
//!
//! Voting itself is an on-chain concern owned by the gateway; this module
//! only exposes stored per-role counters and computes how much of the 72h
//! approval window remains. Nothing here mutates state.

use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::kernel::BaseSubmissionStore;

/// Length of the approval vote window, counted from provenance time.
pub const VOTE_WINDOW_HOURS: i64 = 72;

/// Per-role vote counters, reported verbatim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RoleCounts {
    pub journalist: i64,
    pub editor: i64,
    pub outlet: i64,
    pub community: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct VoteSnapshot {
    pub counts: RoleCounts,
    pub ends_at: DateTime<Utc>,
    pub open: bool,
}

/// Snapshot at an explicit query time. The window is half-open: a query at
/// exactly `provenance_ts + 72h` sees a closed vote.
pub fn snapshot_at(
    provenance_ts: DateTime<Utc>,
    counts: RoleCounts,
    now: DateTime<Utc>,
) -> VoteSnapshot {
    let ends_at = provenance_ts + Duration::hours(VOTE_WINDOW_HOURS);
    VoteSnapshot {
        counts,
        ends_at,
        open: now < ends_at,
    }
}

/// What a vote read can find for an article id.
#[derive(Debug, Clone)]
pub enum VoteRead {
    /// No such article.
    NotFound,
    /// The article exists but was never published; counters are reported
    /// with no window, never open.
    NotPublished { counts: RoleCounts },
    Window(VoteSnapshot),
}

/// Current vote state for an article.
pub async fn vote_snapshot(store: &dyn BaseSubmissionStore, article_id: Uuid) -> Result<VoteRead> {
    let Some(record) = store.find(article_id).await? else {
        return Ok(VoteRead::NotFound);
    };
    let Some(provenance_ts) = record.provenance_ts else {
        return Ok(VoteRead::NotPublished {
            counts: record.votes,
        });
    };
    Ok(VoteRead::Window(snapshot_at(
        provenance_ts,
        record.votes,
        Utc::now(),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn window_is_open_strictly_before_72h() {
        let published = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        let just_before = published + Duration::hours(72) - Duration::seconds(1);
        let snap = snapshot_at(published, RoleCounts::default(), just_before);
        assert!(snap.open);
    }

    #[test]
    fn window_is_closed_at_exactly_72h() {
        let published = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        let boundary = published + Duration::hours(72);
        let snap = snapshot_at(published, RoleCounts::default(), boundary);
        assert!(!snap.open);
        assert_eq!(snap.ends_at, boundary);
    }
}
