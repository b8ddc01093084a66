pub mod snapshot;

pub use snapshot::{snapshot_at, vote_snapshot, RoleCounts, VoteRead, VoteSnapshot, VOTE_WINDOW_HOURS};
