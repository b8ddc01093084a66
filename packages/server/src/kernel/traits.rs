// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic. The submission
// gate and the read paths are domain code that use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseFeeVerifier)

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use press_gateway::{FeeVerifyRequest, ModerationRequest, ModerationVerdict};
use uuid::Uuid;

use crate::domains::submissions::models::submission::{
    NewSubmission, SubmissionRecord, SubmissionStatus,
};

// =============================================================================
// Fee Verifier Trait (Infrastructure - installer API)
// =============================================================================

#[async_trait]
pub trait BaseFeeVerifier: Send + Sync {
    /// Check a fee payment on-chain. `Ok(false)` means the payment did not
    /// satisfy the requirement; `Err` means the verifier could not answer.
    async fn verify(&self, req: &FeeVerifyRequest) -> Result<bool>;
}

// =============================================================================
// Content Moderator Trait (Infrastructure - AI moderation endpoint)
// =============================================================================

#[async_trait]
pub trait BaseContentModerator: Send + Sync {
    /// Review a submission against the outlet policy. `Err` means the
    /// moderator was unreachable or answered something unusable.
    async fn review(&self, req: &ModerationRequest) -> Result<ModerationVerdict>;
}

// =============================================================================
// Submission Store Trait (Infrastructure - persistence)
// =============================================================================

#[async_trait]
pub trait BaseSubmissionStore: Send + Sync {
    /// Persist a fee-verified submission in `awaiting_moderation`.
    async fn create(&self, new: NewSubmission) -> Result<SubmissionRecord>;

    /// Transition to `published`, recording provenance.
    async fn publish(
        &self,
        id: Uuid,
        provenance_hash: &str,
        published_at: DateTime<Utc>,
    ) -> Result<()>;

    /// Transition to `rejected`, recording the moderator's reason.
    async fn reject(&self, id: Uuid, reason: &str) -> Result<()>;

    async fn find(&self, id: Uuid) -> Result<Option<SubmissionRecord>>;

    async fn list_by_status(
        &self,
        status: SubmissionStatus,
        limit: i64,
    ) -> Result<Vec<SubmissionRecord>>;

    /// Record a secondary co-author binding (wallet, split, lock flag).
    async fn bind_secondary_author(&self, id: Uuid, wallet: &str, split: &str) -> Result<()>;

    /// Connectivity check for the health endpoint.
    async fn ping(&self) -> Result<()>;
}
