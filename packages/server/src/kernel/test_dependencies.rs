// TestDependencies - mock implementations for testing
//
// Provides mock collaborators and an in-memory store that can be injected
// into the submission gate and read paths for tests.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use press_gateway::{FeeVerifyRequest, ModerationRequest, ModerationVerdict};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use super::{BaseContentModerator, BaseFeeVerifier, BaseSubmissionStore};
use crate::domains::submissions::models::submission::{
    NewSubmission, SubmissionRecord, SubmissionStatus,
};
use crate::domains::votes::RoleCounts;

// =============================================================================
// Mock Fee Verifier
// =============================================================================

pub struct MockFeeVerifier {
    results: Arc<Mutex<Vec<bool>>>,
    unreachable: bool,
    calls: Arc<Mutex<Vec<FeeVerifyRequest>>>,
}

impl MockFeeVerifier {
    pub fn new() -> Self {
        Self {
            results: Arc::new(Mutex::new(Vec::new())),
            unreachable: false,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a verification result to be returned
    pub fn with_result(self, verified: bool) -> Self {
        self.results.lock().unwrap().push(verified);
        self
    }

    /// Make every call fail as if the installer were down
    pub fn unreachable(mut self) -> Self {
        self.unreachable = true;
        self
    }

    /// Get all fee checks that were requested
    pub fn calls(&self) -> Vec<FeeVerifyRequest> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockFeeVerifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseFeeVerifier for MockFeeVerifier {
    async fn verify(&self, req: &FeeVerifyRequest) -> Result<bool> {
        self.calls.lock().unwrap().push(req.clone());
        if self.unreachable {
            anyhow::bail!("connection refused");
        }
        let mut results = self.results.lock().unwrap();
        if results.is_empty() {
            Ok(true)
        } else {
            Ok(results.remove(0))
        }
    }
}

// =============================================================================
// Mock Content Moderator
// =============================================================================

pub struct MockContentModerator {
    verdicts: Arc<Mutex<Vec<ModerationVerdict>>>,
    unreachable: bool,
    calls: Arc<Mutex<Vec<ModerationRequest>>>,
}

impl MockContentModerator {
    pub fn new() -> Self {
        Self {
            verdicts: Arc::new(Mutex::new(Vec::new())),
            unreachable: false,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue an approval verdict
    pub fn approving(self) -> Self {
        self.verdicts.lock().unwrap().push(ModerationVerdict {
            approved: true,
            reason: "OK".to_string(),
        });
        self
    }

    /// Queue a rejection verdict with a reason
    pub fn rejecting(self, reason: &str) -> Self {
        self.verdicts.lock().unwrap().push(ModerationVerdict {
            approved: false,
            reason: reason.to_string(),
        });
        self
    }

    /// Make every call fail as if the endpoint were down
    pub fn unreachable(mut self) -> Self {
        self.unreachable = true;
        self
    }

    /// Get all review requests that were made
    pub fn calls(&self) -> Vec<ModerationRequest> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockContentModerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseContentModerator for MockContentModerator {
    async fn review(&self, req: &ModerationRequest) -> Result<ModerationVerdict> {
        self.calls.lock().unwrap().push(req.clone());
        if self.unreachable {
            anyhow::bail!("connection refused");
        }
        let mut verdicts = self.verdicts.lock().unwrap();
        if verdicts.is_empty() {
            Ok(ModerationVerdict {
                approved: true,
                reason: "OK".to_string(),
            })
        } else {
            Ok(verdicts.remove(0))
        }
    }
}

// =============================================================================
// In-memory Submission Store
// =============================================================================

#[derive(Default)]
pub struct MemorySubmissionStore {
    records: Mutex<HashMap<Uuid, SubmissionRecord>>,
}

impl MemorySubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records currently held, in no particular order
    pub fn records(&self) -> Vec<SubmissionRecord> {
        self.records.lock().unwrap().values().cloned().collect()
    }

    /// Seed a record directly (for read-path and co-author tests)
    pub fn insert(&self, record: SubmissionRecord) {
        self.records.lock().unwrap().insert(record.id, record);
    }

    /// Build and seed a published record with a provenance timestamp
    pub fn insert_published(&self, provenance_ts: DateTime<Utc>, votes: RoleCounts) -> Uuid {
        let id = Uuid::new_v4();
        self.insert(SubmissionRecord {
            id,
            title: "Seeded article".to_string(),
            content: "Seeded content".to_string(),
            image_url: None,
            fee_amount: 25.0,
            fee_asset: "0xPressToken".to_string(),
            tx_reference: "0xfeed".to_string(),
            status: SubmissionStatus::Published,
            moderation_verdict: Some("approved".to_string()),
            moderation_reason: None,
            provenance_hash: Some("0".repeat(64)),
            provenance_ts: Some(provenance_ts),
            secondary_author_wallet: None,
            secondary_author_split: None,
            secondary_author_locked: false,
            votes,
            created_at: provenance_ts,
        });
        id
    }
}

#[async_trait]
impl BaseSubmissionStore for MemorySubmissionStore {
    async fn create(&self, new: NewSubmission) -> Result<SubmissionRecord> {
        let record = SubmissionRecord {
            id: Uuid::new_v4(),
            title: new.title,
            content: new.content,
            image_url: new.image_url,
            fee_amount: new.fee_amount,
            fee_asset: new.fee_asset,
            tx_reference: new.tx_reference,
            status: SubmissionStatus::AwaitingModeration,
            moderation_verdict: None,
            moderation_reason: None,
            provenance_hash: None,
            provenance_ts: None,
            secondary_author_wallet: None,
            secondary_author_split: None,
            secondary_author_locked: false,
            votes: RoleCounts::default(),
            created_at: Utc::now(),
        };
        self.records
            .lock()
            .unwrap()
            .insert(record.id, record.clone());
        Ok(record)
    }

    async fn publish(
        &self,
        id: Uuid,
        provenance_hash: &str,
        published_at: DateTime<Utc>,
    ) -> Result<()> {
        let mut records = self.records.lock().unwrap();
        let record = records
            .get_mut(&id)
            .ok_or_else(|| anyhow::anyhow!("no such record: {id}"))?;
        record.status = SubmissionStatus::Published;
        record.moderation_verdict = Some("approved".to_string());
        record.provenance_hash = Some(provenance_hash.to_string());
        record.provenance_ts = Some(published_at);
        Ok(())
    }

    async fn reject(&self, id: Uuid, reason: &str) -> Result<()> {
        let mut records = self.records.lock().unwrap();
        let record = records
            .get_mut(&id)
            .ok_or_else(|| anyhow::anyhow!("no such record: {id}"))?;
        record.status = SubmissionStatus::Rejected;
        record.moderation_verdict = Some("rejected".to_string());
        record.moderation_reason = Some(reason.to_string());
        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Option<SubmissionRecord>> {
        Ok(self.records.lock().unwrap().get(&id).cloned())
    }

    async fn list_by_status(
        &self,
        status: SubmissionStatus,
        limit: i64,
    ) -> Result<Vec<SubmissionRecord>> {
        let records = self.records.lock().unwrap();
        let mut matching: Vec<SubmissionRecord> = records
            .values()
            .filter(|r| r.status == status)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        matching.truncate(limit as usize);
        Ok(matching)
    }

    async fn bind_secondary_author(&self, id: Uuid, wallet: &str, split: &str) -> Result<()> {
        let mut records = self.records.lock().unwrap();
        let record = records
            .get_mut(&id)
            .ok_or_else(|| anyhow::anyhow!("no such record: {id}"))?;
        record.secondary_author_wallet = Some(wallet.to_string());
        record.secondary_author_split = Some(split.to_string());
        record.secondary_author_locked = true;
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
