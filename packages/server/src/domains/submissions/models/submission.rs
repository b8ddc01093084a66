use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domains::votes::RoleCounts;
use crate::kernel::BaseSubmissionStore;

/// Lifecycle of a gated submission. `published` and `rejected` are terminal;
/// records are never deleted by the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    AwaitingPaymentVerification,
    AwaitingModeration,
    Published,
    Rejected,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::AwaitingPaymentVerification => "awaiting_payment_verification",
            SubmissionStatus::AwaitingModeration => "awaiting_moderation",
            SubmissionStatus::Published => "published",
            SubmissionStatus::Rejected => "rejected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "awaiting_payment_verification" => Some(SubmissionStatus::AwaitingPaymentVerification),
            "awaiting_moderation" => Some(SubmissionStatus::AwaitingModeration),
            "published" => Some(SubmissionStatus::Published),
            "rejected" => Some(SubmissionStatus::Rejected),
            _ => None,
        }
    }
}

/// Fields persisted when the gate accepts a fee-verified submission.
#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub fee_amount: f64,
    pub fee_asset: String,
    pub tx_reference: String,
}

/// One gated article submission, including the provenance, co-author, and
/// vote-counter state the outlet keeps per article.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionRecord {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub fee_amount: f64,
    pub fee_asset: String,
    pub tx_reference: String,
    pub status: SubmissionStatus,
    pub moderation_verdict: Option<String>,
    pub moderation_reason: Option<String>,
    pub provenance_hash: Option<String>,
    pub provenance_ts: Option<DateTime<Utc>>,
    pub secondary_author_wallet: Option<String>,
    pub secondary_author_split: Option<String>,
    pub secondary_author_locked: bool,
    pub votes: RoleCounts,
    pub created_at: DateTime<Utc>,
}

/// Raw SQL row; converted into [`SubmissionRecord`] after status parsing.
#[derive(sqlx::FromRow)]
struct SubmissionRow {
    id: Uuid,
    title: String,
    content: String,
    image_url: Option<String>,
    fee_amount: f64,
    fee_asset: String,
    tx_reference: String,
    status: String,
    moderation_verdict: Option<String>,
    moderation_reason: Option<String>,
    provenance_hash: Option<String>,
    provenance_ts: Option<DateTime<Utc>>,
    secondary_author_wallet: Option<String>,
    secondary_author_split: Option<String>,
    secondary_author_locked: bool,
    votes_journalist: i64,
    votes_editor: i64,
    votes_outlet: i64,
    votes_community: i64,
    created_at: DateTime<Utc>,
}

impl SubmissionRow {
    fn into_record(self) -> Result<SubmissionRecord> {
        let status = SubmissionStatus::parse(&self.status)
            .ok_or_else(|| anyhow::anyhow!("unknown submission status: {}", self.status))?;
        Ok(SubmissionRecord {
            id: self.id,
            title: self.title,
            content: self.content,
            image_url: self.image_url,
            fee_amount: self.fee_amount,
            fee_asset: self.fee_asset,
            tx_reference: self.tx_reference,
            status,
            moderation_verdict: self.moderation_verdict,
            moderation_reason: self.moderation_reason,
            provenance_hash: self.provenance_hash,
            provenance_ts: self.provenance_ts,
            secondary_author_wallet: self.secondary_author_wallet,
            secondary_author_split: self.secondary_author_split,
            secondary_author_locked: self.secondary_author_locked,
            votes: RoleCounts {
                journalist: self.votes_journalist,
                editor: self.votes_editor,
                outlet: self.votes_outlet,
                community: self.votes_community,
            },
            created_at: self.created_at,
        })
    }
}

/// Submission store - SQL persistence layer
#[derive(Clone)]
pub struct PgSubmissionStore {
    pool: PgPool,
}

impl PgSubmissionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseSubmissionStore for PgSubmissionStore {
    async fn create(&self, new: NewSubmission) -> Result<SubmissionRecord> {
        sqlx::query_as::<_, SubmissionRow>(
            "INSERT INTO submissions
                 (id, title, content, image_url, fee_amount, fee_asset, tx_reference, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&new.title)
        .bind(&new.content)
        .bind(&new.image_url)
        .bind(new.fee_amount)
        .bind(&new.fee_asset)
        .bind(&new.tx_reference)
        .bind(SubmissionStatus::AwaitingModeration.as_str())
        .fetch_one(&self.pool)
        .await?
        .into_record()
    }

    async fn publish(
        &self,
        id: Uuid,
        provenance_hash: &str,
        published_at: DateTime<Utc>,
    ) -> Result<()> {
        sqlx::query(
            "UPDATE submissions
             SET status = $2, moderation_verdict = 'approved',
                 provenance_hash = $3, provenance_ts = $4
             WHERE id = $1",
        )
        .bind(id)
        .bind(SubmissionStatus::Published.as_str())
        .bind(provenance_hash)
        .bind(published_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn reject(&self, id: Uuid, reason: &str) -> Result<()> {
        sqlx::query(
            "UPDATE submissions
             SET status = $2, moderation_verdict = 'rejected', moderation_reason = $3
             WHERE id = $1",
        )
        .bind(id)
        .bind(SubmissionStatus::Rejected.as_str())
        .bind(reason)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Option<SubmissionRecord>> {
        let row = sqlx::query_as::<_, SubmissionRow>("SELECT * FROM submissions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(SubmissionRow::into_record).transpose()
    }

    async fn list_by_status(
        &self,
        status: SubmissionStatus,
        limit: i64,
    ) -> Result<Vec<SubmissionRecord>> {
        let rows = sqlx::query_as::<_, SubmissionRow>(
            "SELECT * FROM submissions WHERE status = $1 ORDER BY created_at DESC LIMIT $2",
        )
        .bind(status.as_str())
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(SubmissionRow::into_record).collect()
    }

    async fn bind_secondary_author(&self, id: Uuid, wallet: &str, split: &str) -> Result<()> {
        sqlx::query(
            "UPDATE submissions
             SET secondary_author_wallet = $2, secondary_author_split = $3,
                 secondary_author_locked = TRUE
             WHERE id = $1",
        )
        .bind(id)
        .bind(wallet)
        .bind(split)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_strings() {
        for status in [
            SubmissionStatus::AwaitingPaymentVerification,
            SubmissionStatus::AwaitingModeration,
            SubmissionStatus::Published,
            SubmissionStatus::Rejected,
        ] {
            assert_eq!(SubmissionStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn unknown_status_does_not_parse() {
        assert_eq!(SubmissionStatus::parse("voting"), None);
        assert_eq!(SubmissionStatus::parse(""), None);
    }
}
