//! The article submission gate.
//!
//! A submission runs a single linear pipeline inside one request: validate
//! fields, verify the fee transaction against the installer API, persist the
//! record as awaiting moderation, ask the AI moderator for a verdict, then
//! land the record in `published` or `rejected`. Both outbound calls are
//! blocking for the request and never retried; a failed attempt is terminal
//! and the author simply resubmits.

use std::sync::Arc;

use chrono::Utc;
use press_gateway::{FeeVerifyRequest, ModerationPolicy, ModerationRequest, ModerationVerdict};
use uuid::Uuid;

use crate::common::errors::SubmitError;
use crate::common::utils::provenance_hash;
use crate::config::FeePolicy;
use crate::domains::submissions::models::submission::{NewSubmission, SubmissionStatus};
use crate::kernel::{BaseContentModerator, BaseFeeVerifier, BaseSubmissionStore};

/// Untrusted input from a submitter.
#[derive(Debug, Clone)]
pub struct ArticleSubmission {
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub tx_reference: String,
}

/// What the gate hands back: the record and where it ended up.
#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    pub record_id: Uuid,
    pub status: SubmissionStatus,
    pub reason: Option<String>,
}

/// Coordinates the fee verifier, the content moderator, and the store.
///
/// Collaborators are explicit constructor arguments rather than ambient
/// settings or hook registrations, so tests swap them for mocks and the
/// pipeline reads top to bottom.
pub struct SubmissionGate {
    policy: FeePolicy,
    fee_verifier: Arc<dyn BaseFeeVerifier>,
    moderator: Option<Arc<dyn BaseContentModerator>>,
    store: Arc<dyn BaseSubmissionStore>,
}

impl SubmissionGate {
    pub fn new(
        policy: FeePolicy,
        fee_verifier: Arc<dyn BaseFeeVerifier>,
        moderator: Option<Arc<dyn BaseContentModerator>>,
        store: Arc<dyn BaseSubmissionStore>,
    ) -> Self {
        Self {
            policy,
            fee_verifier,
            moderator,
            store,
        }
    }

    /// Run one submission through the gate.
    ///
    /// A record only reaches `published` after both an affirmative fee
    /// verification and an affirmative moderation verdict. No record is
    /// created before the fee is verified.
    pub async fn submit(&self, req: ArticleSubmission) -> Result<SubmissionOutcome, SubmitError> {
        let title = req.title.trim();
        let content = req.content.trim();
        let txid = req.tx_reference.trim();

        if title.is_empty() || content.is_empty() {
            return Err(SubmitError::Validation(
                "Title and content required".to_string(),
            ));
        }
        if txid.is_empty() || !txid.starts_with("0x") {
            return Err(SubmitError::Validation(
                "Submission fee TXID required".to_string(),
            ));
        }

        let fee = self.policy.requirements().ok_or_else(|| {
            SubmitError::Configuration(
                "Outlet not fully configured (RPC/PRESS/Treasury/Installer API)".to_string(),
            )
        })?;

        let verify = FeeVerifyRequest {
            rpc: fee.rpc_url,
            txid: txid.to_string(),
            press_token: fee.press_token.clone(),
            treasury: fee.treasury_wallet,
            min_amount_press: fee.min_amount_press,
        };
        let verified = self.fee_verifier.verify(&verify).await.map_err(|e| {
            SubmitError::PaymentVerification(format!(
                "Unable to verify payment at this time: {e}"
            ))
        })?;
        if !verified {
            return Err(SubmitError::PaymentVerification(
                "Payment not verified on-chain (check TXID, amount, or treasury)".to_string(),
            ));
        }

        let record = self
            .store
            .create(NewSubmission {
                title: title.to_string(),
                content: content.to_string(),
                image_url: req.image_url.as_deref().map(str::trim).filter(|s| !s.is_empty()).map(str::to_string),
                fee_amount: fee.min_amount_press,
                fee_asset: fee.press_token,
                tx_reference: txid.to_string(),
            })
            .await?;

        let verdict = match &self.moderator {
            Some(moderator) => {
                let review = ModerationRequest {
                    title: title.to_string(),
                    content: content.to_string(),
                    image: record.image_url.clone().unwrap_or_default(),
                    policy: ModerationPolicy::default(),
                };
                // Hard failure on an unreachable or malformed moderator; the
                // record stays in awaiting_moderation with no rollback.
                moderator.review(&review).await.map_err(|e| {
                    SubmitError::GatewayUnreachable(format!("Moderation unavailable: {e}"))
                })?
            }
            None => {
                tracing::warn!(
                    record_id = %record.id,
                    "moderation endpoint unset; passing submission without review"
                );
                ModerationVerdict {
                    approved: true,
                    reason: "OK".to_string(),
                }
            }
        };

        if verdict.approved {
            let published_at = Utc::now();
            let hash = provenance_hash(title, content, published_at);
            self.store.publish(record.id, &hash, published_at).await?;
            tracing::info!(record_id = %record.id, "submission published");
            Ok(SubmissionOutcome {
                record_id: record.id,
                status: SubmissionStatus::Published,
                reason: None,
            })
        } else {
            self.store.reject(record.id, &verdict.reason).await?;
            tracing::info!(record_id = %record.id, reason = %verdict.reason, "submission rejected");
            Ok(SubmissionOutcome {
                record_id: record.id,
                status: SubmissionStatus::Rejected,
                reason: Some(verdict.reason),
            })
        }
    }
}
