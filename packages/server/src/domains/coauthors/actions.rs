//! Secondary co-author binding.
//!
//! Adding a co-author fixes the revenue split at 50/50 and marks the
//! binding as locked pending a rights-sale event on chain. This service
//! records the intent; the lock itself is enforced at the chain layer.

use anyhow::Result;
use serde::Serialize;
use uuid::Uuid;

use crate::common::errors::CoauthorError;
use crate::kernel::BaseSubmissionStore;

/// The only split the protocol offers for secondary co-authors.
pub const REVENUE_SPLIT: &str = "50_50";

#[derive(Debug, Clone, Serialize)]
pub struct CoauthorBinding {
    pub article_id: Uuid,
    pub wallet: String,
    pub split: &'static str,
    pub locked: bool,
}

/// Bind a secondary author wallet to an article.
///
/// Re-submitting the stored wallet is a no-op failure with zero side
/// effects, so repeated saves never double-charge the co-author fee or
/// re-trigger the lock.
pub async fn set_secondary_author(
    store: &dyn BaseSubmissionStore,
    article_id: Uuid,
    wallet: &str,
) -> Result<CoauthorBinding, CoauthorError> {
    let wallet = wallet.trim();
    if wallet.is_empty() {
        return Err(CoauthorError::Validation(
            "Co-author wallet required".to_string(),
        ));
    }

    let record = store
        .find(article_id)
        .await?
        .ok_or(CoauthorError::NotFound)?;

    if record.secondary_author_wallet.as_deref() == Some(wallet) {
        return Err(CoauthorError::NoOp);
    }

    store
        .bind_secondary_author(article_id, wallet, REVENUE_SPLIT)
        .await?;
    tracing::info!(%article_id, %wallet, "secondary co-author bound");

    Ok(CoauthorBinding {
        article_id,
        wallet: wallet.to_string(),
        split: REVENUE_SPLIT,
        locked: true,
    })
}
