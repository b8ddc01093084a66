use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::errors::CoauthorError;
use crate::domains::coauthors::set_secondary_author;
use crate::server::app::AppState;

#[derive(Deserialize)]
pub struct CoauthorBody {
    #[serde(default)]
    pub wallet: String,
}

/// `POST /api/articles/{id}/coauthor` — bind a secondary author wallet.
pub async fn coauthor_handler(
    State(state): State<AppState>,
    Path(article_id): Path<Uuid>,
    Json(body): Json<CoauthorBody>,
) -> Json<Value> {
    match set_secondary_author(state.deps.store.as_ref(), article_id, &body.wallet).await {
        Ok(binding) => Json(json!({
            "ok": true,
            "wallet": binding.wallet,
            "split": binding.split,
            "locked": binding.locked,
        })),
        Err(err @ CoauthorError::NoOp) => Json(json!({
            "ok": false,
            "noop": true,
            "error": err.to_string(),
        })),
        Err(err) => Json(json!({"ok": false, "error": err.to_string()})),
    }
}
