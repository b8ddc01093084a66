use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::domains::submissions::{ArticleSubmission, SubmissionStatus};
use crate::server::app::AppState;

#[derive(Deserialize)]
pub struct SubmitBody {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub txid: String,
}

/// `POST /api/articles/submit` — the gating workflow.
///
/// Always answers 200 with an `ok` flag: workflow failures are structured
/// values for the submitter, not server errors.
pub async fn submit_handler(
    State(state): State<AppState>,
    Json(body): Json<SubmitBody>,
) -> Json<Value> {
    let submission = ArticleSubmission {
        title: body.title,
        content: body.content,
        image_url: body.image,
        tx_reference: body.txid,
    };

    match state.gate.submit(submission).await {
        Ok(outcome) if outcome.status == SubmissionStatus::Published => Json(json!({
            "ok": true,
            "recordId": outcome.record_id,
            "status": outcome.status,
        })),
        Ok(outcome) => Json(json!({
            "ok": false,
            "recordId": outcome.record_id,
            "status": outcome.status,
            "error": outcome.reason,
        })),
        Err(err) => Json(json!({
            "ok": false,
            "kind": err.kind(),
            "error": err.to_string(),
        })),
    }
}

#[derive(Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    "pending".to_string()
}

const QUEUE_PAGE_SIZE: i64 = 50;

/// `GET /api/submissions?status=pending|rejected|published` — the review
/// queue read path.
pub async fn list_submissions_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Value> {
    let status = match query.status.as_str() {
        "pending" => SubmissionStatus::AwaitingModeration,
        "rejected" => SubmissionStatus::Rejected,
        "published" => SubmissionStatus::Published,
        other => {
            return Json(json!({
                "ok": false,
                "error": format!("unknown status filter: {other}"),
            }))
        }
    };

    match state.deps.store.list_by_status(status, QUEUE_PAGE_SIZE).await {
        Ok(items) => Json(json!({"ok": true, "items": items})),
        Err(e) => Json(json!({"ok": false, "error": e.to_string()})),
    }
}
