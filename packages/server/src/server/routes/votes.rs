use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use press_gateway::GatewayError;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::domains::votes::{vote_snapshot, VoteRead};
use crate::server::app::AppState;

/// `GET /api/articles/{id}/votes` — local vote snapshot with the 72h window.
///
/// An article that exists but was never published still answers `ok:true`
/// with its counters and a closed window; only an unknown id is `ok:false`.
pub async fn article_votes_handler(
    State(state): State<AppState>,
    Path(article_id): Path<Uuid>,
) -> Json<Value> {
    match vote_snapshot(state.deps.store.as_ref(), article_id).await {
        Ok(VoteRead::Window(snapshot)) => Json(json!({
            "ok": true,
            "open": snapshot.open,
            "endsAt": snapshot.ends_at.timestamp(),
            "counts": snapshot.counts,
        })),
        Ok(VoteRead::NotPublished { counts }) => Json(json!({
            "ok": true,
            "open": false,
            "counts": counts,
        })),
        Ok(VoteRead::NotFound) => Json(json!({"ok": false, "error": "article not found"})),
        Err(e) => Json(json!({"ok": false, "error": e.to_string()})),
    }
}

#[derive(Deserialize)]
pub struct VotesProxyQuery {
    #[serde(rename = "articleId")]
    pub article_id: Option<String>,
}

fn article_id_param(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|id| !id.is_empty())
}

fn missing_reply() -> (StatusCode, Json<Value>) {
    (StatusCode::BAD_REQUEST, Json(json!({"error": "missing"})))
}

fn proxy_reply(result: Result<Value, GatewayError>) -> (StatusCode, Json<Value>) {
    match result {
        Ok(body) => (StatusCode::OK, Json(body)),
        Err(GatewayError::Unreachable(_)) => (
            StatusCode::BAD_GATEWAY,
            Json(json!({"error": "gateway_unreachable"})),
        ),
        Err(GatewayError::NonJson(_)) => (
            StatusCode::BAD_GATEWAY,
            Json(json!({"error": "bad_response"})),
        ),
    }
}

/// `GET /article-votes?articleId=` — public proxy to the gateway's vote
/// endpoint. 400 when the id is missing, 502 when the gateway is
/// unreachable or answers non-JSON; otherwise the gateway JSON passes
/// straight through.
pub async fn votes_proxy_handler(
    State(state): State<AppState>,
    Query(query): Query<VotesProxyQuery>,
) -> (StatusCode, Json<Value>) {
    match article_id_param(query.article_id.as_deref()) {
        None => missing_reply(),
        Some(id) => proxy_reply(state.deps.gateway.article_votes(id).await),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_or_absent_article_id_is_missing() {
        assert!(article_id_param(None).is_none());
        assert!(article_id_param(Some("   ")).is_none());
        assert_eq!(article_id_param(Some(" 42 ")), Some("42"));
    }

    #[test]
    fn missing_article_id_answers_400() {
        let (status, Json(body)) = missing_reply();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "missing");
    }

    #[test]
    fn gateway_json_passes_through_unchanged() {
        let (status, Json(body)) = proxy_reply(Ok(json!({"ok": true, "journalist": 3})));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["journalist"], 3);
    }

    #[test]
    fn non_json_gateway_body_answers_502() {
        let (status, Json(body)) = proxy_reply(Err(GatewayError::NonJson("<html>".to_string())));
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"], "bad_response");
    }

    #[tokio::test]
    async fn unreachable_gateway_answers_502() {
        // Port 1 is never bound locally, so the connect fails immediately.
        let err = reqwest::Client::new()
            .get("http://127.0.0.1:1/articles/votes")
            .timeout(std::time::Duration::from_secs(2))
            .send()
            .await
            .unwrap_err();

        let (status, Json(body)) = proxy_reply(Err(GatewayError::from(err)));
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"], "gateway_unreachable");
    }
}
