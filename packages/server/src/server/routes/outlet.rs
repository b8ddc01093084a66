use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::domains::outlet::{
    create_outlet, deploy_token, list_token, outlet_status, CreateOutletParams, ListTokenParams,
    TokenDeployParams,
};
use crate::server::app::AppState;

/// `POST /api/outlet/create`
pub async fn create_outlet_handler(
    State(state): State<AppState>,
    Json(params): Json<CreateOutletParams>,
) -> Json<Value> {
    Json(create_outlet(&state.deps.gateway, &state.outlet_domain, params).await)
}

/// `POST /api/outlet/token/deploy`
pub async fn deploy_token_handler(
    State(state): State<AppState>,
    Json(params): Json<TokenDeployParams>,
) -> Json<Value> {
    Json(deploy_token(&state.deps.gateway, &state.outlet_domain, params).await)
}

/// `POST /api/outlet/token/list`
pub async fn list_token_handler(
    State(state): State<AppState>,
    Json(params): Json<ListTokenParams>,
) -> Json<Value> {
    Json(list_token(&state.deps.gateway, &state.outlet_domain, params).await)
}

/// `GET /api/outlet/status`
pub async fn outlet_status_handler(State(state): State<AppState>) -> Json<Value> {
    Json(outlet_status(&state.deps.gateway, &state.config, &state.outlet_domain).await)
}

/// `GET /api/outlet/approval_defaults` — the recommended vote thresholds
/// published by the gateway, passed through unchanged.
pub async fn approval_defaults_handler(State(state): State<AppState>) -> Json<Value> {
    match state.deps.gateway.approval_defaults().await {
        Ok(defaults) => Json(defaults),
        Err(e) => Json(json!({"ok": false, "error": e.to_string()})),
    }
}
