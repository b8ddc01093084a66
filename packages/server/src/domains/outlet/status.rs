use press_gateway::GatewayClient;
use serde_json::{json, Value};
use tokio::sync::RwLock;

use crate::config::Config;

/// Outlet status report: local settings plus whatever the gateway knows
/// about deployed contracts.
pub async fn outlet_status(
    gateway: &GatewayClient,
    config: &Config,
    stored_domain: &RwLock<Option<String>>,
) -> Value {
    let contracts = match gateway.outlet_info().await {
        Ok(info) => info,
        Err(e) => json!({"ok": false, "error": e.to_string()}),
    };

    json!({
        "ok": true,
        "gateway": gateway.base_url(),
        "outlet_domain": stored_domain.read().await.clone(),
        "outlet_wallet": config.outlet_wallet,
        "contracts": contracts,
        "note": "If contracts are empty, deployer stack may not be running or gateway is misconfigured.",
    })
}
