//! Outlet onboarding: create the outlet identity, deploy the outlet token
//! (with its required self-transfer test transaction), and list the token
//! on the Press Exchange. Every operation is a thin, validated proxy to the
//! deployer gateway — the gateway JSON is passed through to the caller so
//! operators see exactly what the chain layer said.

use press_gateway::{
    response_ok, CreateOutletRequest, ExchangeListRequest, GatewayClient, TokenDeployRequest,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::sync::RwLock;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateOutletParams {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub domain: String,
    pub owner_private_key: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenDeployParams {
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub token_name: String,
    #[serde(default)]
    pub token_symbol: String,
    #[serde(default = "zero_wei")]
    pub minted_supply_wei: String,
    #[serde(default = "zero_wei")]
    pub test_transfer_to_self_wei: String,
    pub owner_private_key: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListTokenParams {
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub token_address: String,
    #[serde(default = "default_tier")]
    pub tier: i64,
    pub owner_private_key: Option<String>,
}

fn zero_wei() -> String {
    "0".to_string()
}

fn default_tier() -> i64 {
    1
}

async fn domain_or_stored(requested: &str, stored: &RwLock<Option<String>>) -> String {
    let requested = requested.trim();
    if requested.is_empty() {
        stored.read().await.clone().unwrap_or_default()
    } else {
        requested.to_string()
    }
}

/// Register the outlet identity. On success the domain is remembered so
/// later onboarding steps can omit it.
pub async fn create_outlet(
    gateway: &GatewayClient,
    stored_domain: &RwLock<Option<String>>,
    params: CreateOutletParams,
) -> Value {
    let name = params.name.trim();
    let domain = params.domain.trim();
    if name.is_empty() || domain.is_empty() {
        return json!({"ok": false, "error": "Missing name/domain"});
    }

    match gateway
        .create_outlet(&CreateOutletRequest {
            name: name.to_string(),
            domain: domain.to_string(),
            owner_private_key: params.owner_private_key,
        })
        .await
    {
        Ok(resp) => {
            if response_ok(&resp) {
                *stored_domain.write().await = Some(domain.to_string());
            }
            resp
        }
        Err(e) => json!({"ok": false, "error": e.to_string()}),
    }
}

/// Deploy the outlet token and run the required test transfer.
pub async fn deploy_token(
    gateway: &GatewayClient,
    stored_domain: &RwLock<Option<String>>,
    params: TokenDeployParams,
) -> Value {
    let domain = domain_or_stored(&params.domain, stored_domain).await;
    match gateway
        .deploy_outlet_token(&TokenDeployRequest {
            domain,
            token_name: params.token_name.trim().to_string(),
            token_symbol: params.token_symbol.trim().to_string(),
            minted_supply_wei: params.minted_supply_wei,
            test_transfer_to_self_wei: params.test_transfer_to_self_wei,
            owner_private_key: params.owner_private_key,
        })
        .await
    {
        Ok(resp) => resp,
        Err(e) => json!({"ok": false, "error": e.to_string()}),
    }
}

/// List the outlet token on the exchange at a tier.
pub async fn list_token(
    gateway: &GatewayClient,
    stored_domain: &RwLock<Option<String>>,
    params: ListTokenParams,
) -> Value {
    let domain = domain_or_stored(&params.domain, stored_domain).await;
    match gateway
        .list_on_exchange(&ExchangeListRequest {
            domain,
            token_address: params.token_address.trim().to_string(),
            tier: params.tier,
            owner_private_key: params.owner_private_key,
        })
        .await
    {
        Ok(resp) => resp,
        Err(e) => json!({"ok": false, "error": e.to_string()}),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_rejects_missing_name_and_domain_without_calling_out() {
        // An unroutable address: the validation branch must return before
        // any request is attempted.
        let gateway = GatewayClient::new("http://127.0.0.1:1");
        let stored = RwLock::new(None);

        let resp = create_outlet(
            &gateway,
            &stored,
            CreateOutletParams {
                name: "  ".to_string(),
                domain: String::new(),
                owner_private_key: None,
            },
        )
        .await;

        assert_eq!(resp["ok"], false);
        assert_eq!(resp["error"], "Missing name/domain");
        assert!(stored.read().await.is_none());
    }

    #[tokio::test]
    async fn missing_domain_falls_back_to_the_stored_one() {
        let stored = RwLock::new(Some("outlet.example".to_string()));
        assert_eq!(domain_or_stored("", &stored).await, "outlet.example");
        assert_eq!(
            domain_or_stored("other.example", &stored).await,
            "other.example"
        );
    }
}
