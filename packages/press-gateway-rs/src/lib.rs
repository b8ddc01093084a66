//! HTTP clients for the Press Blockchain collaborators.
//!
//! Three external services sit behind this crate: the deployer gateway
//! (outlet creation, token deploy, exchange listing, vote reads), the
//! installer API (on-chain fee verification), and the AI moderation
//! endpoint. All of them speak plain JSON over POST/GET and answer with
//! at least an `ok` boolean; none of the blockchain work happens here.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

pub mod models;

pub use models::{
    CreateOutletRequest, ExchangeListRequest, FeeVerifyRequest, ModerationPolicy,
    ModerationRequest, ModerationVerdict, TokenDeployRequest,
};

/// Timeout for gateway POSTs (outlet create, token deploy, listing).
const GATEWAY_POST_TIMEOUT: Duration = Duration::from_secs(30);
/// Timeout for gateway status GETs.
const GATEWAY_GET_TIMEOUT: Duration = Duration::from_secs(20);
/// Timeout for the public vote read, polled from article pages.
const VOTES_TIMEOUT: Duration = Duration::from_secs(5);
/// Timeout for installer fee verification.
const FEE_VERIFY_TIMEOUT: Duration = Duration::from_secs(25);
/// Timeout for the moderation endpoint.
const MODERATION_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Debug, Error)]
pub enum GatewayError {
    /// Transport-level failure: connection refused, DNS, timeout.
    #[error("collaborator unreachable: {0}")]
    Unreachable(#[from] reqwest::Error),

    /// The collaborator answered, but not with JSON we can use.
    #[error("non-JSON response: {0}")]
    NonJson(String),
}

fn trim_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// Parse a response body, mapping unparseable bodies to [`GatewayError::NonJson`].
fn parse_json(body: &str) -> Result<Value, GatewayError> {
    serde_json::from_str(body).map_err(|_| {
        // Char-wise cut: collaborators answer HTML error pages with
        // multibyte text, and a byte truncation could split a char.
        let snippet: String = body.trim().chars().take(200).collect();
        GatewayError::NonJson(snippet)
    })
}

/// Whether a collaborator response carries a truthy `ok` flag.
pub fn response_ok(value: &Value) -> bool {
    value.get("ok").and_then(Value::as_bool).unwrap_or(false)
}

async fn post_json(
    http: &Client,
    url: &str,
    body: &impl Serialize,
    timeout: Duration,
) -> Result<Value, GatewayError> {
    let resp = http.post(url).timeout(timeout).json(body).send().await?;
    let text = resp.text().await?;
    parse_json(&text)
}

async fn get_json(http: &Client, url: &str, timeout: Duration) -> Result<Value, GatewayError> {
    let resp = http.get(url).timeout(timeout).send().await?;
    let text = resp.text().await?;
    parse_json(&text)
}

/// Client for the deployer gateway.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    http: Client,
    base_url: String,
}

impl GatewayClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: trim_base_url(base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /api/outlets/create` — registers the outlet identity on-chain.
    pub async fn create_outlet(&self, req: &CreateOutletRequest) -> Result<Value, GatewayError> {
        let url = format!("{}/api/outlets/create", self.base_url);
        post_json(&self.http, &url, req, GATEWAY_POST_TIMEOUT).await
    }

    /// `POST /api/outlets/token/deploy` — deploys the outlet token and runs
    /// the required self-transfer test transaction.
    pub async fn deploy_outlet_token(
        &self,
        req: &TokenDeployRequest,
    ) -> Result<Value, GatewayError> {
        let url = format!("{}/api/outlets/token/deploy", self.base_url);
        post_json(&self.http, &url, req, GATEWAY_POST_TIMEOUT).await
    }

    /// `POST /api/exchange/list` — lists the outlet token at a tier.
    pub async fn list_on_exchange(&self, req: &ExchangeListRequest) -> Result<Value, GatewayError> {
        let url = format!("{}/api/exchange/list", self.base_url);
        post_json(&self.http, &url, req, GATEWAY_POST_TIMEOUT).await
    }

    /// `GET /api/outlet/info` — deployed contract addresses and outlet state.
    pub async fn outlet_info(&self) -> Result<Value, GatewayError> {
        let url = format!("{}/api/outlet/info", self.base_url);
        get_json(&self.http, &url, GATEWAY_GET_TIMEOUT).await
    }

    /// `GET /api/articles/approval_defaults` — vote window and quorum numbers
    /// configured in the core deployer.
    pub async fn approval_defaults(&self) -> Result<Value, GatewayError> {
        let url = format!("{}/api/articles/approval_defaults", self.base_url);
        get_json(&self.http, &url, GATEWAY_GET_TIMEOUT).await
    }

    /// `GET /articles/votes?articleId=` — live vote counts for an article.
    pub async fn article_votes(&self, article_id: &str) -> Result<Value, GatewayError> {
        let url = format!(
            "{}/articles/votes?articleId={}",
            self.base_url,
            urlencoding::encode(article_id)
        );
        get_json(&self.http, &url, VOTES_TIMEOUT).await
    }
}

/// Client for the installer API's fee verification endpoint.
#[derive(Debug, Clone)]
pub struct InstallerClient {
    http: Client,
    base_url: String,
}

impl InstallerClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: trim_base_url(base_url),
        }
    }

    /// `POST /api/fees/verify` — checks that `txid` paid at least
    /// `min_amount_press` of the payment asset to the treasury.
    ///
    /// Returns `Ok(false)` for a negative or ambiguous answer; only a
    /// truthy `ok` counts as verified.
    pub async fn verify_fee(&self, req: &FeeVerifyRequest) -> Result<bool, GatewayError> {
        let url = format!("{}/api/fees/verify", self.base_url);
        let value = post_json(&self.http, &url, req, FEE_VERIFY_TIMEOUT).await?;
        Ok(response_ok(&value))
    }
}

/// Client for the AI moderation endpoint.
#[derive(Debug, Clone)]
pub struct ModerationClient {
    http: Client,
    endpoint: String,
}

impl ModerationClient {
    pub fn new(endpoint: &str) -> Self {
        Self {
            http: Client::new(),
            endpoint: trim_base_url(endpoint),
        }
    }

    /// Submits title/content/image for review against the policy.
    ///
    /// A response without an `ok` flag is malformed and surfaces as
    /// [`GatewayError::NonJson`] rather than an implicit approval.
    pub async fn review(&self, req: &ModerationRequest) -> Result<ModerationVerdict, GatewayError> {
        let value = post_json(&self.http, &self.endpoint, req, MODERATION_TIMEOUT).await?;
        let approved = match value.get("ok").and_then(Value::as_bool) {
            Some(ok) => ok,
            None => return Err(GatewayError::NonJson("missing ok flag".to_string())),
        };
        let reason = value
            .get("reason")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| if approved { "OK" } else { "Rejected" }.to_string());
        Ok(ModerationVerdict { approved, reason })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let client = GatewayClient::new("https://deploy.pressblockchain.io/");
        assert_eq!(client.base_url(), "https://deploy.pressblockchain.io");
    }

    #[test]
    fn non_json_body_is_rejected() {
        let err = parse_json("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, GatewayError::NonJson(_)));
    }

    #[test]
    fn non_json_snippet_cuts_multibyte_bodies_on_char_boundaries() {
        // 199 ASCII bytes followed by two-byte chars straddling the cut.
        let body = format!("{}ééééé", "a".repeat(199));
        match parse_json(&body).unwrap_err() {
            GatewayError::NonJson(snippet) => {
                assert_eq!(snippet.chars().count(), 200);
                assert!(snippet.ends_with('é'));
            }
            other => panic!("expected NonJson, got {other:?}"),
        }
    }

    #[test]
    fn ok_flag_must_be_boolean_true() {
        assert!(response_ok(&serde_json::json!({"ok": true})));
        assert!(!response_ok(&serde_json::json!({"ok": false})));
        assert!(!response_ok(&serde_json::json!({"ok": "yes"})));
        assert!(!response_ok(&serde_json::json!({"error": "nope"})));
    }

    #[test]
    fn moderation_policy_defaults_block_everything() {
        let policy = ModerationPolicy::default();
        assert!(policy.block_porn);
        assert!(policy.block_graphic);
        assert!(policy.block_illegal);
        assert!(policy.block_profanity);
        assert!(policy.block_illegal_images);
    }
}
