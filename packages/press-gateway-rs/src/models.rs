use serde::Serialize;

/// Payload for `POST /api/outlets/create`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateOutletRequest {
    pub name: String,
    pub domain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_private_key: Option<String>,
}

/// Payload for `POST /api/outlets/token/deploy`.
#[derive(Debug, Clone, Serialize)]
pub struct TokenDeployRequest {
    pub domain: String,
    pub token_name: String,
    pub token_symbol: String,
    pub minted_supply_wei: String,
    pub test_transfer_to_self_wei: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_private_key: Option<String>,
}

/// Payload for `POST /api/exchange/list`.
#[derive(Debug, Clone, Serialize)]
pub struct ExchangeListRequest {
    pub domain: String,
    pub token_address: String,
    pub tier: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_private_key: Option<String>,
}

/// Payload for the installer's `POST /api/fees/verify`.
#[derive(Debug, Clone, Serialize)]
pub struct FeeVerifyRequest {
    pub rpc: String,
    pub txid: String,
    pub press_token: String,
    pub treasury: String,
    pub min_amount_press: f64,
}

/// Content categories the moderation endpoint is asked to block.
///
/// All flags default to on; the outlet never relaxes them today.
#[derive(Debug, Clone, Serialize)]
pub struct ModerationPolicy {
    pub block_porn: bool,
    pub block_graphic: bool,
    pub block_illegal: bool,
    pub block_profanity: bool,
    pub block_illegal_images: bool,
}

impl Default for ModerationPolicy {
    fn default() -> Self {
        Self {
            block_porn: true,
            block_graphic: true,
            block_illegal: true,
            block_profanity: true,
            block_illegal_images: true,
        }
    }
}

/// Payload for the moderation endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ModerationRequest {
    pub title: String,
    pub content: String,
    pub image: String,
    pub policy: ModerationPolicy,
}

/// Decision returned by the moderation endpoint.
#[derive(Debug, Clone)]
pub struct ModerationVerdict {
    pub approved: bool,
    pub reason: String,
}
