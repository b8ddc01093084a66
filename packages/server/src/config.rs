use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Deployer gateway base URL (outlet creation, token deploy, vote reads).
    pub gateway_url: String,
    /// Installer API base URL (on-chain fee verification).
    pub installer_api_url: Option<String>,
    /// AI moderation endpoint. Unset means submissions pass implicitly.
    pub moderation_endpoint: Option<String>,
    pub rpc_url: Option<String>,
    pub press_token_address: Option<String>,
    pub treasury_wallet: Option<String>,
    /// Minimum submission fee, denominated in PRESS.
    pub publish_fee_press: f64,
    pub outlet_domain: Option<String>,
    pub outlet_wallet: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            gateway_url: env::var("PRESS_GATEWAY_URL")
                .unwrap_or_else(|_| "https://deploy.pressblockchain.io".to_string()),
            installer_api_url: env::var("PRESS_INSTALLER_API_URL").ok(),
            moderation_endpoint: env::var("PRESS_MODERATION_ENDPOINT").ok(),
            rpc_url: env::var("PRESS_RPC_URL").ok(),
            press_token_address: env::var("PRESS_TOKEN_ADDRESS").ok(),
            treasury_wallet: env::var("PRESS_TREASURY_WALLET").ok(),
            publish_fee_press: env::var("PRESS_PUBLISH_FEE")
                .unwrap_or_else(|_| "25".to_string())
                .parse()
                .context("PRESS_PUBLISH_FEE must be a number")?,
            outlet_domain: env::var("PRESS_OUTLET_DOMAIN").ok(),
            outlet_wallet: env::var("PRESS_OUTLET_WALLET").ok(),
        })
    }

    /// The fee policy handed to the submission gate at construction time.
    pub fn fee_policy(&self) -> FeePolicy {
        FeePolicy {
            rpc_url: self.rpc_url.clone(),
            press_token: self.press_token_address.clone(),
            treasury_wallet: self.treasury_wallet.clone(),
            installer_api_url: self.installer_api_url.clone(),
            publish_fee_press: self.publish_fee_press,
        }
    }
}

/// Payment requirements for article submission.
///
/// Every field except the fee amount is optional in the environment, but the
/// submission gate refuses to run (ConfigurationError) until all of them are
/// present — fee verification is never silently skipped.
#[derive(Debug, Clone)]
pub struct FeePolicy {
    pub rpc_url: Option<String>,
    pub press_token: Option<String>,
    pub treasury_wallet: Option<String>,
    pub installer_api_url: Option<String>,
    pub publish_fee_press: f64,
}

/// A complete, validated fee policy.
#[derive(Debug, Clone)]
pub struct FeeRequirements {
    pub rpc_url: String,
    pub press_token: String,
    pub treasury_wallet: String,
    pub min_amount_press: f64,
}

impl FeePolicy {
    /// Returns the concrete requirements when the policy is complete.
    pub fn requirements(&self) -> Option<FeeRequirements> {
        // The installer URL is checked here too: without it there is no
        // verifier to call, which counts as incomplete configuration.
        self.installer_api_url.as_ref()?;
        Some(FeeRequirements {
            rpc_url: self.rpc_url.clone()?,
            press_token: self.press_token.clone()?,
            treasury_wallet: self.treasury_wallet.clone()?,
            min_amount_press: self.publish_fee_press,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_policy() -> FeePolicy {
        FeePolicy {
            rpc_url: Some("http://press-rpc:8545".to_string()),
            press_token: Some("0xToken".to_string()),
            treasury_wallet: Some("0xTreasury".to_string()),
            installer_api_url: Some("http://installer:8085".to_string()),
            publish_fee_press: 25.0,
        }
    }

    #[test]
    fn complete_policy_yields_requirements() {
        let req = complete_policy().requirements().unwrap();
        assert_eq!(req.rpc_url, "http://press-rpc:8545");
        assert_eq!(req.min_amount_press, 25.0);
    }

    #[test]
    fn missing_any_field_means_incomplete() {
        let mut p = complete_policy();
        p.rpc_url = None;
        assert!(p.requirements().is_none());

        let mut p = complete_policy();
        p.press_token = None;
        assert!(p.requirements().is_none());

        let mut p = complete_policy();
        p.treasury_wallet = None;
        assert!(p.requirements().is_none());

        let mut p = complete_policy();
        p.installer_api_url = None;
        assert!(p.requirements().is_none());
    }
}
