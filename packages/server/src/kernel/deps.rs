//! Server dependencies (using traits for testability)
//!
//! This module provides the dependency container handed to the HTTP layer
//! and the adapters that wrap the press-gateway clients into the kernel
//! traits.

use anyhow::Result;
use async_trait::async_trait;
use press_gateway::{
    FeeVerifyRequest, GatewayClient, InstallerClient, ModerationClient, ModerationRequest,
    ModerationVerdict,
};
use std::sync::Arc;

use crate::kernel::{BaseContentModerator, BaseFeeVerifier, BaseSubmissionStore};

// =============================================================================
// InstallerClient Adapter (implements BaseFeeVerifier trait)
// =============================================================================

/// Fee verifier backed by the installer API. Holds no client when the
/// installer URL is unconfigured; the submission gate's configuration check
/// fires before this is ever called in that case.
pub struct InstallerFeeVerifier {
    client: Option<InstallerClient>,
}

impl InstallerFeeVerifier {
    pub fn new(installer_api_url: Option<&str>) -> Self {
        Self {
            client: installer_api_url.map(InstallerClient::new),
        }
    }
}

#[async_trait]
impl BaseFeeVerifier for InstallerFeeVerifier {
    async fn verify(&self, req: &FeeVerifyRequest) -> Result<bool> {
        let client = self
            .client
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("installer API not configured"))?;
        client
            .verify_fee(req)
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))
    }
}

// =============================================================================
// ModerationClient Adapter (implements BaseContentModerator trait)
// =============================================================================

pub struct HttpContentModerator {
    client: ModerationClient,
}

impl HttpContentModerator {
    pub fn new(endpoint: &str) -> Self {
        Self {
            client: ModerationClient::new(endpoint),
        }
    }
}

#[async_trait]
impl BaseContentModerator for HttpContentModerator {
    async fn review(&self, req: &ModerationRequest) -> Result<ModerationVerdict> {
        self.client
            .review(req)
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to routes (using traits for testability)
#[derive(Clone)]
pub struct ServerDeps {
    pub store: Arc<dyn BaseSubmissionStore>,
    pub fee_verifier: Arc<dyn BaseFeeVerifier>,
    /// Unset when no moderation endpoint is configured (implicit pass).
    pub moderator: Option<Arc<dyn BaseContentModerator>>,
    pub gateway: Arc<GatewayClient>,
}

impl ServerDeps {
    pub fn new(
        store: Arc<dyn BaseSubmissionStore>,
        fee_verifier: Arc<dyn BaseFeeVerifier>,
        moderator: Option<Arc<dyn BaseContentModerator>>,
        gateway: Arc<GatewayClient>,
    ) -> Self {
        Self {
            store,
            fee_verifier,
            moderator,
            gateway,
        }
    }
}
