//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    routing::{get, post},
    Router,
};
use press_gateway::GatewayClient;
use sqlx::PgPool;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::domains::submissions::{PgSubmissionStore, SubmissionGate};
use crate::kernel::{
    BaseContentModerator, BaseSubmissionStore, HttpContentModerator, InstallerFeeVerifier,
    ServerDeps,
};
use crate::server::routes::{
    approval_defaults_handler, article_votes_handler, coauthor_handler, create_outlet_handler,
    deploy_token_handler, health_handler, list_submissions_handler, list_token_handler,
    outlet_status_handler, submit_handler, votes_proxy_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub gate: Arc<SubmissionGate>,
    pub deps: ServerDeps,
    /// Outlet domain, seeded from config and updated on outlet creation.
    pub outlet_domain: Arc<RwLock<Option<String>>>,
    pub config: Arc<Config>,
}

/// Build the Axum application router
pub fn build_app(pool: PgPool, config: Config) -> Router {
    let store: Arc<dyn BaseSubmissionStore> = Arc::new(PgSubmissionStore::new(pool));
    let gateway = Arc::new(GatewayClient::new(&config.gateway_url));

    let fee_verifier = Arc::new(InstallerFeeVerifier::new(config.installer_api_url.as_deref()));
    let moderator: Option<Arc<dyn BaseContentModerator>> = config
        .moderation_endpoint
        .as_deref()
        .map(|endpoint| Arc::new(HttpContentModerator::new(endpoint)) as _);
    if moderator.is_none() {
        tracing::warn!("no moderation endpoint configured; submissions pass without review");
    }

    let deps = ServerDeps::new(store.clone(), fee_verifier.clone(), moderator.clone(), gateway);

    let gate = Arc::new(SubmissionGate::new(
        config.fee_policy(),
        fee_verifier,
        moderator,
        store,
    ));

    let state = AppState {
        gate,
        deps,
        outlet_domain: Arc::new(RwLock::new(config.outlet_domain.clone())),
        config: Arc::new(config),
    };

    // CORS: article pages poll the vote endpoints from the public site
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    Router::new()
        // Health check
        .route("/health", get(health_handler))
        // Submission gate
        .route("/api/articles/submit", post(submit_handler))
        .route("/api/submissions", get(list_submissions_handler))
        // Vote reads
        .route("/api/articles/:id/votes", get(article_votes_handler))
        .route("/article-votes", get(votes_proxy_handler))
        // Co-author binding
        .route("/api/articles/:id/coauthor", post(coauthor_handler))
        // Outlet onboarding
        .route("/api/outlet/create", post(create_outlet_handler))
        .route("/api/outlet/token/deploy", post(deploy_token_handler))
        .route("/api/outlet/token/list", post(list_token_handler))
        .route("/api/outlet/status", get(outlet_status_handler))
        .route("/api/outlet/approval_defaults", get(approval_defaults_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
