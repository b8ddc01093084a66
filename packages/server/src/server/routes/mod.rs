pub mod coauthors;
pub mod health;
pub mod outlet;
pub mod submissions;
pub mod votes;

pub use coauthors::coauthor_handler;
pub use health::health_handler;
pub use outlet::{
    approval_defaults_handler, create_outlet_handler, deploy_token_handler, list_token_handler,
    outlet_status_handler,
};
pub use submissions::{list_submissions_handler, submit_handler};
pub use votes::{article_votes_handler, votes_proxy_handler};
