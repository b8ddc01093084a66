pub mod actions;
pub mod status;

pub use actions::{
    create_outlet, deploy_token, list_token, CreateOutletParams, ListTokenParams,
    TokenDeployParams,
};
pub use status::outlet_status;
