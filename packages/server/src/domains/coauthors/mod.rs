pub mod actions;

pub use actions::{set_secondary_author, CoauthorBinding, REVENUE_SPLIT};
