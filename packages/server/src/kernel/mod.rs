pub mod deps;
pub mod test_dependencies;
pub mod traits;

pub use deps::{HttpContentModerator, InstallerFeeVerifier, ServerDeps};
pub use traits::{BaseContentModerator, BaseFeeVerifier, BaseSubmissionStore};
