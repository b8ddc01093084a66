pub mod gate;
pub mod models;

pub use gate::{ArticleSubmission, SubmissionGate, SubmissionOutcome};
pub use models::submission::{
    NewSubmission, PgSubmissionStore, SubmissionRecord, SubmissionStatus,
};
