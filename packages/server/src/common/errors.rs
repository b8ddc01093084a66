use thiserror::Error;

/// Failures of the article submission gate.
///
/// Each variant maps to a structured `{ok:false, error}` JSON value at the
/// HTTP boundary; none of them are fatal to the process and none are
/// retried. A moderation rejection is not an error — it is a terminal
/// record state carried in the submission outcome.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// A required field is missing or malformed.
    #[error("{0}")]
    Validation(String),

    /// The outlet's fee policy is incomplete; verification cannot run.
    #[error("{0}")]
    Configuration(String),

    /// The fee verifier was unreachable or did not confirm the payment.
    #[error("{0}")]
    PaymentVerification(String),

    /// An external collaborator could not be reached or answered garbage.
    #[error("{0}")]
    GatewayUnreachable(String),

    #[error("submission store failure: {0}")]
    Store(#[from] anyhow::Error),
}

impl SubmitError {
    /// Stable machine-readable kind for API consumers.
    pub fn kind(&self) -> &'static str {
        match self {
            SubmitError::Validation(_) => "validation",
            SubmitError::Configuration(_) => "configuration",
            SubmitError::PaymentVerification(_) => "payment_verification",
            SubmitError::GatewayUnreachable(_) => "gateway_unreachable",
            SubmitError::Store(_) => "store",
        }
    }
}

/// Failures of the co-author binding operation.
#[derive(Error, Debug)]
pub enum CoauthorError {
    /// The supplied wallet equals the stored one; nothing changed.
    #[error("co-author wallet unchanged")]
    NoOp,

    #[error("{0}")]
    Validation(String),

    #[error("article not found")]
    NotFound,

    #[error("submission store failure: {0}")]
    Store(#[from] anyhow::Error),
}
