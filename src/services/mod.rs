//! Service functions the embedding application calls.

use thiserror::Error;

use crate::forms::ValidationReport;
use crate::gateway::GatewayError;

pub mod client;
pub mod lookup;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Client-side guards rejected the draft; nothing was sent.
    #[error("validation failed: {0}")]
    Validation(ValidationReport),

    /// A domain value constraint was violated.
    #[error("constraint violated: {0}")]
    TypeConstraint(String),

    /// The backend call failed; the draft is preserved for retry.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// A submission is already in flight.
    #[error("a submission is already in flight")]
    SubmitInFlight,
}

pub type ServiceResult<T> = Result<T, ServiceError>;
