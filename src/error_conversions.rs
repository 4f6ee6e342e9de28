//! Error conversion glue between the crate's layers.
//!
//! The domain layer must not depend on service/gateway error types, so the
//! upward conversions live here instead.

use crate::domain::types::TypeConstraintError;
use crate::gateway::GatewayError;
use crate::services::ServiceError;
use crate::wizard::WizardError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

impl From<TypeConstraintError> for GatewayError {
    fn from(val: TypeConstraintError) -> Self {
        GatewayError::UnexpectedResponse(val.to_string())
    }
}

impl From<WizardError> for ServiceError {
    fn from(val: WizardError) -> Self {
        match val {
            WizardError::Validation(report) => ServiceError::Validation(report),
            WizardError::SubmitInFlight => ServiceError::SubmitInFlight,
            other => ServiceError::TypeConstraint(other.to_string()),
        }
    }
}
