//! Error types for the Employee actor.

use comanda_actor::FrameworkError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum EmployeeError {
    #[error("Employee not found: {0}")]
    NotFound(String),

    #[error("Employee {0} is inactive")]
    Inactive(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for EmployeeError {
    fn from(msg: String) -> Self {
        EmployeeError::ActorCommunicationError(msg)
    }
}

impl From<FrameworkError> for EmployeeError {
    fn from(e: FrameworkError) -> Self {
        match e.downcast_entity::<EmployeeError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => EmployeeError::NotFound(id),
            Err(other) => EmployeeError::ActorCommunicationError(other.to_string()),
        }
    }
}
