//! Error types for the Sale actor.

use comanda_actor::FrameworkError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SaleError {
    #[error("Sale not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Sales are immutable once recorded.
    #[error("Sale {0} cannot be modified")]
    Immutable(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for SaleError {
    fn from(msg: String) -> Self {
        SaleError::ActorCommunicationError(msg)
    }
}

impl From<FrameworkError> for SaleError {
    fn from(e: FrameworkError) -> Self {
        match e.downcast_entity::<SaleError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => SaleError::NotFound(id),
            Err(other) => SaleError::ActorCommunicationError(other.to_string()),
        }
    }
}
