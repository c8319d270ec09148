//! Error types for the Menu actor.

use comanda_actor::FrameworkError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    #[error("Menu item not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for MenuError {
    fn from(msg: String) -> Self {
        MenuError::ActorCommunicationError(msg)
    }
}

impl From<FrameworkError> for MenuError {
    fn from(e: FrameworkError) -> Self {
        match e.downcast_entity::<MenuError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => MenuError::NotFound(id),
            Err(other) => MenuError::ActorCommunicationError(other.to_string()),
        }
    }
}
