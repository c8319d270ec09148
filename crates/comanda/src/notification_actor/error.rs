//! Error types for the Notification actor.

use comanda_actor::FrameworkError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum NotificationError {
    #[error("Notification not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for NotificationError {
    fn from(msg: String) -> Self {
        NotificationError::ActorCommunicationError(msg)
    }
}

impl From<FrameworkError> for NotificationError {
    fn from(e: FrameworkError) -> Self {
        match e.downcast_entity::<NotificationError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => NotificationError::NotFound(id),
            Err(other) => NotificationError::ActorCommunicationError(other.to_string()),
        }
    }
}
