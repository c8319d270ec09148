//! Error types for the Table actor.

use crate::model::TableStatus;
use comanda_actor::FrameworkError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum TableError {
    #[error("Table not found: {0}")]
    NotFound(String),

    /// The table cannot take guests right now.
    #[error("Table {number} is unavailable ({status})")]
    Unavailable { number: u32, status: TableStatus },

    #[error("Cannot {action} table {number} while it is {status}")]
    InvalidStatus {
        number: u32,
        status: TableStatus,
        action: &'static str,
    },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for TableError {
    fn from(msg: String) -> Self {
        TableError::ActorCommunicationError(msg)
    }
}

impl From<FrameworkError> for TableError {
    fn from(e: FrameworkError) -> Self {
        match e.downcast_entity::<TableError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => TableError::NotFound(id),
            Err(other) => TableError::ActorCommunicationError(other.to_string()),
        }
    }
}
