//! Error types for the Inventory actor.

use comanda_actor::FrameworkError;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    #[error("Inventory item not found: {0}")]
    NotFound(String),

    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock {
        requested: Decimal,
        available: Decimal,
    },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for InventoryError {
    fn from(msg: String) -> Self {
        InventoryError::ActorCommunicationError(msg)
    }
}

impl From<FrameworkError> for InventoryError {
    fn from(e: FrameworkError) -> Self {
        match e.downcast_entity::<InventoryError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => InventoryError::NotFound(id),
            Err(other) => InventoryError::ActorCommunicationError(other.to_string()),
        }
    }
}
