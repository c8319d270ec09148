//! Error types for the Order actor.

use crate::employee_actor::EmployeeError;
use crate::menu_actor::MenuError;
use crate::model::{KitchenStatus, OrderStatus, PaymentMethod};
use crate::sale_actor::SaleError;
use crate::table_actor::TableError;
use comanda_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during order operations.
///
/// A failed action never changes the order.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),

    #[error("Item index {index} out of range (order has {len} items)")]
    ItemIndexOutOfRange { index: usize, len: usize },

    #[error("Invalid transition from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    #[error("Item {index} cannot move from {from} to {to}")]
    InvalidItemTransition {
        index: usize,
        from: KitchenStatus,
        to: KitchenStatus,
    },

    #[error("Payment has not been validated")]
    PaymentNotValidated,

    /// Only cash payments are validated by hand.
    #[error("Payment by {0} does not need validation")]
    PaymentMethodMismatch(PaymentMethod),

    #[error("Invalid table: {0}")]
    InvalidTable(String),

    #[error("Invalid menu item: {0}")]
    InvalidMenuItem(String),

    #[error("Menu item unavailable: {0}")]
    MenuItemUnavailable(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Table error: {0}")]
    Table(#[from] TableError),

    #[error("Menu error: {0}")]
    Menu(#[from] MenuError),

    #[error("Employee error: {0}")]
    Employee(#[from] EmployeeError),

    #[error("Sale error: {0}")]
    Sale(#[from] SaleError),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        match e.downcast_entity::<OrderError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => OrderError::NotFound(id),
            Err(other) => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
