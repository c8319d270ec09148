//! # Inventory Actor
//!
//! Stock levels for ingredients and supplies. Stock never drops below zero; an
//! adjustment that would is rejected with [`InventoryError::InsufficientStock`].

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::InventoryClient;
use crate::model::InventoryItem;
use comanda_actor::ResourceActor;

/// Creates a new Inventory actor and its client.
pub fn new(buffer: usize) -> (ResourceActor<InventoryItem>, InventoryClient) {
    let (actor, client) = ResourceActor::new(buffer);
    (actor, InventoryClient::new(client))
}
