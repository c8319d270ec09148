//! # Menu Actor
//!
//! Owns the dishes customers can order. Orders read from it when they are placed and
//! keep their own copy of each dish's name and price.
//!
//! - [`entity`] - [`ActorEntity`](comanda_actor::ActorEntity) implementation for [`MenuItem`]
//! - [`error`] - [`MenuError`]
//! - [`actions`] - [`MenuAction`]

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::MenuClient;
use crate::model::MenuItem;
use comanda_actor::ResourceActor;

/// Creates a new Menu actor and its client.
pub fn new(buffer: usize) -> (ResourceActor<MenuItem>, MenuClient) {
    let (actor, client) = ResourceActor::new(buffer);
    (actor, MenuClient::new(client))
}
