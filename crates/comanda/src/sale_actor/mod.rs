//! # Sale Actor
//!
//! Append-only sales ledger. The order actor records exactly one [`Sale`] when an
//! order is delivered; nothing else writes here.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::SaleClient;
use crate::model::Sale;
use comanda_actor::ResourceActor;

/// Creates a new Sale actor and its client.
pub fn new(buffer: usize) -> (ResourceActor<Sale>, SaleClient) {
    let (actor, client) = ResourceActor::new(buffer);
    (actor, SaleClient::new(client))
}
