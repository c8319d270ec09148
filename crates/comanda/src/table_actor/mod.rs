//! # Table Actor
//!
//! Owns the floor plan: every [`Table`], its occupancy and who is serving it.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](comanda_actor::ActorEntity) implementation for [`Table`]
//! - [`error`] - [`TableError`]
//! - [`actions`] - [`TableAction`] moving a table between statuses
//! - [`new()`] - Factory function that creates the actor and its client
//!
//! ## Status changes
//!
//! | Action | From | To |
//! |---|---|---|
//! | `Seat` | anything but `cleaning` | `occupied` |
//! | `Vacate(order)` | `occupied` by that order | `free` |
//! | `Release` | any | `free` |
//! | `MarkForCleaning` | any | `cleaning` |
//! | `FinishCleaning` | `cleaning` | `free` |
//! | `ToggleReserved` | `free` / `reserved` | `reserved` / `free` |

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::TableClient;
use crate::model::Table;
use comanda_actor::ResourceActor;

/// Creates a new Table actor and its client.
pub fn new(buffer: usize) -> (ResourceActor<Table>, TableClient) {
    let (actor, client) = ResourceActor::new(buffer);
    (actor, TableClient::new(client))
}
