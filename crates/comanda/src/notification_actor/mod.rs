//! # Notification Actor
//!
//! A bounded log of role-addressed messages. The actor runs with
//! [`with_retention`](comanda_actor::ResourceActor::with_retention), so appending beyond
//! the cap evicts the oldest entries first.
//!
//! Readers filter by [`Role`](crate::model::Role) through
//! [`NotificationClient::for_role`](crate::clients::NotificationClient::for_role); a
//! notification addressed to `All` is visible to every role.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::NotificationClient;
use crate::model::Notification;
use comanda_actor::ResourceActor;

/// Creates a new Notification actor keeping at most `retention` entries.
pub fn new(buffer: usize, retention: usize) -> (ResourceActor<Notification>, NotificationClient) {
    let (actor, client) = ResourceActor::new(buffer);
    (actor.with_retention(retention), NotificationClient::new(client))
}
