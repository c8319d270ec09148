//! # Order Actor
//!
//! Owns every [`Order`] and enforces the order lifecycle. This is the only actor with
//! dependencies: placing an order reads the table, menu and staff directory, seats the
//! table, and notifies kitchen, waiter and admin; later transitions notify the roles
//! that have to act next and record the sale on delivery.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](comanda_actor::ActorEntity) implementation and the
//!   injected [`OrderContext`]
//! - [`transitions`] - the pure state machine (`impl Order`), no I/O
//! - [`notices`] - the notifications each transition publishes
//! - [`actions`] - [`OrderAction`]
//! - [`error`] - [`OrderError`]
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (order_actor, orders) = order_actor::new(32);
//! tokio::spawn(order_actor.run(OrderContext {
//!     tables: tables.clone(),
//!     menu: menu.clone(),
//!     employees: employees.clone(),
//!     notifications: notifications.clone(),
//!     sales: sales.clone(),
//! }));
//!
//! let id = orders.place_order(params).await?;
//! orders.start_item(id.clone(), 0).await?;
//! ```
//!
//! Side effects run after the transition succeeds. Notifications are best-effort: a
//! failed publish is logged and the transition still commits. Table and sale updates
//! are not; if one fails the order is left as it was.

pub mod actions;
pub mod entity;
pub mod error;
pub mod notices;
pub mod transitions;

pub use actions::*;
pub use entity::OrderContext;
pub use error::*;
pub use transitions::OrderEvent;

use crate::clients::OrderClient;
use crate::model::Order;
use comanda_actor::ResourceActor;

/// Creates a new Order actor and its client.
pub fn new(buffer: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, client) = ResourceActor::new(buffer);
    (actor, OrderClient::new(client))
}
