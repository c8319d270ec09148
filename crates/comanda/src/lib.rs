//! # Comanda
//!
//! Order lifecycle service for a restaurant. Customers order from a table, cash orders
//! wait for a waiter to validate the payment, the kitchen cooks item by item, the order
//! becomes ready when its last item is, a waiter carries it to the table, and the sale
//! is recorded on delivery. Every step notifies the roles that have to act next.
//!
//! ## Layout
//!
//! - [`model`] - records, ids and payloads
//! - `*_actor` - one [`ResourceActor`](comanda_actor::ResourceActor) per resource:
//!   [`order_actor`] (the lifecycle state machine), [`notification_actor`],
//!   [`table_actor`], [`menu_actor`], [`inventory_actor`], [`employee_actor`],
//!   [`sale_actor`]
//! - [`clients`] - typed async handles for each actor
//! - [`lifecycle`] - [`RestaurantSystem`](lifecycle::RestaurantSystem) wiring, delivery
//!   timers, configuration, tracing
//! - [`reports`] - dashboard statistics

pub mod clients;
pub mod employee_actor;
pub mod inventory_actor;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
pub mod notification_actor;
pub mod order_actor;
pub mod reports;
pub mod sale_actor;
pub mod table_actor;
