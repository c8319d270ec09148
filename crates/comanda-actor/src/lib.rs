//! # Comanda Actor Engine
//!
//! Building blocks for the restaurant service: every resource (tables, dishes, orders,
//! notifications, ...) lives inside its own [`ResourceActor`], which owns the records
//! and processes requests **one at a time, to completion**. Callers never touch the
//! records directly; they hold a cheap, cloneable [`ResourceClient`].
//!
//! ## Why one actor per resource?
//!
//! - **No locks**: the actor task is the only owner of its store, so a mutation can never
//!   be observed half-done.
//! - **Uniform API**: Create / Get / List / Update / Delete / Clear plus a resource-specific
//!   `Action` is enough for every registry in the restaurant.
//! - **Explicit wiring**: dependencies (e.g. the order actor needs the menu to snapshot
//!   prices) are injected at `run()` time instead of living in a global.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - domain rules and lifecycle hooks
//! 2. **Runtime Layer** ([`ResourceActor`]) - ordered store, id generation, message loop
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed async calls
//!
//! ## Example
//!
//! ```rust
//! use comanda_actor::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Dish { id: u32, name: String, available: bool }
//! #[derive(Debug)] struct DishCreate { name: String }
//! #[derive(Debug)] struct DishUpdate { name: Option<String> }
//! #[derive(Debug)] enum DishAction { Toggle }
//! #[derive(Debug, thiserror::Error)] #[error("dish error")] struct DishError;
//!
//! #[async_trait]
//! impl ActorEntity for Dish {
//!     type Id = u32;
//!     type Create = DishCreate;
//!     type Update = DishUpdate;
//!     type Action = DishAction;
//!     type ActionResult = bool;
//!     type Context = ();
//!     type Error = DishError;
//!
//!     fn from_create_params(id: u32, params: DishCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, name: params.name, available: true })
//!     }
//!     async fn on_update(&mut self, update: DishUpdate, _: &()) -> Result<(), Self::Error> {
//!         if let Some(name) = update.name { self.name = name; }
//!         Ok(())
//!     }
//!     async fn handle_action(&mut self, action: DishAction, _: &()) -> Result<bool, Self::Error> {
//!         match action {
//!             DishAction::Toggle => { self.available = !self.available; Ok(self.available) }
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Dish>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(DishCreate { name: "Lomo Saltado".into() }).await.unwrap();
//!     let available = client.perform_action(id, DishAction::Toggle).await.unwrap();
//!     assert!(!available);
//!     assert_eq!(client.list().await.unwrap().len(), 1);
//! }
//! ```
//!
//! ## Context Injection
//!
//! Dependencies are injected at **runtime** via `run(context)`, not at construction. The
//! restaurant's order actor is started with the clients of the table, menu, employee,
//! notification and sales actors, all created beforehand:
//!
//! ```rust,ignore
//! let (order_actor, order_client) = ResourceActor::<Order>::new(32);
//! tokio::spawn(order_actor.run(OrderContext { tables, menu, employees, notifications, sales }));
//! ```
//!
//! ## Testing
//!
//! See the [`mock`] module: `MockClient` answers requests from a queue of expectations
//! so an actor's hooks can be tested against fake dependencies.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
