//! # ActorEntity Trait
//!
//! The contract every restaurant resource implements to be managed by a
//! [`ResourceActor`](crate::ResourceActor): associated types for ids, DTOs, actions,
//! injected context and errors, plus async lifecycle hooks.
//!
//! `on_create` and `on_delete` are **provided methods**; override them only when the
//! resource has side effects (the order actor seats a table and notifies staff on create).

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Ordering
/// `Id` must be `Ord`: the actor keeps its store in a `BTreeMap`, and ids are generated
/// from an increasing counter, so listing returns records in insertion order.
///
/// # Errors
/// One error enum per resource. The actor boxes it into
/// [`FrameworkError::EntityError`](crate::FrameworkError::EntityError) and clients recover
/// it with [`FrameworkError::downcast_entity`](crate::FrameworkError::downcast_entity).
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Unique identifier; generated from the actor's `u32` counter.
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload required to create a new record.
    type Create: Send + Sync + Debug;

    /// Partial update payload.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations (e.g. `ToggleAvailability`, `CompleteItem`).
    type Action: Send + Sync + Debug;

    /// Result returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected into the actor at `run()` time. `()` when none.
    type Context: Send + Sync;

    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the record from its generated id and payload.
    /// Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Runs before the record is stored. An error aborts the creation.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Runs before the record is removed. An error keeps the record.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a resource-specific action. On error the record must be left unchanged.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
