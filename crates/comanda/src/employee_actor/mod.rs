//! # Employee Actor
//!
//! The staff directory. Orders placed at a table without a waiter are handed to the
//! first active, online waiter found here.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::EmployeeClient;
use crate::model::Employee;
use comanda_actor::ResourceActor;

/// Creates a new Employee actor and its client.
pub fn new(buffer: usize) -> (ResourceActor<Employee>, EmployeeClient) {
    let (actor, client) = ResourceActor::new(buffer);
    (actor, EmployeeClient::new(client))
}
