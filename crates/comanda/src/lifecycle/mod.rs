//! # Runtime
//!
//! Wiring, configuration and background work for a running restaurant:
//!
//! - [`restaurant_system`] - starts every actor and injects their dependencies
//! - [`delivery`] - cancellable delivery timers
//! - [`config`] - [`SystemConfig`] from the environment
//! - [`tracing`] - subscriber setup for binaries

pub mod config;
pub mod delivery;
pub mod restaurant_system;
pub mod tracing;

pub use config::SystemConfig;
pub use delivery::DeliveryScheduler;
pub use restaurant_system::{RestaurantSystem, SystemError};
