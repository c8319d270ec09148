//! Pure data structures (DTOs) managed by the resource actors.
//!
//! Every resource gets a type-safe id (`TableId`, `OrderId`, ...) generated by its actor
//! from a `u32` counter, a record type, and the payloads used to create and update it.

/// Declares a `u32` newtype id with the `From<u32>` conversion the actors need and a
/// prefixed `Display` (`order_3`, `table_1`, ...).
macro_rules! resource_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "_{}"), self.0)
            }
        }
    };
}

pub mod employee;
pub mod inventory;
pub mod menu;
pub mod notification;
pub mod order;
pub mod role;
pub mod sale;
pub mod table;

pub use employee::*;
pub use inventory::*;
pub use menu::*;
pub use notification::*;
pub use order::*;
pub use role::*;
pub use sale::*;
pub use table::*;
