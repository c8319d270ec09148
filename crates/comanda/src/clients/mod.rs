//! # Typed Clients
//!
//! One wrapper per actor around a generic [`ResourceClient`](comanda_actor::ResourceClient).
//! Each implements [`ActorClient`](comanda_actor::ActorClient) for `get`/`list`/`delete`
//! and adds the resource's own operations with its own error type.

pub mod employee_client;
pub mod inventory_client;
pub mod menu_client;
pub mod notification_client;
pub mod order_client;
pub mod sale_client;
pub mod table_client;

pub use employee_client::EmployeeClient;
pub use inventory_client::InventoryClient;
pub use menu_client::MenuClient;
pub use notification_client::NotificationClient;
pub use order_client::OrderClient;
pub use sale_client::SaleClient;
pub use table_client::TableClient;
