//! A dining table and who is sitting at it.
//!
//! # Actor Framework
//! Managed by a [`ResourceActor`](comanda_actor::ResourceActor); see
//! [`table_actor`](crate::table_actor) for the actions that move a table between
//! [`TableStatus`] values.

use crate::model::{EmployeeId, OrderId};
use serde::{Deserialize, Serialize};

resource_id!(
    /// Type-safe identifier for Tables.
    TableId,
    "table"
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableStatus {
    Free,
    Occupied,
    Reserved,
    Cleaning,
}

impl std::fmt::Display for TableStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TableStatus::Free => "free",
            TableStatus::Occupied => "occupied",
            TableStatus::Reserved => "reserved",
            TableStatus::Cleaning => "cleaning",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub id: TableId,
    /// Number painted on the table; what staff and customers see in messages.
    pub number: u32,
    pub capacity: u32,
    pub status: TableStatus,
    pub customer_id: Option<String>,
    pub waiter_id: Option<EmployeeId>,
    pub active_order: Option<OrderId>,
    /// Code printed on the table for customers to open the menu.
    pub qr_code: Option<String>,
}

impl Table {
    pub fn new(id: TableId, number: u32, capacity: u32, qr_code: Option<String>) -> Self {
        Self {
            id,
            number,
            capacity,
            status: TableStatus::Free,
            customer_id: None,
            waiter_id: None,
            active_order: None,
            qr_code,
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.status == TableStatus::Occupied
    }
}

/// Payload for adding a table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableCreate {
    pub number: u32,
    pub capacity: u32,
    pub qr_code: Option<String>,
}

/// Partial update; `None` fields are left as they are.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableUpdate {
    pub capacity: Option<u32>,
    pub status: Option<TableStatus>,
    pub qr_code: Option<String>,
}
