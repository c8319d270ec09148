//! A member of staff.

use crate::model::Role;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

resource_id!(
    /// Type-safe identifier for employees.
    EmployeeId,
    "emp"
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub role: Role,
    pub email: String,
    pub phone: Option<String>,
    pub hired_on: NaiveDate,
    pub active: bool,
    pub shift: Option<String>,
    /// Currently logged in and taking work.
    pub online: bool,
}

impl Employee {
    /// Can be handed a new order right now.
    pub fn is_available_waiter(&self) -> bool {
        self.role == Role::Waiter && self.active && self.online
    }
}

/// Payload for hiring. New employees start active and offline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub name: String,
    pub role: Role,
    pub email: String,
    pub phone: Option<String>,
    pub hired_on: NaiveDate,
    pub shift: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub role: Option<Role>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub shift: Option<String>,
}
