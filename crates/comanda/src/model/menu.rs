//! A dish on the menu.
//!
//! Orders copy `name` and `price` when they are placed, so later edits here never
//! change an existing order.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

resource_id!(
    /// Type-safe identifier for menu items.
    MenuItemId,
    "dish"
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub ingredients: Vec<String>,
    /// Expected preparation time in minutes.
    pub prep_minutes: u32,
    pub available: bool,
}

/// Payload for adding a dish. New dishes start available.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub ingredients: Vec<String>,
    pub prep_minutes: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub prep_minutes: Option<u32>,
    pub available: Option<bool>,
}
