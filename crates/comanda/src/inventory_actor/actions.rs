//! Custom actions for the Inventory actor.

use rust_decimal::Decimal;

#[derive(Debug, Clone)]
pub enum InventoryAction {
    /// Add (positive) or consume (negative) stock; returns the new level.
    AdjustStock(Decimal),
}
