//! A stocked ingredient or supply.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

resource_id!(
    /// Type-safe identifier for inventory items.
    InventoryItemId,
    "inv"
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: InventoryItemId,
    pub name: String,
    pub category: String,
    pub stock: Decimal,
    /// Restock threshold.
    pub minimum: Decimal,
    pub unit: String,
    pub unit_cost: Decimal,
    pub supplier: Option<String>,
}

impl InventoryItem {
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.minimum
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.stock.is_zero()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryCreate {
    pub name: String,
    pub category: String,
    pub stock: Decimal,
    pub minimum: Decimal,
    pub unit: String,
    pub unit_cost: Decimal,
    pub supplier: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub stock: Option<Decimal>,
    pub minimum: Option<Decimal>,
    pub unit: Option<String>,
    pub unit_cost: Option<Decimal>,
    pub supplier: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flour(stock: i64, minimum: i64) -> InventoryItem {
        InventoryItem {
            id: InventoryItemId(1),
            name: "Flour".into(),
            category: "dry goods".into(),
            stock: Decimal::from(stock),
            minimum: Decimal::from(minimum),
            unit: "kg".into(),
            unit_cost: Decimal::new(350, 2),
            supplier: None,
        }
    }

    #[test]
    fn test_low_stock_includes_the_threshold() {
        assert!(flour(5, 5).is_low_stock());
        assert!(!flour(6, 5).is_low_stock());
        assert!(flour(0, 5).is_out_of_stock());
        assert!(!flour(1, 5).is_out_of_stock());
    }
}
