//! [`ActorEntity`] implementation for [`InventoryItem`].

use super::actions::InventoryAction;
use super::error::InventoryError;
use crate::model::{InventoryCreate, InventoryItem, InventoryItemId, InventoryUpdate};
use async_trait::async_trait;
use comanda_actor::ActorEntity;
use rust_decimal::Decimal;

fn non_negative(field: &str, value: Decimal) -> Result<Decimal, InventoryError> {
    if value.is_sign_negative() {
        return Err(InventoryError::ValidationError(format!(
            "{field} cannot be negative"
        )));
    }
    Ok(value)
}

#[async_trait]
impl ActorEntity for InventoryItem {
    type Id = InventoryItemId;
    type Create = InventoryCreate;
    type Update = InventoryUpdate;
    type Action = InventoryAction;
    type ActionResult = Decimal;
    type Context = ();
    type Error = InventoryError;

    fn from_create_params(
        id: InventoryItemId,
        params: InventoryCreate,
    ) -> Result<Self, InventoryError> {
        Ok(Self {
            id,
            name: params.name,
            category: params.category,
            stock: non_negative("stock", params.stock)?,
            minimum: non_negative("minimum", params.minimum)?,
            unit: params.unit,
            unit_cost: non_negative("unit cost", params.unit_cost)?,
            supplier: params.supplier,
        })
    }

    async fn on_update(&mut self, update: InventoryUpdate, _ctx: &()) -> Result<(), InventoryError> {
        if let Some(stock) = update.stock {
            self.stock = non_negative("stock", stock)?;
        }
        if let Some(minimum) = update.minimum {
            self.minimum = non_negative("minimum", minimum)?;
        }
        if let Some(unit_cost) = update.unit_cost {
            self.unit_cost = non_negative("unit cost", unit_cost)?;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(unit) = update.unit {
            self.unit = unit;
        }
        if let Some(supplier) = update.supplier {
            self.supplier = Some(supplier);
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: InventoryAction,
        _ctx: &(),
    ) -> Result<Decimal, InventoryError> {
        match action {
            InventoryAction::AdjustStock(delta) => {
                let next = self.stock.checked_add(delta).ok_or_else(|| {
                    InventoryError::ValidationError("Stock does not fit in a decimal".into())
                })?;
                if next < Decimal::ZERO {
                    return Err(InventoryError::InsufficientStock {
                        requested: -delta,
                        available: self.stock,
                    });
                }
                self.stock = next;
                Ok(self.stock)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_stock_never_goes_negative() {
        let mut rice = InventoryItem::from_create_params(
            InventoryItemId(1),
            InventoryCreate {
                name: "Rice".into(),
                category: "dry goods".into(),
                stock: Decimal::from(10),
                minimum: Decimal::from(3),
                unit: "kg".into(),
                unit_cost: Decimal::new(420, 2),
                supplier: Some("Mercado Central".into()),
            },
        )
        .unwrap();

        let left = rice
            .handle_action(InventoryAction::AdjustStock(Decimal::from(-8)), &())
            .await
            .unwrap();
        assert_eq!(left, Decimal::from(2));
        assert!(rice.is_low_stock());

        let err = rice
            .handle_action(InventoryAction::AdjustStock(Decimal::from(-5)), &())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            InventoryError::InsufficientStock {
                requested: Decimal::from(5),
                available: Decimal::from(2),
            }
        );
        assert_eq!(rice.stock, Decimal::from(2));
    }

    #[tokio::test]
    async fn test_stock_overflow_is_rejected() {
        let mut salt = InventoryItem::from_create_params(
            InventoryItemId(2),
            InventoryCreate {
                name: "Salt".into(),
                category: "dry goods".into(),
                stock: Decimal::MAX,
                minimum: Decimal::ZERO,
                unit: "kg".into(),
                unit_cost: Decimal::ONE,
                supplier: None,
            },
        )
        .unwrap();

        assert!(matches!(
            salt.handle_action(InventoryAction::AdjustStock(Decimal::ONE), &())
                .await,
            Err(InventoryError::ValidationError(_))
        ));
        assert_eq!(salt.stock, Decimal::MAX);
    }
}
