//! [`ActorEntity`] implementation for [`MenuItem`].

use super::actions::MenuAction;
use super::error::MenuError;
use crate::model::{MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
use async_trait::async_trait;
use comanda_actor::ActorEntity;
use rust_decimal::Decimal;

fn check_price(name: &str, price: Decimal) -> Result<(), MenuError> {
    if price.is_sign_negative() {
        return Err(MenuError::ValidationError(format!(
            "price of {name} cannot be negative"
        )));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for MenuItem {
    type Id = MenuItemId;
    type Create = MenuItemCreate;
    type Update = MenuItemUpdate;
    type Action = MenuAction;
    type ActionResult = bool;
    type Context = ();
    type Error = MenuError;

    fn from_create_params(id: MenuItemId, params: MenuItemCreate) -> Result<Self, MenuError> {
        if params.name.trim().is_empty() {
            return Err(MenuError::ValidationError("dish name is empty".into()));
        }
        check_price(&params.name, params.price)?;
        Ok(Self {
            id,
            name: params.name,
            description: params.description,
            price: params.price,
            category: params.category,
            ingredients: params.ingredients,
            prep_minutes: params.prep_minutes,
            available: true,
        })
    }

    /// Merges every `Some` field of the update.
    async fn on_update(&mut self, update: MenuItemUpdate, _ctx: &()) -> Result<(), MenuError> {
        if let Some(price) = update.price {
            check_price(&self.name, price)?;
            self.price = price;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(ingredients) = update.ingredients {
            self.ingredients = ingredients;
        }
        if let Some(prep_minutes) = update.prep_minutes {
            self.prep_minutes = prep_minutes;
        }
        if let Some(available) = update.available {
            self.available = available;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: MenuAction, _ctx: &()) -> Result<bool, MenuError> {
        match action {
            MenuAction::ToggleAvailability => {
                self.available = !self.available;
                Ok(self.available)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lomo() -> MenuItemCreate {
        MenuItemCreate {
            name: "Lomo saltado".into(),
            description: "Stir-fried beef".into(),
            price: Decimal::new(3200, 2),
            category: "mains".into(),
            ingredients: vec!["beef".into(), "onion".into()],
            prep_minutes: 20,
        }
    }

    #[tokio::test]
    async fn test_negative_price_is_rejected_and_toggle_flips() {
        let mut dish = MenuItem::from_create_params(MenuItemId(1), lomo()).unwrap();
        assert!(dish.available);

        let err = dish
            .on_update(
                MenuItemUpdate {
                    price: Some(Decimal::new(-1, 0)),
                    ..Default::default()
                },
                &(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, MenuError::ValidationError(_)));

        assert!(!dish
            .handle_action(MenuAction::ToggleAvailability, &())
            .await
            .unwrap());
        assert!(dish
            .handle_action(MenuAction::ToggleAvailability, &())
            .await
            .unwrap());
    }
}
