//! [`ActorEntity`] implementation for [`Order`].
//!
//! `on_create` does the cross-resource work of placing an order: it resolves the table,
//! snapshots dish names and prices, picks a waiter, seats the table and notifies staff.
//! `handle_action` runs the pure transition, then its side effects.

use super::actions::OrderAction;
use super::error::OrderError;
use super::notices;
use super::transitions::OrderEvent;
use crate::clients::{EmployeeClient, MenuClient, NotificationClient, SaleClient, TableClient};
use crate::model::{
    order_total, KitchenStatus, Order, OrderCreate, OrderId, OrderItem, OrderStatus, OrderUpdate,
    SaleCreate,
};
use crate::table_actor::TableError;
use async_trait::async_trait;
use chrono::Utc;
use comanda_actor::{ActorClient, ActorEntity};
use rust_decimal::Decimal;
use tracing::{info, warn};

/// Clients the order actor talks to, injected at `run()` time.
#[derive(Clone)]
pub struct OrderContext {
    pub tables: TableClient,
    pub menu: MenuClient,
    pub employees: EmployeeClient,
    pub notifications: NotificationClient,
    pub sales: SaleClient,
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = OrderAction;
    /// Status after the action.
    type ActionResult = OrderStatus;
    type Context = OrderContext;
    type Error = OrderError;

    /// Builds the order with unpriced items; `on_create` fills in names and prices.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        if params.items.is_empty() {
            return Err(OrderError::ValidationError(
                "an order needs at least one item".into(),
            ));
        }
        if let Some(index) = params.items.iter().position(|item| item.quantity == 0) {
            return Err(OrderError::ValidationError(format!(
                "item {index} has quantity 0"
            )));
        }

        let now = Utc::now();
        let cash = params.payment_method.requires_manual_validation();
        Ok(Self {
            id,
            table_id: params.table_id,
            table_number: 0,
            customer_id: params.customer_id,
            waiter_id: None,
            items: params
                .items
                .into_iter()
                .map(|input| OrderItem {
                    menu_item_id: input.menu_item_id,
                    name: String::new(),
                    quantity: input.quantity,
                    unit_price: Decimal::ZERO,
                    note: input.note,
                    kitchen_status: KitchenStatus::Pending,
                    started_at: None,
                    finished_at: None,
                })
                .collect(),
            total: Decimal::ZERO,
            status: if cash {
                OrderStatus::PaymentPending
            } else {
                OrderStatus::PaymentValidated
            },
            payment_method: params.payment_method,
            payment_validated: !cash,
            note: params.note,
            created_at: now,
            updated_at: now,
        })
    }

    async fn on_create(&mut self, ctx: &OrderContext) -> Result<(), OrderError> {
        let table = ctx
            .tables
            .get(self.table_id.clone())
            .await?
            .ok_or_else(|| OrderError::InvalidTable(self.table_id.to_string()))?;
        self.table_number = table.number;

        for item in &mut self.items {
            let dish = ctx
                .menu
                .get(item.menu_item_id.clone())
                .await?
                .ok_or_else(|| OrderError::InvalidMenuItem(item.menu_item_id.to_string()))?;
            if !dish.available {
                return Err(OrderError::MenuItemUnavailable(dish.name));
            }
            item.name = dish.name;
            item.unit_price = dish.price;
        }
        self.total = order_total(&self.items)
            .ok_or_else(|| OrderError::ValidationError("Order total is too large".into()))?;

        self.waiter_id = match table.waiter_id {
            Some(waiter_id) => Some(waiter_id),
            None => ctx
                .employees
                .first_available_waiter()
                .await?
                .map(|waiter| waiter.id),
        };

        ctx.tables
            .seat(
                self.table_id.clone(),
                self.id.clone(),
                self.customer_id.clone(),
                self.waiter_id.clone(),
            )
            .await?;

        info!(
            order_id = %self.id,
            table = self.table_number,
            total = %self.total,
            status = %self.status,
            "Order placed"
        );
        ctx.notifications
            .publish(notices::order_placed(self))
            .await;
        Ok(())
    }

    /// Only the note and the waiter can be changed directly.
    async fn on_update(&mut self, update: OrderUpdate, _ctx: &OrderContext) -> Result<(), OrderError> {
        if let Some(note) = update.note {
            self.note = Some(note);
        }
        if let Some(waiter_id) = update.waiter_id {
            self.waiter_id = Some(waiter_id);
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Deleting an order that is still in progress frees its table.
    async fn on_delete(&self, ctx: &OrderContext) -> Result<(), OrderError> {
        if self.status.is_active() {
            self.vacate_table(ctx).await?;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        ctx: &OrderContext,
    ) -> Result<OrderStatus, OrderError> {
        let from = self.status;
        let event = self.apply(action, Utc::now())?;
        info!(order_id = %self.id, %from, to = %self.status, ?event, "Order transition");

        match event {
            OrderEvent::Delivered => {
                ctx.sales
                    .record(SaleCreate {
                        order_id: self.id.clone(),
                        total: self.total,
                        payment_method: self.payment_method,
                    })
                    .await?;
            }
            OrderEvent::Billed | OrderEvent::Cancelled { .. } => self.vacate_table(ctx).await?,
            _ => {}
        }

        ctx.notifications
            .publish(notices::for_event(self, event))
            .await;
        Ok(self.status)
    }
}

impl Order {
    /// Frees the table if this order is still its active order. A table that no
    /// longer exists is not an error.
    async fn vacate_table(&self, ctx: &OrderContext) -> Result<(), OrderError> {
        match ctx.tables.vacate(self.table_id.clone(), self.id.clone()).await {
            Ok(_) => Ok(()),
            Err(TableError::NotFound(table)) => {
                warn!(order_id = %self.id, %table, "Table gone, nothing to vacate");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}
