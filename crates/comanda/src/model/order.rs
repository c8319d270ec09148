//! A customer order and its kitchen line items.
//!
//! # Actor Framework
//! [`Order`] implements [`ActorEntity`](comanda_actor::ActorEntity) in
//! [`order_actor`](crate::order_actor), which owns the state machine:
//!
//! ```text
//! cash:      payment_pending ──validate──▶ confirmed ─┐
//! otherwise: payment_validated ──confirm──▶ confirmed ─┤
//!            (starting an item also works)             ▼
//!   preparing ──all items ready──▶ ready ──▶ courier_en_route ──▶ delivered ──▶ billed
//!   (cancel is allowed from every state before delivered)
//! ```

use crate::model::{EmployeeId, MenuItemId, TableId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

resource_id!(
    /// Type-safe identifier for Orders.
    OrderId,
    "order"
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Yape,
    Transfer,
    Cash,
    Card,
}

impl PaymentMethod {
    /// Cash is the only method a waiter has to confirm by hand.
    pub fn requires_manual_validation(self) -> bool {
        self == PaymentMethod::Cash
    }
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PaymentMethod::Yape => "yape",
            PaymentMethod::Transfer => "transfer",
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Not used as a resting state: orders are created directly in
    /// `PaymentPending` or `PaymentValidated`.
    New,
    PaymentPending,
    PaymentValidated,
    Confirmed,
    Preparing,
    Ready,
    CourierEnRoute,
    Delivered,
    Billed,
    Cancelled,
}

impl OrderStatus {
    /// Still moving through the restaurant (counts as an active order).
    pub fn is_active(self) -> bool {
        !matches!(
            self,
            OrderStatus::Delivered | OrderStatus::Billed | OrderStatus::Cancelled
        )
    }

    /// The kitchen is (or should be) working on it.
    pub fn is_in_kitchen(self) -> bool {
        matches!(self, OrderStatus::Confirmed | OrderStatus::Preparing)
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OrderStatus::New => "new",
            OrderStatus::PaymentPending => "payment_pending",
            OrderStatus::PaymentValidated => "payment_validated",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::CourierEnRoute => "courier_en_route",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Billed => "billed",
            OrderStatus::Cancelled => "cancelled",
        };
        f.write_str(name)
    }
}

/// Per-item progress in the kitchen. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KitchenStatus {
    Pending,
    Preparing,
    Ready,
}

impl KitchenStatus {
    /// The only status this one may move to.
    pub fn next(self) -> Option<KitchenStatus> {
        match self {
            KitchenStatus::Pending => Some(KitchenStatus::Preparing),
            KitchenStatus::Preparing => Some(KitchenStatus::Ready),
            KitchenStatus::Ready => None,
        }
    }
}

impl Display for KitchenStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            KitchenStatus::Pending => "pending",
            KitchenStatus::Preparing => "preparing",
            KitchenStatus::Ready => "ready",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub menu_item_id: MenuItemId,
    /// Dish name at the time the order was placed.
    pub name: String,
    pub quantity: u32,
    /// Dish price at the time the order was placed.
    pub unit_price: Decimal,
    pub note: Option<String>,
    pub kitchen_status: KitchenStatus,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl OrderItem {
    /// `None` if the line does not fit in a `Decimal`.
    pub fn line_total(&self) -> Option<Decimal> {
        self.unit_price.checked_mul(Decimal::from(self.quantity))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub table_id: TableId,
    /// Table number at the time the order was placed, used in messages.
    pub table_number: u32,
    pub customer_id: String,
    pub waiter_id: Option<EmployeeId>,
    pub items: Vec<OrderItem>,
    pub total: Decimal,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    pub payment_validated: bool,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One requested line of a new order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemInput {
    pub menu_item_id: MenuItemId,
    pub quantity: u32,
    pub note: Option<String>,
}

impl OrderItemInput {
    pub fn new(menu_item_id: MenuItemId, quantity: u32) -> Self {
        Self {
            menu_item_id,
            quantity,
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Payload for placing an order. Prices and names are resolved from the menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub table_id: TableId,
    pub customer_id: String,
    pub items: Vec<OrderItemInput>,
    pub payment_method: PaymentMethod,
    pub note: Option<String>,
}

/// Partial update of the free-form parts of an order. Status is never updated
/// this way; use the order actions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub note: Option<String>,
    pub waiter_id: Option<EmployeeId>,
}

/// True iff the order has items and every one of them is `Ready`.
///
/// Always recomputed from the items; never stored.
pub fn all_items_ready(items: &[OrderItem]) -> bool {
    !items.is_empty()
        && items
            .iter()
            .all(|item| item.kitchen_status == KitchenStatus::Ready)
}

/// Sum of `unit_price × quantity` over the items, or `None` on overflow.
pub fn order_total(items: &[OrderItem]) -> Option<Decimal> {
    items.iter().try_fold(Decimal::ZERO, |total, item| {
        total.checked_add(item.line_total()?)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(price: Decimal, quantity: u32, status: KitchenStatus) -> OrderItem {
        OrderItem {
            menu_item_id: MenuItemId(1),
            name: "Ceviche".into(),
            quantity,
            unit_price: price,
            note: None,
            kitchen_status: status,
            started_at: None,
            finished_at: None,
        }
    }

    #[test]
    fn test_all_items_ready() {
        let ready = item(Decimal::ONE, 1, KitchenStatus::Ready);
        let cooking = item(Decimal::ONE, 1, KitchenStatus::Preparing);

        assert!(all_items_ready(&[ready.clone(), ready.clone()]));
        assert!(!all_items_ready(&[ready, cooking]));
        assert!(!all_items_ready(&[]));
    }

    #[test]
    fn test_order_total_multiplies_quantities() {
        let items = [
            item(Decimal::new(1000, 2), 2, KitchenStatus::Pending),
            item(Decimal::new(550, 2), 1, KitchenStatus::Pending),
        ];
        assert_eq!(order_total(&items), Some(Decimal::new(2550, 2)));
    }

    #[test]
    fn test_order_total_overflow_is_none() {
        let huge = item(Decimal::MAX, 2, KitchenStatus::Pending);
        assert_eq!(huge.line_total(), None);
        assert_eq!(order_total(&[huge]), None);

        let max = item(Decimal::MAX, 1, KitchenStatus::Pending);
        assert_eq!(order_total(&[max.clone(), max]), None);
    }

    #[test]
    fn test_kitchen_status_only_moves_forward() {
        assert_eq!(KitchenStatus::Pending.next(), Some(KitchenStatus::Preparing));
        assert_eq!(KitchenStatus::Preparing.next(), Some(KitchenStatus::Ready));
        assert_eq!(KitchenStatus::Ready.next(), None);
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&OrderStatus::CourierEnRoute).unwrap();
        assert_eq!(json, r#""courier_en_route""#);
        assert_eq!(OrderStatus::PaymentPending.to_string(), "payment_pending");
    }
}
