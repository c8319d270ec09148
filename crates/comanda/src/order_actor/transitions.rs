//! The order state machine.
//!
//! Pure functions over [`Order`]: every method checks all of its preconditions before
//! touching the order, so an `Err` always leaves it unchanged. The actor turns the
//! returned [`OrderEvent`] into notifications, sales and table updates.

use super::actions::OrderAction;
use super::error::OrderError;
use crate::model::{all_items_ready, KitchenStatus, Order, OrderStatus};
use chrono::{DateTime, Utc};

/// What a successful transition did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderEvent {
    PaymentValidated,
    Confirmed,
    /// The whole order was sent to the kitchen without starting an item.
    PreparationStarted,
    ItemStarted { index: usize },
    /// An item finished while others are still pending or cooking.
    ItemReady { index: usize },
    /// The last item finished; the order is now `Ready`.
    OrderReady { index: usize },
    InTransit,
    Delivered,
    Billed,
    Cancelled { from: OrderStatus },
}

/// States from which an order can still be cancelled.
const CANCELLABLE: [OrderStatus; 7] = [
    OrderStatus::New,
    OrderStatus::PaymentPending,
    OrderStatus::PaymentValidated,
    OrderStatus::Confirmed,
    OrderStatus::Preparing,
    OrderStatus::Ready,
    OrderStatus::CourierEnRoute,
];

impl Order {
    /// Applies one lifecycle action at time `now`.
    pub fn apply(&mut self, action: OrderAction, now: DateTime<Utc>) -> Result<OrderEvent, OrderError> {
        match action {
            OrderAction::ValidatePayment => self.validate_payment(now),
            OrderAction::Confirm => self.confirm(now),
            OrderAction::StartItem(index) => self.start_item(index, now),
            OrderAction::CompleteItem(index) => self.complete_item(index, now),
            OrderAction::SetItemStatus { index, status } => match status {
                KitchenStatus::Preparing => self.start_item(index, now),
                KitchenStatus::Ready => self.complete_item(index, now),
                KitchenStatus::Pending => Err(OrderError::InvalidItemTransition {
                    index,
                    from: self.item_status(index)?,
                    to: KitchenStatus::Pending,
                }),
            },
            OrderAction::SetStatus(target) => self.set_status(target, now),
            OrderAction::MarkInTransit => self.mark_in_transit(now),
            OrderAction::MarkDelivered => self.mark_delivered(now),
            OrderAction::CloseBill => self.close_bill(now),
            OrderAction::Cancel => self.cancel(now),
        }
    }

    fn validate_payment(&mut self, now: DateTime<Utc>) -> Result<OrderEvent, OrderError> {
        if !self.payment_method.requires_manual_validation() {
            return Err(OrderError::PaymentMethodMismatch(self.payment_method));
        }
        self.require(&[OrderStatus::PaymentPending], OrderStatus::PaymentValidated)?;
        self.payment_validated = true;
        self.move_to(OrderStatus::Confirmed, now);
        Ok(OrderEvent::PaymentValidated)
    }

    fn confirm(&mut self, now: DateTime<Utc>) -> Result<OrderEvent, OrderError> {
        if !self.payment_validated {
            return Err(OrderError::PaymentNotValidated);
        }
        self.require(&[OrderStatus::PaymentValidated], OrderStatus::Confirmed)?;
        self.move_to(OrderStatus::Confirmed, now);
        Ok(OrderEvent::Confirmed)
    }

    fn begin_preparation(&mut self, now: DateTime<Utc>) -> Result<OrderEvent, OrderError> {
        self.require(&[OrderStatus::Confirmed], OrderStatus::Preparing)?;
        self.move_to(OrderStatus::Preparing, now);
        Ok(OrderEvent::PreparationStarted)
    }

    /// `Pending → Preparing` for one item. Starting the first item of a validated or
    /// confirmed order also moves the order to `Preparing`.
    fn start_item(&mut self, index: usize, now: DateTime<Utc>) -> Result<OrderEvent, OrderError> {
        let current = self.item_status(index)?;
        if !self.payment_validated {
            return Err(OrderError::PaymentNotValidated);
        }
        if current.next() != Some(KitchenStatus::Preparing) {
            return Err(OrderError::InvalidItemTransition {
                index,
                from: current,
                to: KitchenStatus::Preparing,
            });
        }
        self.require(
            &[
                OrderStatus::PaymentValidated,
                OrderStatus::Confirmed,
                OrderStatus::Preparing,
            ],
            OrderStatus::Preparing,
        )?;

        let item = &mut self.items[index];
        item.kitchen_status = KitchenStatus::Preparing;
        item.started_at = Some(now);
        self.move_to(OrderStatus::Preparing, now);
        Ok(OrderEvent::ItemStarted { index })
    }

    /// `Preparing → Ready` for one item; the order becomes `Ready` with its last item.
    fn complete_item(&mut self, index: usize, now: DateTime<Utc>) -> Result<OrderEvent, OrderError> {
        let current = self.item_status(index)?;
        if !self.payment_validated {
            return Err(OrderError::PaymentNotValidated);
        }
        if current.next() != Some(KitchenStatus::Ready) {
            return Err(OrderError::InvalidItemTransition {
                index,
                from: current,
                to: KitchenStatus::Ready,
            });
        }
        self.require(&[OrderStatus::Preparing], OrderStatus::Ready)?;

        let item = &mut self.items[index];
        item.kitchen_status = KitchenStatus::Ready;
        item.finished_at = Some(now);
        self.updated_at = now;

        if all_items_ready(&self.items) {
            self.move_to(OrderStatus::Ready, now);
            Ok(OrderEvent::OrderReady { index })
        } else {
            Ok(OrderEvent::ItemReady { index })
        }
    }

    fn mark_in_transit(&mut self, now: DateTime<Utc>) -> Result<OrderEvent, OrderError> {
        self.require(&[OrderStatus::Ready], OrderStatus::CourierEnRoute)?;
        self.move_to(OrderStatus::CourierEnRoute, now);
        Ok(OrderEvent::InTransit)
    }

    fn mark_delivered(&mut self, now: DateTime<Utc>) -> Result<OrderEvent, OrderError> {
        self.require(&[OrderStatus::CourierEnRoute], OrderStatus::Delivered)?;
        self.move_to(OrderStatus::Delivered, now);
        Ok(OrderEvent::Delivered)
    }

    fn close_bill(&mut self, now: DateTime<Utc>) -> Result<OrderEvent, OrderError> {
        self.require(&[OrderStatus::Delivered], OrderStatus::Billed)?;
        self.move_to(OrderStatus::Billed, now);
        Ok(OrderEvent::Billed)
    }

    fn cancel(&mut self, now: DateTime<Utc>) -> Result<OrderEvent, OrderError> {
        let from = self.status;
        self.require(&CANCELLABLE, OrderStatus::Cancelled)?;
        self.move_to(OrderStatus::Cancelled, now);
        Ok(OrderEvent::Cancelled { from })
    }

    /// `Ready` is never a valid target: it only follows from the items.
    fn set_status(&mut self, target: OrderStatus, now: DateTime<Utc>) -> Result<OrderEvent, OrderError> {
        match target {
            OrderStatus::Confirmed => self.confirm(now),
            OrderStatus::Preparing => self.begin_preparation(now),
            OrderStatus::CourierEnRoute => self.mark_in_transit(now),
            OrderStatus::Delivered => self.mark_delivered(now),
            OrderStatus::Billed => self.close_bill(now),
            OrderStatus::Cancelled => self.cancel(now),
            OrderStatus::New
            | OrderStatus::PaymentPending
            | OrderStatus::PaymentValidated
            | OrderStatus::Ready => Err(OrderError::InvalidTransition {
                from: self.status,
                to: target,
            }),
        }
    }

    fn item_status(&self, index: usize) -> Result<KitchenStatus, OrderError> {
        self.items
            .get(index)
            .map(|item| item.kitchen_status)
            .ok_or(OrderError::ItemIndexOutOfRange {
                index,
                len: self.items.len(),
            })
    }

    fn require(&self, allowed: &[OrderStatus], to: OrderStatus) -> Result<(), OrderError> {
        if allowed.contains(&self.status) {
            Ok(())
        } else {
            Err(OrderError::InvalidTransition {
                from: self.status,
                to,
            })
        }
    }

    fn move_to(&mut self, status: OrderStatus, now: DateTime<Utc>) {
        self.status = status;
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MenuItemId, OrderId, OrderItem, PaymentMethod, TableId};
    use chrono::Duration;
    use rust_decimal::Decimal;

    fn new_order(method: PaymentMethod, items: usize) -> Order {
        let now = Utc::now();
        let cash = method.requires_manual_validation();
        Order {
            id: OrderId(1),
            table_id: TableId(1),
            table_number: 5,
            customer_id: "cust_1".into(),
            waiter_id: None,
            items: (0..items)
                .map(|i| OrderItem {
                    menu_item_id: MenuItemId(i as u32 + 1),
                    name: format!("dish {i}"),
                    quantity: 1,
                    unit_price: Decimal::TEN,
                    note: None,
                    kitchen_status: KitchenStatus::Pending,
                    started_at: None,
                    finished_at: None,
                })
                .collect(),
            total: Decimal::TEN * Decimal::from(items),
            status: if cash {
                OrderStatus::PaymentPending
            } else {
                OrderStatus::PaymentValidated
            },
            payment_method: method,
            payment_validated: !cash,
            note: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_happy_path_through_the_kitchen() {
        let mut order = new_order(PaymentMethod::Yape, 2);
        let now = Utc::now();

        assert_eq!(
            order.apply(OrderAction::StartItem(0), now).unwrap(),
            OrderEvent::ItemStarted { index: 0 }
        );
        assert_eq!(order.status, OrderStatus::Preparing);
        order.apply(OrderAction::StartItem(1), now).unwrap();

        assert_eq!(
            order.apply(OrderAction::CompleteItem(0), now).unwrap(),
            OrderEvent::ItemReady { index: 0 }
        );
        assert_eq!(order.status, OrderStatus::Preparing);

        let later = now + Duration::minutes(12);
        assert_eq!(
            order.apply(OrderAction::CompleteItem(1), later).unwrap(),
            OrderEvent::OrderReady { index: 1 }
        );
        assert_eq!(order.status, OrderStatus::Ready);
        assert_eq!(order.items[1].finished_at, Some(later));
        assert_eq!(order.updated_at, later);

        order.apply(OrderAction::MarkInTransit, later).unwrap();
        order.apply(OrderAction::MarkDelivered, later).unwrap();
        order.apply(OrderAction::CloseBill, later).unwrap();
        assert_eq!(order.status, OrderStatus::Billed);
    }

    #[test]
    fn test_cash_orders_need_validation_before_the_kitchen() {
        let mut order = new_order(PaymentMethod::Cash, 1);
        let now = Utc::now();
        let before = order.clone();

        assert_eq!(
            order.apply(OrderAction::Confirm, now),
            Err(OrderError::PaymentNotValidated)
        );
        assert_eq!(
            order.apply(OrderAction::StartItem(0), now),
            Err(OrderError::PaymentNotValidated)
        );
        assert_eq!(order, before);

        order.apply(OrderAction::ValidatePayment, now).unwrap();
        assert!(order.payment_validated);
        assert_eq!(order.status, OrderStatus::Confirmed);

        assert_eq!(
            order.apply(OrderAction::ValidatePayment, now),
            Err(OrderError::InvalidTransition {
                from: OrderStatus::Confirmed,
                to: OrderStatus::PaymentValidated
            })
        );
    }

    #[test]
    fn test_validate_payment_only_applies_to_cash() {
        let mut order = new_order(PaymentMethod::Card, 1);
        assert_eq!(
            order.apply(OrderAction::ValidatePayment, Utc::now()),
            Err(OrderError::PaymentMethodMismatch(PaymentMethod::Card))
        );
    }

    #[test]
    fn test_items_move_strictly_forward() {
        let mut order = new_order(PaymentMethod::Transfer, 2);
        let now = Utc::now();

        assert_eq!(
            order.apply(OrderAction::CompleteItem(0), now),
            Err(OrderError::InvalidItemTransition {
                index: 0,
                from: KitchenStatus::Pending,
                to: KitchenStatus::Ready
            })
        );

        order.apply(OrderAction::StartItem(0), now).unwrap();
        assert_eq!(
            order.apply(OrderAction::StartItem(0), now),
            Err(OrderError::InvalidItemTransition {
                index: 0,
                from: KitchenStatus::Preparing,
                to: KitchenStatus::Preparing
            })
        );
        assert_eq!(
            order.apply(
                OrderAction::SetItemStatus {
                    index: 0,
                    status: KitchenStatus::Pending
                },
                now
            ),
            Err(OrderError::InvalidItemTransition {
                index: 0,
                from: KitchenStatus::Preparing,
                to: KitchenStatus::Pending
            })
        );
        assert_eq!(
            order.apply(OrderAction::StartItem(7), now),
            Err(OrderError::ItemIndexOutOfRange { index: 7, len: 2 })
        );
    }

    #[test]
    fn test_ready_cannot_be_set_directly() {
        let mut order = new_order(PaymentMethod::Yape, 1);
        order.apply(OrderAction::Confirm, Utc::now()).unwrap();
        assert_eq!(
            order.apply(OrderAction::SetStatus(OrderStatus::Ready), Utc::now()),
            Err(OrderError::InvalidTransition {
                from: OrderStatus::Confirmed,
                to: OrderStatus::Ready
            })
        );

        assert_eq!(
            order
                .apply(OrderAction::SetStatus(OrderStatus::Preparing), Utc::now())
                .unwrap(),
            OrderEvent::PreparationStarted
        );
        assert_eq!(order.status, OrderStatus::Preparing);
    }

    #[test]
    fn test_cancel_stops_at_delivery() {
        let mut order = new_order(PaymentMethod::Cash, 1);
        assert_eq!(
            order.apply(OrderAction::Cancel, Utc::now()).unwrap(),
            OrderEvent::Cancelled {
                from: OrderStatus::PaymentPending
            }
        );
        assert_eq!(
            order.apply(OrderAction::StartItem(0), Utc::now()),
            Err(OrderError::PaymentNotValidated)
        );

        let mut delivered = new_order(PaymentMethod::Card, 1);
        delivered.status = OrderStatus::Delivered;
        assert_eq!(
            delivered.apply(OrderAction::Cancel, Utc::now()),
            Err(OrderError::InvalidTransition {
                from: OrderStatus::Delivered,
                to: OrderStatus::Cancelled
            })
        );
    }

    #[test]
    fn test_cancelled_order_leaves_the_kitchen() {
        let mut order = new_order(PaymentMethod::Yape, 2);
        order.apply(OrderAction::StartItem(0), Utc::now()).unwrap();
        order.apply(OrderAction::Cancel, Utc::now()).unwrap();
        assert_eq!(
            order.apply(OrderAction::CompleteItem(0), Utc::now()),
            Err(OrderError::InvalidTransition {
                from: OrderStatus::Cancelled,
                to: OrderStatus::Ready
            })
        );
    }
}
