//! Notifications published by the order lifecycle.

use super::transitions::OrderEvent;
use crate::model::{NotificationCreate, NotificationKind, Order, Priority, Role};
use rust_decimal::Decimal;

fn money(amount: Decimal) -> String {
    format!("S/ {amount:.2}")
}

fn notice(order: &Order, kind: NotificationKind, role: Role, message: String) -> NotificationCreate {
    NotificationCreate::new(kind, role, message).about(order.id.clone(), order.table_id.clone())
}

/// Kitchen, waiter and admin hear about a new order; cash orders also ask the waiter
/// to collect the payment.
pub fn order_placed(order: &Order) -> Vec<NotificationCreate> {
    let table = order.table_number;
    let mut notices = vec![notice(
        order,
        NotificationKind::NewOrder,
        Role::Kitchen,
        format!("New order - Table {table}"),
    )
    .priority(Priority::High)
    .with_sound()];

    if order.waiter_id.is_some() {
        notices.push(
            notice(
                order,
                NotificationKind::NewOrder,
                Role::Waiter,
                format!("Order received Table {table} - Total: {}", money(order.total)),
            )
            .priority(Priority::High)
            .with_sound(),
        );
    }

    if order.payment_method.requires_manual_validation() {
        notices.push(
            notice(
                order,
                NotificationKind::PaymentPending,
                Role::Waiter,
                format!(
                    "VALIDATE PAYMENT - Table {table}: {} (cash)",
                    money(order.total)
                ),
            )
            .priority(Priority::Critical)
            .with_sound(),
        );
    }

    notices.push(notice(
        order,
        NotificationKind::NewOrder,
        Role::Admin,
        format!("New order registered - Table {table}"),
    ));
    notices
}

/// Notifications for a transition that just happened to `order`.
pub fn for_event(order: &Order, event: OrderEvent) -> Vec<NotificationCreate> {
    let table = order.table_number;
    match event {
        OrderEvent::PaymentValidated => vec![
            notice(
                order,
                NotificationKind::PaymentValidated,
                Role::Kitchen,
                format!("PAYMENT VALIDATED - Table {table} - start preparation"),
            )
            .priority(Priority::High)
            .with_sound(),
            notice(
                order,
                NotificationKind::PaymentValidated,
                Role::Customer,
                "Payment confirmed. Your order is being prepared.".to_string(),
            ),
        ],
        OrderEvent::ItemReady { index } => {
            let dish = order
                .items
                .get(index)
                .map(|item| item.name.as_str())
                .unwrap_or("Item");
            vec![notice(
                order,
                NotificationKind::ItemReady,
                Role::Waiter,
                format!("{dish} ready - Table {table}"),
            )]
        }
        OrderEvent::OrderReady { .. } => vec![
            notice(
                order,
                NotificationKind::OrderReady,
                Role::Waiter,
                format!("ORDER READY - Table {table} - ready to serve"),
            )
            .priority(Priority::Critical)
            .with_sound(),
            notice(
                order,
                NotificationKind::OrderReady,
                Role::Customer,
                "Your order is ready! Your waiter will bring it to your table.".to_string(),
            )
            .priority(Priority::High),
        ],
        OrderEvent::InTransit => vec![
            notice(
                order,
                NotificationKind::CourierEnRoute,
                Role::Customer,
                format!("Your waiter is on the way to Table {table}"),
            )
            .priority(Priority::High),
            notice(
                order,
                NotificationKind::CourierEnRoute,
                Role::Kitchen,
                format!("Order for Table {table} picked up by waiter"),
            ),
        ],
        OrderEvent::Delivered => vec![
            notice(
                order,
                NotificationKind::OrderDelivered,
                Role::Customer,
                "Order delivered! Enjoy your meal!".to_string(),
            ),
            notice(
                order,
                NotificationKind::OrderDelivered,
                Role::Admin,
                format!("Sale completed - Table {table}: {}", money(order.total)),
            ),
        ],
        OrderEvent::Cancelled { .. } => [Role::Kitchen, Role::Waiter]
            .into_iter()
            .map(|role| {
                notice(
                    order,
                    NotificationKind::OrderCancelled,
                    role,
                    format!("Order for Table {table} cancelled"),
                )
                .priority(Priority::High)
            })
            .collect(),
        OrderEvent::Confirmed
        | OrderEvent::PreparationStarted
        | OrderEvent::ItemStarted { .. }
        | OrderEvent::Billed => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        EmployeeId, KitchenStatus, MenuItemId, OrderId, OrderItem, OrderStatus, PaymentMethod,
        Recipient, TableId,
    };
    use chrono::Utc;

    fn placed(method: PaymentMethod, waiter: Option<EmployeeId>) -> Order {
        let now = Utc::now();
        Order {
            id: OrderId(3),
            table_id: TableId(2),
            table_number: 7,
            customer_id: "cust_9".into(),
            waiter_id: waiter,
            items: vec![OrderItem {
                menu_item_id: MenuItemId(1),
                name: "Aji de gallina".into(),
                quantity: 2,
                unit_price: Decimal::new(1000, 2),
                note: None,
                kitchen_status: KitchenStatus::Pending,
                started_at: None,
                finished_at: None,
            }],
            total: Decimal::new(2000, 2),
            status: OrderStatus::PaymentPending,
            payment_method: method,
            payment_validated: false,
            note: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_cash_order_asks_the_waiter_to_validate() {
        let notices = order_placed(&placed(PaymentMethod::Cash, Some(EmployeeId(1))));
        let kinds: Vec<_> = notices.iter().map(|n| (n.recipient, n.kind)).collect();
        assert_eq!(
            kinds,
            vec![
                (Recipient::Role(Role::Kitchen), NotificationKind::NewOrder),
                (Recipient::Role(Role::Waiter), NotificationKind::NewOrder),
                (Recipient::Role(Role::Waiter), NotificationKind::PaymentPending),
                (Recipient::Role(Role::Admin), NotificationKind::NewOrder),
            ]
        );
        assert_eq!(notices[1].message, "Order received Table 7 - Total: S/ 20.00");
        assert_eq!(notices[2].priority, Priority::Critical);
        assert!(notices.iter().all(|n| n.order_id == Some(OrderId(3))));
    }

    #[test]
    fn test_no_waiter_notice_without_a_waiter() {
        let notices = order_placed(&placed(PaymentMethod::Yape, None));
        assert_eq!(notices.len(), 2);
        assert!(notices
            .iter()
            .all(|n| n.recipient != Recipient::Role(Role::Waiter)));
    }

    #[test]
    fn test_item_ready_names_the_dish() {
        let notices = for_event(
            &placed(PaymentMethod::Card, None),
            OrderEvent::ItemReady { index: 0 },
        );
        assert_eq!(notices[0].message, "Aji de gallina ready - Table 7");
        assert!(for_event(&placed(PaymentMethod::Card, None), OrderEvent::Billed).is_empty());
    }
}
