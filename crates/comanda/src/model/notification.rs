//! Entries in the role-addressed notification log.

use crate::model::{OrderId, Recipient, TableId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

resource_id!(
    /// Type-safe identifier for notifications.
    NotificationId,
    "notif"
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    NewOrder,
    PaymentPending,
    PaymentValidated,
    ItemReady,
    OrderReady,
    CourierEnRoute,
    OrderDelivered,
    OrderCancelled,
}

/// Presentation hint only; it never changes delivery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Normal,
    High,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub message: String,
    pub order_id: Option<OrderId>,
    pub table_id: Option<TableId>,
    pub recipient: Recipient,
    pub priority: Priority,
    /// UI should play a sound.
    pub sound: bool,
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

/// Payload for publishing a notification.
///
/// ```rust
/// use comanda::model::{NotificationCreate, NotificationKind, OrderId, Priority, Role, TableId};
///
/// let notice = NotificationCreate::new(NotificationKind::OrderReady, Role::Waiter, "ORDER READY - Table 4")
///     .about(OrderId(7), TableId(4))
///     .priority(Priority::Critical)
///     .with_sound();
/// assert!(notice.sound);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationCreate {
    pub kind: NotificationKind,
    pub message: String,
    pub order_id: Option<OrderId>,
    pub table_id: Option<TableId>,
    pub recipient: Recipient,
    pub priority: Priority,
    pub sound: bool,
}

impl NotificationCreate {
    pub fn new(
        kind: NotificationKind,
        recipient: impl Into<Recipient>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            order_id: None,
            table_id: None,
            recipient: recipient.into(),
            priority: Priority::Normal,
            sound: false,
        }
    }

    pub fn about(mut self, order_id: OrderId, table_id: TableId) -> Self {
        self.order_id = Some(order_id);
        self.table_id = Some(table_id);
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_sound(mut self) -> Self {
        self.sound = true;
        self
    }
}
