//! Custom actions for the Order actor.
//!
//! Each action is one lifecycle step; see [`Order::apply`](crate::model::Order::apply)
//! for the rules.

use crate::model::{KitchenStatus, OrderStatus};

#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Waiter confirms a cash payment.
    ValidatePayment,
    Confirm,
    /// Kitchen starts the item at this index.
    StartItem(usize),
    /// Kitchen finishes the item at this index.
    CompleteItem(usize),
    SetItemStatus {
        index: usize,
        status: KitchenStatus,
    },
    /// Move the order to an explicit status; routed through the same rules as the
    /// dedicated actions.
    SetStatus(OrderStatus),
    MarkInTransit,
    MarkDelivered,
    CloseBill,
    Cancel,
}
