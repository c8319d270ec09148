//! Custom actions for the Table actor.

use crate::model::{EmployeeId, OrderId};

#[derive(Debug, Clone)]
pub enum TableAction {
    /// Put a waiter in charge of the table.
    Assign(EmployeeId),
    /// An order was placed at the table.
    Seat {
        order_id: OrderId,
        customer_id: String,
        waiter_id: Option<EmployeeId>,
    },
    /// Free the table if `OrderId` is still its active order.
    Vacate(OrderId),
    /// Free the table unconditionally.
    Release,
    MarkForCleaning,
    FinishCleaning,
    ToggleReserved,
}
