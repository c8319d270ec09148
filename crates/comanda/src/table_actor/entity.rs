//! [`ActorEntity`] implementation for [`Table`].

use super::actions::TableAction;
use super::error::TableError;
use crate::model::{Table, TableCreate, TableId, TableStatus, TableUpdate};
use async_trait::async_trait;
use comanda_actor::ActorEntity;

#[async_trait]
impl ActorEntity for Table {
    type Id = TableId;
    type Create = TableCreate;
    type Update = TableUpdate;
    type Action = TableAction;
    /// Whether the table changed.
    type ActionResult = bool;
    type Context = ();
    type Error = TableError;

    fn from_create_params(id: TableId, params: TableCreate) -> Result<Self, TableError> {
        if params.capacity == 0 {
            return Err(TableError::ValidationError(format!(
                "table {} needs room for at least one guest",
                params.number
            )));
        }
        Ok(Table::new(id, params.number, params.capacity, params.qr_code))
    }

    async fn on_update(&mut self, update: TableUpdate, _ctx: &()) -> Result<(), TableError> {
        if let Some(capacity) = update.capacity {
            if capacity == 0 {
                return Err(TableError::ValidationError(format!(
                    "table {} needs room for at least one guest",
                    self.number
                )));
            }
            self.capacity = capacity;
        }
        if let Some(status) = update.status {
            self.status = status;
            if status == TableStatus::Free {
                self.clear_party();
            }
        }
        if let Some(qr_code) = update.qr_code {
            self.qr_code = Some(qr_code);
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: TableAction, _ctx: &()) -> Result<bool, TableError> {
        match action {
            TableAction::Assign(waiter_id) => {
                if self.status == TableStatus::Cleaning {
                    return Err(self.invalid("assign a waiter to"));
                }
                self.waiter_id = Some(waiter_id);
                Ok(true)
            }
            TableAction::Seat {
                order_id,
                customer_id,
                waiter_id,
            } => {
                if self.status == TableStatus::Cleaning {
                    return Err(TableError::Unavailable {
                        number: self.number,
                        status: self.status,
                    });
                }
                self.status = TableStatus::Occupied;
                self.active_order = Some(order_id);
                self.customer_id = Some(customer_id);
                if waiter_id.is_some() {
                    self.waiter_id = waiter_id;
                }
                Ok(true)
            }
            TableAction::Vacate(order_id) => {
                if self.active_order.as_ref() != Some(&order_id) {
                    return Ok(false);
                }
                self.status = TableStatus::Free;
                self.clear_party();
                Ok(true)
            }
            TableAction::Release => {
                self.status = TableStatus::Free;
                self.clear_party();
                Ok(true)
            }
            TableAction::MarkForCleaning => {
                self.status = TableStatus::Cleaning;
                self.clear_party();
                Ok(true)
            }
            TableAction::FinishCleaning => {
                if self.status != TableStatus::Cleaning {
                    return Err(self.invalid("finish cleaning"));
                }
                self.status = TableStatus::Free;
                Ok(true)
            }
            TableAction::ToggleReserved => {
                self.status = match self.status {
                    TableStatus::Free => TableStatus::Reserved,
                    TableStatus::Reserved => TableStatus::Free,
                    _ => return Err(self.invalid("reserve")),
                };
                Ok(true)
            }
        }
    }
}

impl Table {
    fn clear_party(&mut self) {
        self.customer_id = None;
        self.waiter_id = None;
        self.active_order = None;
    }

    fn invalid(&self, action: &'static str) -> TableError {
        TableError::InvalidStatus {
            number: self.number,
            status: self.status,
            action,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EmployeeId, OrderId};

    fn table() -> Table {
        Table::new(TableId(1), 4, 2, None)
    }

    fn seat(order: u32) -> TableAction {
        TableAction::Seat {
            order_id: OrderId(order),
            customer_id: "cust_1".into(),
            waiter_id: Some(EmployeeId(2)),
        }
    }

    #[tokio::test]
    async fn test_seat_then_vacate_only_for_the_active_order() {
        let mut table = table();
        assert!(table.handle_action(seat(1), &()).await.unwrap());
        assert_eq!(table.status, TableStatus::Occupied);
        assert_eq!(table.waiter_id, Some(EmployeeId(2)));

        // A newer order took over the table.
        table.handle_action(seat(2), &()).await.unwrap();
        assert!(!table
            .handle_action(TableAction::Vacate(OrderId(1)), &())
            .await
            .unwrap());
        assert!(table.is_occupied());

        assert!(table
            .handle_action(TableAction::Vacate(OrderId(2)), &())
            .await
            .unwrap());
        assert_eq!(table.status, TableStatus::Free);
        assert_eq!(table.active_order, None);
        assert_eq!(table.waiter_id, None);
    }

    #[tokio::test]
    async fn test_cleaning_table_cannot_be_seated() {
        let mut table = table();
        table
            .handle_action(TableAction::MarkForCleaning, &())
            .await
            .unwrap();
        let err = table.handle_action(seat(1), &()).await.unwrap_err();
        assert_eq!(
            err,
            TableError::Unavailable {
                number: 4,
                status: TableStatus::Cleaning
            }
        );

        table
            .handle_action(TableAction::FinishCleaning, &())
            .await
            .unwrap();
        assert_eq!(table.status, TableStatus::Free);
    }

    #[tokio::test]
    async fn test_toggle_reserved() {
        let mut table = table();
        table
            .handle_action(TableAction::ToggleReserved, &())
            .await
            .unwrap();
        assert_eq!(table.status, TableStatus::Reserved);
        table
            .handle_action(TableAction::ToggleReserved, &())
            .await
            .unwrap();
        assert_eq!(table.status, TableStatus::Free);

        table.handle_action(seat(3), &()).await.unwrap();
        assert!(matches!(
            table.handle_action(TableAction::ToggleReserved, &()).await,
            Err(TableError::InvalidStatus { action: "reserve", .. })
        ));
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        let params = TableCreate {
            number: 9,
            capacity: 0,
            qr_code: None,
        };
        assert!(matches!(
            Table::from_create_params(TableId(1), params),
            Err(TableError::ValidationError(_))
        ));
    }
}
