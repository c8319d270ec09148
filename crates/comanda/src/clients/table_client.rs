//! # Table Client

use crate::model::{EmployeeId, OrderId, Table, TableCreate, TableId, TableStatus, TableUpdate};
use crate::table_actor::{TableAction, TableError};
use async_trait::async_trait;
use comanda_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::instrument;

#[derive(Clone)]
pub struct TableClient {
    inner: ResourceClient<Table>,
}

impl TableClient {
    pub fn new(inner: ResourceClient<Table>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn add_table(&self, params: TableCreate) -> Result<TableId, TableError> {
        self.inner.create(params).await.map_err(TableError::from)
    }

    #[instrument(skip(self))]
    pub async fn update_table(&self, id: TableId, update: TableUpdate) -> Result<Table, TableError> {
        self.inner.update(id, update).await.map_err(TableError::from)
    }

    /// The table whose printed code matches `qr_code`.
    #[instrument(skip(self))]
    pub async fn find_by_qr(&self, qr_code: &str) -> Result<Option<Table>, TableError> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .find(|table| table.qr_code.as_deref() == Some(qr_code)))
    }

    #[instrument(skip(self))]
    pub async fn with_status(&self, status: TableStatus) -> Result<Vec<Table>, TableError> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|table| table.status == status)
            .collect())
    }

    #[instrument(skip(self))]
    pub async fn assign_waiter(&self, id: TableId, waiter_id: EmployeeId) -> Result<(), TableError> {
        self.act(id, TableAction::Assign(waiter_id)).await.map(|_| ())
    }

    #[instrument(skip(self))]
    pub async fn seat(
        &self,
        id: TableId,
        order_id: OrderId,
        customer_id: String,
        waiter_id: Option<EmployeeId>,
    ) -> Result<(), TableError> {
        self.act(
            id,
            TableAction::Seat {
                order_id,
                customer_id,
                waiter_id,
            },
        )
        .await
        .map(|_| ())
    }

    /// Frees the table if `order_id` is still its active order; returns whether it did.
    #[instrument(skip(self))]
    pub async fn vacate(&self, id: TableId, order_id: OrderId) -> Result<bool, TableError> {
        self.act(id, TableAction::Vacate(order_id)).await
    }

    #[instrument(skip(self))]
    pub async fn release(&self, id: TableId) -> Result<(), TableError> {
        self.act(id, TableAction::Release).await.map(|_| ())
    }

    #[instrument(skip(self))]
    pub async fn mark_for_cleaning(&self, id: TableId) -> Result<(), TableError> {
        self.act(id, TableAction::MarkForCleaning).await.map(|_| ())
    }

    #[instrument(skip(self))]
    pub async fn finish_cleaning(&self, id: TableId) -> Result<(), TableError> {
        self.act(id, TableAction::FinishCleaning).await.map(|_| ())
    }

    #[instrument(skip(self))]
    pub async fn toggle_reserved(&self, id: TableId) -> Result<(), TableError> {
        self.act(id, TableAction::ToggleReserved).await.map(|_| ())
    }

    async fn act(&self, id: TableId, action: TableAction) -> Result<bool, TableError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(TableError::from)
    }
}

#[async_trait]
impl ActorClient<Table> for TableClient {
    type Error = TableError;

    fn inner(&self) -> &ResourceClient<Table> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        TableError::from(e)
    }
}
