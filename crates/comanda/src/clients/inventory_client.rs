//! # Inventory Client

use crate::inventory_actor::{InventoryAction, InventoryError};
use crate::model::{InventoryCreate, InventoryItem, InventoryItemId, InventoryUpdate};
use async_trait::async_trait;
use comanda_actor::{ActorClient, FrameworkError, ResourceClient};
use rust_decimal::Decimal;
use tracing::instrument;

#[derive(Clone)]
pub struct InventoryClient {
    inner: ResourceClient<InventoryItem>,
}

impl InventoryClient {
    pub fn new(inner: ResourceClient<InventoryItem>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn add_item(&self, params: InventoryCreate) -> Result<InventoryItemId, InventoryError> {
        self.inner.create(params).await.map_err(InventoryError::from)
    }

    #[instrument(skip(self))]
    pub async fn update_item(
        &self,
        id: InventoryItemId,
        update: InventoryUpdate,
    ) -> Result<InventoryItem, InventoryError> {
        self.inner
            .update(id, update)
            .await
            .map_err(InventoryError::from)
    }

    /// Adds `delta` (negative to consume) and returns the new stock level.
    #[instrument(skip(self))]
    pub async fn adjust_stock(
        &self,
        id: InventoryItemId,
        delta: Decimal,
    ) -> Result<Decimal, InventoryError> {
        self.inner
            .perform_action(id, InventoryAction::AdjustStock(delta))
            .await
            .map_err(InventoryError::from)
    }

    /// Items at or below their restock threshold.
    #[instrument(skip(self))]
    pub async fn low_stock(&self) -> Result<Vec<InventoryItem>, InventoryError> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(InventoryItem::is_low_stock)
            .collect())
    }

    #[instrument(skip(self))]
    pub async fn out_of_stock(&self) -> Result<Vec<InventoryItem>, InventoryError> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(InventoryItem::is_out_of_stock)
            .collect())
    }
}

#[async_trait]
impl ActorClient<InventoryItem> for InventoryClient {
    type Error = InventoryError;

    fn inner(&self) -> &ResourceClient<InventoryItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        InventoryError::from(e)
    }
}
