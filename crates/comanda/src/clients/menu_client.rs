//! # Menu Client

use crate::menu_actor::{MenuAction, MenuError};
use crate::model::{MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
use async_trait::async_trait;
use comanda_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::instrument;

#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<MenuItem>,
}

impl MenuClient {
    pub fn new(inner: ResourceClient<MenuItem>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn add_item(&self, params: MenuItemCreate) -> Result<MenuItemId, MenuError> {
        self.inner.create(params).await.map_err(MenuError::from)
    }

    #[instrument(skip(self))]
    pub async fn update_item(
        &self,
        id: MenuItemId,
        update: MenuItemUpdate,
    ) -> Result<MenuItem, MenuError> {
        self.inner.update(id, update).await.map_err(MenuError::from)
    }

    /// Returns the dish's new availability.
    #[instrument(skip(self))]
    pub async fn toggle_availability(&self, id: MenuItemId) -> Result<bool, MenuError> {
        self.inner
            .perform_action(id, MenuAction::ToggleAvailability)
            .await
            .map_err(MenuError::from)
    }

    #[instrument(skip(self))]
    pub async fn available(&self) -> Result<Vec<MenuItem>, MenuError> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|dish| dish.available)
            .collect())
    }

    #[instrument(skip(self))]
    pub async fn by_category(&self, category: &str) -> Result<Vec<MenuItem>, MenuError> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|dish| dish.category == category)
            .collect())
    }
}

#[async_trait]
impl ActorClient<MenuItem> for MenuClient {
    type Error = MenuError;

    fn inner(&self) -> &ResourceClient<MenuItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        MenuError::from(e)
    }
}
