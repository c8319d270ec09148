//! # Order Client
//!
//! High-level API for the order lifecycle. Each method is one step of the state machine
//! in [`order_actor`](crate::order_actor); the returned [`OrderStatus`] is the status
//! after the step.

use crate::model::{
    EmployeeId, KitchenStatus, Order, OrderCreate, OrderId, OrderStatus, OrderUpdate,
};
use crate::order_actor::{OrderAction, OrderError};
use async_trait::async_trait;
use comanda_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Places an order; table, menu and staff checks happen in the order actor.
    #[instrument(skip(self, params), fields(table = %params.table_id, method = %params.payment_method))]
    pub async fn place_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!(?params, "place_order called");
        self.inner.create(params).await.map_err(OrderError::from)
    }

    /// Like `get`, but an unknown id is [`OrderError::NotFound`].
    #[instrument(skip(self))]
    pub async fn fetch(&self, id: OrderId) -> Result<Order, OrderError> {
        self.get(id.clone())
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn update_order(&self, id: OrderId, update: OrderUpdate) -> Result<Order, OrderError> {
        self.inner.update(id, update).await.map_err(OrderError::from)
    }

    #[instrument(skip(self))]
    pub async fn validate_payment(&self, id: OrderId) -> Result<OrderStatus, OrderError> {
        self.act(id, OrderAction::ValidatePayment).await
    }

    #[instrument(skip(self))]
    pub async fn confirm(&self, id: OrderId) -> Result<OrderStatus, OrderError> {
        self.act(id, OrderAction::Confirm).await
    }

    #[instrument(skip(self))]
    pub async fn start_item(&self, id: OrderId, index: usize) -> Result<OrderStatus, OrderError> {
        self.act(id, OrderAction::StartItem(index)).await
    }

    #[instrument(skip(self))]
    pub async fn complete_item(&self, id: OrderId, index: usize) -> Result<OrderStatus, OrderError> {
        self.act(id, OrderAction::CompleteItem(index)).await
    }

    #[instrument(skip(self))]
    pub async fn set_item_status(
        &self,
        id: OrderId,
        index: usize,
        status: KitchenStatus,
    ) -> Result<OrderStatus, OrderError> {
        self.act(id, OrderAction::SetItemStatus { index, status })
            .await
    }

    #[instrument(skip(self))]
    pub async fn set_status(&self, id: OrderId, status: OrderStatus) -> Result<OrderStatus, OrderError> {
        self.act(id, OrderAction::SetStatus(status)).await
    }

    #[instrument(skip(self))]
    pub async fn mark_in_transit(&self, id: OrderId) -> Result<OrderStatus, OrderError> {
        self.act(id, OrderAction::MarkInTransit).await
    }

    #[instrument(skip(self))]
    pub async fn mark_delivered(&self, id: OrderId) -> Result<OrderStatus, OrderError> {
        self.act(id, OrderAction::MarkDelivered).await
    }

    #[instrument(skip(self))]
    pub async fn close_bill(&self, id: OrderId) -> Result<OrderStatus, OrderError> {
        self.act(id, OrderAction::CloseBill).await
    }

    #[instrument(skip(self))]
    pub async fn cancel(&self, id: OrderId) -> Result<OrderStatus, OrderError> {
        self.act(id, OrderAction::Cancel).await
    }

    /// Active orders served by `waiter_id`.
    #[instrument(skip(self))]
    pub async fn active_for_waiter(&self, waiter_id: EmployeeId) -> Result<Vec<Order>, OrderError> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|o| o.status.is_active() && o.waiter_id.as_ref() == Some(&waiter_id))
            .collect())
    }

    /// What the kitchen should be looking at: paid orders not yet ready, oldest first.
    #[instrument(skip(self))]
    pub async fn kitchen_queue(&self) -> Result<Vec<Order>, OrderError> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|o| {
                o.payment_validated
                    && matches!(
                        o.status,
                        OrderStatus::PaymentValidated
                            | OrderStatus::Confirmed
                            | OrderStatus::Preparing
                    )
            })
            .collect())
    }

    /// A customer's orders, newest first.
    #[instrument(skip(self))]
    pub async fn for_customer(&self, customer_id: &str) -> Result<Vec<Order>, OrderError> {
        let mut orders: Vec<Order> = self
            .list()
            .await?
            .into_iter()
            .filter(|o| o.customer_id == customer_id)
            .collect();
        orders.reverse();
        Ok(orders)
    }

    async fn act(&self, id: OrderId, action: OrderAction) -> Result<OrderStatus, OrderError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(OrderError::from)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::from(e)
    }
}
