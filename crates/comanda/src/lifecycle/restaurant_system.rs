use crate::clients::{
    EmployeeClient, InventoryClient, MenuClient, NotificationClient, OrderClient, SaleClient,
    TableClient,
};
use crate::inventory_actor::InventoryError;
use crate::lifecycle::{DeliveryScheduler, SystemConfig};
use crate::menu_actor::MenuError;
use crate::model::{NotificationKind, OrderId, OrderStatus, Role};
use crate::order_actor::{OrderContext, OrderError};
use crate::reports::{self, DailyStats, LiveStatus};
use crate::sale_actor::SaleError;
use crate::table_actor::TableError;
use chrono::Utc;
use comanda_actor::ActorClient;
use thiserror::Error;
use tracing::{error, info, instrument, warn};

/// Errors from operations that span several actors.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error(transparent)]
    Table(#[from] TableError),
    #[error(transparent)]
    Menu(#[from] MenuError),
    #[error(transparent)]
    Inventory(#[from] InventoryError),
    #[error(transparent)]
    Sale(#[from] SaleError),
    #[error("Actor task failed: {0}")]
    ActorTaskFailed(String),
}

/// The running restaurant: every actor, wired together.
///
/// `RestaurantSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping all actors
/// - **Dependency Wiring**: the order actor gets the table, menu, employee, notification
///   and sale clients as its context
/// - **Cross-actor steps**: validating a payment also clears the waiter's reminder,
///   dispatching an order starts its delivery timer, cancelling stops it
///
/// # Example
///
/// ```ignore
/// let system = RestaurantSystem::new();
///
/// let order_id = system.orders.place_order(params).await?;
/// system.orders.start_item(order_id.clone(), 0).await?;
/// system.orders.complete_item(order_id.clone(), 0).await?;
/// system.dispatch_courier(order_id).await?;
///
/// system.shutdown().await?;
/// ```
pub struct RestaurantSystem {
    pub tables: TableClient,
    pub menu: MenuClient,
    pub inventory: InventoryClient,
    pub employees: EmployeeClient,
    pub notifications: NotificationClient,
    pub sales: SaleClient,
    pub orders: OrderClient,

    delivery: DeliveryScheduler,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl RestaurantSystem {
    /// Starts every actor with the default configuration. Must be called inside a
    /// Tokio runtime.
    pub fn new() -> Self {
        Self::with_config(SystemConfig::default())
    }

    pub fn with_config(config: SystemConfig) -> Self {
        let buffer = config.actor_buffer;

        // 1. Create actors
        let (table_actor, tables) = crate::table_actor::new(buffer);
        let (menu_actor, menu) = crate::menu_actor::new(buffer);
        let (inventory_actor, inventory) = crate::inventory_actor::new(buffer);
        let (employee_actor, employees) = crate::employee_actor::new(buffer);
        let (sale_actor, sales) = crate::sale_actor::new(buffer);
        let (notification_actor, notifications) =
            crate::notification_actor::new(buffer, config.notification_retention);
        let (order_actor, orders) = crate::order_actor::new(buffer);

        // 2. Start actors; only the order actor has dependencies
        let mut handles = vec![
            tokio::spawn(table_actor.run(())),
            tokio::spawn(menu_actor.run(())),
            tokio::spawn(inventory_actor.run(())),
            tokio::spawn(employee_actor.run(())),
            tokio::spawn(sale_actor.run(())),
            tokio::spawn(notification_actor.run(())),
        ];
        handles.push(tokio::spawn(order_actor.run(OrderContext {
            tables: tables.clone(),
            menu: menu.clone(),
            employees: employees.clone(),
            notifications: notifications.clone(),
            sales: sales.clone(),
        })));

        let delivery =
            DeliveryScheduler::new(orders.clone(), notifications.clone(), config.delivery_delay);

        info!(?config, "Restaurant system started");
        Self {
            tables,
            menu,
            inventory,
            employees,
            notifications,
            sales,
            orders,
            delivery,
            handles,
        }
    }

    pub fn delivery(&self) -> &DeliveryScheduler {
        &self.delivery
    }

    /// Waiter confirms a cash payment; their "validate payment" reminder is marked read.
    #[instrument(skip(self))]
    pub async fn validate_cash_payment(&self, id: OrderId) -> Result<OrderStatus, OrderError> {
        let status = self.orders.validate_payment(id.clone()).await?;
        self.clear_waiter_notices(id, Some(NotificationKind::PaymentPending))
            .await;
        Ok(status)
    }

    /// Confirms a prepaid order; the waiter's new-order notice is marked read.
    #[instrument(skip(self))]
    pub async fn confirm_order(&self, id: OrderId) -> Result<OrderStatus, OrderError> {
        let status = self.orders.confirm(id.clone()).await?;
        self.clear_waiter_notices(id, Some(NotificationKind::NewOrder))
            .await;
        Ok(status)
    }

    /// Waiter picks up a ready order; it is delivered after the configured delay.
    #[instrument(skip(self))]
    pub async fn dispatch_courier(&self, id: OrderId) -> Result<OrderStatus, OrderError> {
        let status = self.orders.mark_in_transit(id.clone()).await?;
        self.delivery.schedule(id).await;
        Ok(status)
    }

    /// Cancels the order, then stops its delivery timer. If cancelling fails the timer
    /// keeps running; a timer firing first just finds the order cancelled.
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, id: OrderId) -> Result<OrderStatus, OrderError> {
        let status = self.orders.cancel(id.clone()).await?;
        self.delivery.cancel(&id).await;
        Ok(status)
    }

    /// Removes the order, then stops its delivery timer.
    #[instrument(skip(self))]
    pub async fn delete_order(&self, id: OrderId) -> Result<(), OrderError> {
        self.orders.delete(id.clone()).await?;
        self.delivery.cancel(&id).await;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn daily_stats(&self) -> Result<DailyStats, SystemError> {
        let sales = self.sales.list().await?;
        let orders = self.orders.list().await?;
        let tables = self.tables.list().await?;
        let menu = self.menu.list().await?;
        let inventory = self.inventory.list().await?;
        Ok(reports::daily_stats(
            Utc::now(),
            &sales,
            &orders,
            &tables,
            &menu,
            &inventory,
        ))
    }

    #[instrument(skip(self))]
    pub async fn live_status(&self) -> Result<LiveStatus, SystemError> {
        let orders = self.orders.list().await?;
        let tables = self.tables.list().await?;
        Ok(reports::live_status(&orders, &tables))
    }

    async fn clear_waiter_notices(&self, id: OrderId, kind: Option<NotificationKind>) {
        if let Err(e) = self
            .notifications
            .mark_read_matching(Role::Waiter, id.clone(), kind)
            .await
        {
            warn!(order_id = %id, error = %e, "Could not clear waiter notifications");
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Pending deliveries are cancelled, then every client is dropped so the actors'
    /// channels close. Clients cloned out of the system keep their actor alive, so drop
    /// them before calling this.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down restaurant...");

        // =====================================================================
        // Step 1: Stop background timers (they hold order clients)
        // =====================================================================
        self.delivery.shutdown().await;

        // =====================================================================
        // Step 2: Close all channels by dropping clients
        // =====================================================================
        drop(self.delivery);
        drop(self.orders);
        drop(self.tables);
        drop(self.menu);
        drop(self.inventory);
        drop(self.employees);
        drop(self.notifications);
        drop(self.sales);

        // =====================================================================
        // Step 3: Wait for all actor tasks to complete
        // =====================================================================
        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(SystemError::ActorTaskFailed(e.to_string()));
            }
        }

        info!("Restaurant shutdown complete.");
        Ok(())
    }
}
