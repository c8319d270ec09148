//! # Delivery timers
//!
//! Once a waiter picks up an order it is in transit for a fixed delay, after which it
//! counts as delivered. Each timer runs on its own task with a [`CancellationToken`], so
//! cancelling or deleting the order, or shutting the system down, stops it before it
//! fires.

use crate::clients::{NotificationClient, OrderClient};
use crate::model::{OrderId, Role};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

type Pending = Arc<Mutex<HashMap<OrderId, (CancellationToken, JoinHandle<()>)>>>;

/// Owns one timer per order in transit.
#[derive(Clone)]
pub struct DeliveryScheduler {
    orders: OrderClient,
    notifications: NotificationClient,
    delay: Duration,
    pending: Pending,
}

impl DeliveryScheduler {
    pub fn new(orders: OrderClient, notifications: NotificationClient, delay: Duration) -> Self {
        Self {
            orders,
            notifications,
            delay,
            pending: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Starts the delivery timer for `order_id`, replacing any timer already running
    /// for it.
    pub async fn schedule(&self, order_id: OrderId) {
        let token = CancellationToken::new();
        // Held until the entry is inserted, so a timer that fires immediately still
        // finds (and removes) its own entry.
        let mut pending = self.pending.lock().await;

        let handle = tokio::spawn(Self::deliver_after(
            self.orders.clone(),
            self.notifications.clone(),
            self.delay,
            order_id.clone(),
            token.clone(),
            self.pending.clone(),
        ));

        if let Some((previous, _)) = pending.insert(order_id.clone(), (token, handle)) {
            previous.cancel();
            debug!(%order_id, "Replaced delivery timer");
        }
        info!(%order_id, delay_ms = self.delay.as_millis() as u64, "Delivery scheduled");
    }

    async fn deliver_after(
        orders: OrderClient,
        notifications: NotificationClient,
        delay: Duration,
        order_id: OrderId,
        token: CancellationToken,
        pending: Pending,
    ) {
        tokio::select! {
            _ = token.cancelled() => {
                debug!(%order_id, "Delivery timer cancelled");
                return;
            }
            _ = tokio::time::sleep(delay) => {}
        }

        // The entry stays in the map until the delivery has finished, so shutdown
        // waits for a delivery that is already under way.
        if token.is_cancelled() {
            return;
        }

        match orders.mark_delivered(order_id.clone()).await {
            Ok(_) => {
                info!(%order_id, "Order delivered");
                if let Err(e) = notifications
                    .mark_read_matching(Role::Waiter, order_id.clone(), None)
                    .await
                {
                    warn!(%order_id, error = %e, "Could not clear waiter notifications");
                }
            }
            Err(e) => warn!(%order_id, error = %e, "Delivery failed"),
        }

        // Cancel, reschedule and shutdown all cancel the token under this lock when
        // they take the entry out, so an uncancelled token means it is still ours.
        let mut pending = pending.lock().await;
        if !token.is_cancelled() {
            pending.remove(&order_id);
        }
    }

    /// Stops the timer for `order_id`. Returns whether one was pending. A timer that
    /// has already fired still finishes its delivery.
    pub async fn cancel(&self, order_id: &OrderId) -> bool {
        match self.pending.lock().await.remove(order_id) {
            Some((token, _)) => {
                token.cancel();
                info!(%order_id, "Delivery cancelled");
                true
            }
            None => false,
        }
    }

    pub async fn is_scheduled(&self, order_id: &OrderId) -> bool {
        self.pending.lock().await.contains_key(order_id)
    }

    /// Orders with a running timer.
    pub async fn pending(&self) -> Vec<OrderId> {
        let mut ids: Vec<OrderId> = self.pending.lock().await.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Cancels every timer and waits for the tasks to finish, including deliveries
    /// already in progress.
    pub async fn shutdown(&self) {
        let drained: Vec<_> = {
            let mut pending = self.pending.lock().await;
            pending
                .drain()
                .map(|(order_id, (token, handle))| {
                    token.cancel();
                    (order_id, handle)
                })
                .collect()
        };
        for (order_id, handle) in drained {
            if let Err(e) = handle.await {
                warn!(%order_id, error = %e, "Delivery task failed");
            }
        }
    }
}
