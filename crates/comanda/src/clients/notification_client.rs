//! # Notification Client
//!
//! Publishing and role-filtered reading of the notification log.

use crate::model::{
    Notification, NotificationCreate, NotificationId, NotificationKind, OrderId, Role,
};
use crate::notification_actor::{NotificationAction, NotificationError};
use async_trait::async_trait;
use comanda_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument, warn};

#[derive(Clone)]
pub struct NotificationClient {
    inner: ResourceClient<Notification>,
}

impl NotificationClient {
    pub fn new(inner: ResourceClient<Notification>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn notify(&self, params: NotificationCreate) -> Result<NotificationId, NotificationError> {
        self.inner
            .create(params)
            .await
            .map_err(NotificationError::from)
    }

    /// Publishes each notice in order, logging failures instead of returning them.
    pub async fn publish(&self, notices: Vec<NotificationCreate>) {
        for notice in notices {
            let kind = notice.kind;
            match self.notify(notice).await {
                Ok(id) => debug!(%id, ?kind, "Notification published"),
                Err(e) => warn!(?kind, error = %e, "Notification dropped"),
            }
        }
    }

    /// Entries addressed to `role` or to everyone, newest first.
    #[instrument(skip(self))]
    pub async fn for_role(&self, role: Role) -> Result<Vec<Notification>, NotificationError> {
        let mut visible: Vec<Notification> = self
            .list()
            .await?
            .into_iter()
            .filter(|n| n.recipient.includes(role))
            .collect();
        visible.reverse();
        Ok(visible)
    }

    #[instrument(skip(self))]
    pub async fn unread_for_role(&self, role: Role) -> Result<Vec<Notification>, NotificationError> {
        let mut visible = self.for_role(role).await?;
        visible.retain(|n| !n.read);
        Ok(visible)
    }

    /// Marks one entry read. Marking an already read entry is a no-op returning `false`.
    #[instrument(skip(self))]
    pub async fn mark_read(&self, id: NotificationId) -> Result<bool, NotificationError> {
        self.inner
            .perform_action(id, NotificationAction::MarkRead)
            .await
            .map_err(NotificationError::from)
    }

    /// Marks read every unread entry visible to `role` about `order_id` (optionally only
    /// of `kind`). Returns how many changed.
    #[instrument(skip(self))]
    pub async fn mark_read_matching(
        &self,
        role: Role,
        order_id: OrderId,
        kind: Option<NotificationKind>,
    ) -> Result<usize, NotificationError> {
        let mut marked = 0;
        for n in self.unread_for_role(role).await? {
            let same_order = n.order_id.as_ref() == Some(&order_id);
            let same_kind = kind.map_or(true, |k| k == n.kind);
            if !(same_order && same_kind) {
                continue;
            }
            match self.mark_read(n.id).await {
                Ok(true) => marked += 1,
                Ok(false) => {}
                // Evicted by retention since we listed it.
                Err(NotificationError::NotFound(_)) => {}
                Err(e) => return Err(e),
            }
        }
        Ok(marked)
    }

    /// Drops the whole log; there is no per-entry removal for users.
    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<usize, NotificationError> {
        self.inner.clear().await.map_err(NotificationError::from)
    }
}

#[async_trait]
impl ActorClient<Notification> for NotificationClient {
    type Error = NotificationError;

    fn inner(&self) -> &ResourceClient<Notification> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        NotificationError::from(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NotificationKind, Priority, Recipient, TableId};
    use chrono::Utc;
    use comanda_actor::mock::MockClient;

    fn entry(id: u32, recipient: Recipient, order: u32, read: bool) -> Notification {
        Notification {
            id: NotificationId(id),
            kind: NotificationKind::NewOrder,
            message: format!("notice {id}"),
            order_id: Some(OrderId(order)),
            table_id: Some(TableId(1)),
            recipient,
            priority: Priority::Normal,
            sound: false,
            created_at: Utc::now(),
            read,
        }
    }

    #[tokio::test]
    async fn test_for_role_filters_and_reverses() {
        let mut mock = MockClient::<Notification>::new();
        mock.expect_list().return_ok(vec![
            entry(1, Recipient::Role(Role::Kitchen), 1, false),
            entry(2, Recipient::Role(Role::Waiter), 1, false),
            entry(3, Recipient::All, 2, false),
            entry(4, Recipient::Role(Role::Kitchen), 2, false),
        ]);

        let client = NotificationClient::new(mock.client());
        let ids: Vec<u32> = client
            .for_role(Role::Kitchen)
            .await
            .unwrap()
            .iter()
            .map(|n| n.id.0)
            .collect();
        assert_eq!(ids, vec![4, 3, 1]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_mark_read_matching_only_touches_that_order() {
        let mut mock = MockClient::<Notification>::new();
        mock.expect_list().return_ok(vec![
            entry(1, Recipient::Role(Role::Waiter), 1, false),
            entry(2, Recipient::Role(Role::Waiter), 2, false),
            entry(3, Recipient::Role(Role::Waiter), 1, true),
        ]);
        mock.expect_action(NotificationId(1)).return_ok(true);

        let client = NotificationClient::new(mock.client());
        let marked = client
            .mark_read_matching(Role::Waiter, OrderId(1), None)
            .await
            .unwrap();
        assert_eq!(marked, 1);
        mock.verify();
    }

    #[tokio::test]
    async fn test_mark_read_unknown_id_is_not_found() {
        let mut mock = MockClient::<Notification>::new();
        mock.expect_action(NotificationId(9))
            .return_err(FrameworkError::NotFound("notif_9".into()));

        let client = NotificationClient::new(mock.client());
        assert_eq!(
            client.mark_read(NotificationId(9)).await,
            Err(NotificationError::NotFound("notif_9".into()))
        );
    }
}
