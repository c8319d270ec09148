//! [`ActorEntity`] implementation for [`Notification`].

use super::actions::NotificationAction;
use super::error::NotificationError;
use crate::model::{Notification, NotificationCreate, NotificationId};
use async_trait::async_trait;
use chrono::Utc;
use comanda_actor::ActorEntity;

#[async_trait]
impl ActorEntity for Notification {
    type Id = NotificationId;
    type Create = NotificationCreate;
    type Update = ();
    type Action = NotificationAction;
    type ActionResult = bool;
    type Context = ();
    type Error = NotificationError;

    fn from_create_params(
        id: NotificationId,
        params: NotificationCreate,
    ) -> Result<Self, NotificationError> {
        if params.message.trim().is_empty() {
            return Err(NotificationError::ValidationError(
                "notification message is empty".into(),
            ));
        }
        Ok(Self {
            id,
            kind: params.kind,
            message: params.message,
            order_id: params.order_id,
            table_id: params.table_id,
            recipient: params.recipient,
            priority: params.priority,
            sound: params.sound,
            created_at: Utc::now(),
            read: false,
        })
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), NotificationError> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: NotificationAction,
        _ctx: &(),
    ) -> Result<bool, NotificationError> {
        match action {
            NotificationAction::MarkRead => {
                let was_unread = !self.read;
                self.read = true;
                Ok(was_unread)
            }
        }
    }
}
