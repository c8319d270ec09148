//! Custom actions for the Notification actor.

#[derive(Debug, Clone)]
pub enum NotificationAction {
    /// Returns whether the entry was unread before.
    MarkRead,
}
