//! Error types for the notification system

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NotificationError {
    /// Subscribers whose receiving end was dropped; they have been removed
    #[error(
        "Failed to publish break event to {} subscribers: {failed_subscribers:?}",
        failed_subscribers.len()
    )]
    PublishFailed { failed_subscribers: Vec<String> },
}

impl crate::core::error_handling::ContextualError for NotificationError {
    fn is_user_actionable(&self) -> bool {
        false // All notification errors are system-level
    }

    fn user_message(&self) -> Option<&str> {
        None
    }
}
