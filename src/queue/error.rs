//! Queue Error Types

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
    #[error("Message index {index} out of range ({available} messages pass the retrieval filter)")]
    OutOfRange { index: u64, available: u64 },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

/// Result type for queue operations
pub type QueueResult<T> = Result<T, QueueError>;

impl crate::core::error_handling::ContextualError for QueueError {
    fn is_user_actionable(&self) -> bool {
        matches!(self, QueueError::InvalidArgument { .. })
    }

    fn user_message(&self) -> Option<&str> {
        match self {
            QueueError::InvalidArgument { message } => Some(message),
            QueueError::OutOfRange { .. } => None,
        }
    }
}
