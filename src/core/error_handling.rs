//! Generic error handling utilities
//!
//! Every module error (`QueueError`, `NotificationError`, `ConfigError`)
//! implements [`ContextualError`] so the binary can report any of them
//! through [`log_error_with_context`].

/// Trait for errors that can distinguish between user-actionable and system errors
///
/// When `is_user_actionable()` returns `true`, `user_message()` should return
/// `Some(message)`; otherwise it should return `None`.
pub trait ContextualError: std::error::Error {
    /// True for errors the user can fix directly, such as a bad config
    /// value or a malformed input line
    fn is_user_actionable(&self) -> bool;

    fn user_message(&self) -> Option<&str>;
}

/// Log a fatal error with the detail level suited to its kind
///
/// User-actionable errors log their own message; system errors log the
/// operation context. Full details always go to debug level.
///
/// # Examples
/// ```rust,no_run
/// use infoqueue::core::error_handling::log_error_with_context;
/// use infoqueue::queue::api::{InfoQueue, MessageId};
///
/// let queue = InfoQueue::new();
/// if let Err(e) = queue.set_break_on_id(MessageId::UNKNOWN, true) {
///     // Logs: "FATAL: message id 0 is reserved for application messages and cannot break"
///     log_error_with_context(&e, "Configuring break flags");
/// }
/// ```
pub fn log_error_with_context<E: ContextualError + std::fmt::Display + std::fmt::Debug>(
    error: &E,
    operation_context: &str,
) {
    match error.user_message() {
        Some(user_msg) if error.is_user_actionable() => log::error!("FATAL: {}", user_msg),
        _ => log::error!("FATAL: {}", operation_context),
    }
    log::debug!("DETAIL: {}", error);
    log::debug!("DEBUG_DETAILS: {:?}", error);
}
