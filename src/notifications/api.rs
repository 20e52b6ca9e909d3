//! Public API for the notification system
//!
//! This module provides the complete public API for break notifications.
//! External modules should import from here rather than directly from internal modules.
//!
//! # Examples
//! ```
//! # use infoqueue::notifications::api::{BreakEvent, BreakFilter};
//! # use infoqueue::queue::api::{InfoQueue, MessageSeverity};
//! # use std::sync::Arc;
//! let queue = InfoQueue::new();
//! queue.set_break_on_severity(MessageSeverity::Error, true);
//!
//! queue
//!     .break_notifier()
//!     .register_handler(Arc::new(|event: &BreakEvent| eprintln!("{event}")));
//! let mut receiver = queue.break_notifier().subscribe(
//!     "ui".to_string(),
//!     BreakFilter::All,
//!     "example".to_string(),
//! );
//!
//! queue.add_application_message(MessageSeverity::Error, "boom".to_string());
//! assert!(receiver.try_recv().is_ok());
//! ```

// Core event types and enums
pub use crate::notifications::event::{BreakEvent, BreakFilter, BreakReason};

// Manager and utilities
pub use crate::notifications::error::NotificationError;
pub use crate::notifications::manager::BreakNotifier;

// Traits and statistics
pub use crate::notifications::traits::{BreakHandler, SubscriberStatistics};
