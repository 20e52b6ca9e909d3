//! Public API for the queue system
//!
//! This module provides the complete public API for the information queue.
//! External modules should import from here rather than directly from internal modules.
//! See module documentation for the ingestion and retrieval flow.

// Core queue component
pub use crate::queue::manager::InfoQueue;

// Message types and keys
pub use crate::queue::message::{Message, MessageCategory, MessageId, MessageSeverity};

// Filters
pub use crate::queue::filter::{FilterDesc, FilterStack, FilterStage, InfoQueueFilter};

// Break flags
pub use crate::queue::break_flags::BreakFlags;

// Debug output side channel
pub use crate::queue::output::{DebugOutput, LogDebugOutput, DEBUG_OUTPUT_TARGET};

// Configuration
pub use crate::queue::config::{BreakOnConfig, QueueConfig};

// Error handling
pub use crate::queue::error::{QueueError, QueueResult};

// Type definitions and statistics
pub use crate::queue::types::{QueueStats, DEFAULT_MESSAGE_COUNT_LIMIT, UNLIMITED};
