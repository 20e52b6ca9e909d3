//! Type definitions for the queue system
//!
//! Limits, counter snapshots and other plain data shared between the queue
//! and its consumers.

use serde::Serialize;

/// Message count limit a new queue starts with
pub const DEFAULT_MESSAGE_COUNT_LIMIT: u64 = 1024;

/// Limit value that disables count-based eviction
pub const UNLIMITED: u64 = u64::MAX;

/// Point-in-time view of the queue counters, taken under a single lock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QueueStats {
    pub allowed_by_storage_filter: u64,
    pub denied_by_storage_filter: u64,
    pub discarded_by_message_count_limit: u64,
    pub stored: u64,
    pub stored_allowed_by_retrieval_filter: u64,
    /// Current limit; `UNLIMITED` when eviction is disabled
    pub message_count_limit: u64,
}

impl QueueStats {
    /// Every ingestion either passed or failed the storage filter
    pub fn total_ingested(&self) -> u64 {
        self.allowed_by_storage_filter + self.denied_by_storage_filter
    }
}
