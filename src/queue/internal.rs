//! Internal queue state with storage policy and counters
//!
//! This module holds everything the queue protects with its single lock:
//! - FIFO message storage bounded by the message count limit
//! - Storage and retrieval filter stacks
//! - Break flags
//! - Allowed / denied / discarded counters
//!
//! Nothing here locks or performs side effects; `InfoQueue` wraps it.

use crate::notifications::event::BreakReason;
use crate::queue::break_flags::BreakFlags;
use crate::queue::error::{QueueError, QueueResult};
use crate::queue::filter::{FilterStack, FilterStage};
use crate::queue::message::Message;
use crate::queue::types::{QueueStats, DEFAULT_MESSAGE_COUNT_LIMIT};
use std::collections::VecDeque;
use std::sync::Arc;

/// Result of offering a message to the storage policy
#[derive(Debug)]
pub(crate) enum Ingested {
    /// Rejected by the storage filter
    Denied,
    /// Passed the storage filter; `reasons` lists matching break flags
    Allowed {
        message: Arc<Message>,
        reasons: Vec<BreakReason>,
    },
}

#[derive(Debug)]
pub(crate) struct QueueState {
    messages: VecDeque<Arc<Message>>,
    storage_filters: FilterStack,
    retrieval_filters: FilterStack,
    break_flags: BreakFlags,
    message_count_limit: u64,
    mute_debug_output: bool,
    allowed: u64,
    denied: u64,
    discarded: u64,
}

impl Default for QueueState {
    fn default() -> Self {
        Self::new()
    }
}

impl QueueState {
    pub fn new() -> Self {
        Self {
            messages: VecDeque::new(),
            storage_filters: FilterStack::new(),
            retrieval_filters: FilterStack::new(),
            break_flags: BreakFlags::new(),
            message_count_limit: DEFAULT_MESSAGE_COUNT_LIMIT,
            mute_debug_output: false,
            allowed: 0,
            denied: 0,
            discarded: 0,
        }
    }

    pub fn ingest(&mut self, message: Message) -> Ingested {
        if !self.storage_filters.allows(&message) {
            self.denied += 1;
            return Ingested::Denied;
        }

        self.allowed += 1;
        let message = Arc::new(message);
        self.messages.push_back(Arc::clone(&message));
        self.enforce_limit();

        let reasons = self.break_flags.matches(&message);
        Ingested::Allowed { message, reasons }
    }

    /// Evict oldest messages until the limit holds; returns how many went
    fn enforce_limit(&mut self) -> u64 {
        let mut evicted = 0;
        while self.messages.len() as u64 > self.message_count_limit {
            self.messages.pop_front();
            evicted += 1;
        }
        self.discarded += evicted;
        evicted
    }

    pub fn clear(&mut self) -> usize {
        let cleared = self.messages.len();
        self.messages.clear();
        cleared
    }

    pub fn message_count_limit(&self) -> u64 {
        self.message_count_limit
    }

    pub fn set_message_count_limit(&mut self, limit: u64) -> u64 {
        self.message_count_limit = limit;
        self.enforce_limit()
    }

    pub fn mute_debug_output(&self) -> bool {
        self.mute_debug_output
    }

    pub fn set_mute_debug_output(&mut self, mute: bool) {
        self.mute_debug_output = mute;
    }

    pub fn break_flags(&self) -> &BreakFlags {
        &self.break_flags
    }

    pub fn break_flags_mut(&mut self) -> &mut BreakFlags {
        &mut self.break_flags
    }

    pub fn filters(&self, stage: FilterStage) -> &FilterStack {
        match stage {
            FilterStage::Storage => &self.storage_filters,
            FilterStage::Retrieval => &self.retrieval_filters,
        }
    }

    pub fn filters_mut(&mut self, stage: FilterStage) -> &mut FilterStack {
        match stage {
            FilterStage::Storage => &mut self.storage_filters,
            FilterStage::Retrieval => &mut self.retrieval_filters,
        }
    }

    /// Stored messages passing the retrieval filter, oldest first
    fn retrievable(&self) -> impl Iterator<Item = &Arc<Message>> + '_ {
        let filters = &self.retrieval_filters;
        self.messages
            .iter()
            .filter(move |message| filters.allows(message))
    }

    pub fn retrievable_count(&self) -> u64 {
        self.retrievable().count() as u64
    }

    pub fn retrievable_messages(&self) -> Vec<Arc<Message>> {
        self.retrievable().cloned().collect()
    }

    pub fn get(&self, index: u64) -> QueueResult<Arc<Message>> {
        let found = usize::try_from(index)
            .ok()
            .and_then(|position| self.retrievable().nth(position));

        match found {
            Some(message) => Ok(Arc::clone(message)),
            None => Err(QueueError::OutOfRange {
                index,
                available: self.retrievable_count(),
            }),
        }
    }

    pub fn allowed(&self) -> u64 {
        self.allowed
    }

    pub fn denied(&self) -> u64 {
        self.denied
    }

    pub fn discarded(&self) -> u64 {
        self.discarded
    }

    pub fn stored(&self) -> u64 {
        self.messages.len() as u64
    }

    pub fn stats(&self) -> QueueStats {
        QueueStats {
            allowed_by_storage_filter: self.allowed,
            denied_by_storage_filter: self.denied,
            discarded_by_message_count_limit: self.discarded,
            stored: self.stored(),
            stored_allowed_by_retrieval_filter: self.retrievable_count(),
            message_count_limit: self.message_count_limit,
        }
    }
}
