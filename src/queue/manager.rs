//! InfoQueue - the locked, shareable information queue
//!
//! `InfoQueue` wraps the queue state in a single mutex so a validation
//! thread can ingest while a diagnostics consumer reads. Each public
//! operation takes the lock once. Debug output and break notifications are
//! emitted after the lock is released, so handlers may call back into the
//! queue.

use crate::notifications::event::BreakEvent;
use crate::notifications::manager::BreakNotifier;
use crate::queue::config::QueueConfig;
use crate::queue::error::{QueueError, QueueResult};
use crate::queue::filter::{FilterStage, InfoQueueFilter};
use crate::queue::internal::{Ingested, QueueState};
use crate::queue::message::{Message, MessageCategory, MessageId, MessageSeverity};
use crate::queue::output::{DebugOutput, LogDebugOutput};
use crate::queue::types::QueueStats;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

/// Bounded, filterable store of debug messages
///
/// # Thread Safety
///
/// `InfoQueue` is `Send + Sync` and is normally shared as `Arc<InfoQueue>`.
/// All state (messages, filter stacks, break flags, counters) forms one
/// critical section per call.
///
/// # Example
///
/// ```rust
/// use infoqueue::queue::api::{InfoQueue, MessageCategory, MessageId, MessageSeverity};
///
/// let queue = InfoQueue::new();
/// queue.set_message_count_limit(2);
///
/// for name in ["A", "B", "C"] {
///     queue.add_message(
///         MessageCategory::Execution,
///         MessageSeverity::Warning,
///         MessageId(1),
///         name.to_string(),
///     );
/// }
///
/// assert_eq!(queue.num_stored_messages(), 2);
/// assert_eq!(queue.num_messages_discarded_by_message_count_limit(), 1);
/// assert_eq!(queue.get_message(0).unwrap().description, "B");
/// assert!(queue.get_message(2).is_err());
/// ```
pub struct InfoQueue {
    state: Mutex<QueueState>,
    notifier: BreakNotifier,
    debug_output: RwLock<Arc<dyn DebugOutput>>,
}

impl Default for InfoQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InfoQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfoQueue")
            .field("state", &*self.state())
            .field("notifier", &self.notifier)
            .finish_non_exhaustive()
    }
}

impl InfoQueue {
    pub fn new() -> Self {
        Self::with_debug_output(Arc::new(LogDebugOutput))
    }

    pub fn with_debug_output(debug_output: Arc<dyn DebugOutput>) -> Self {
        Self {
            state: Mutex::new(QueueState::new()),
            notifier: BreakNotifier::new(),
            debug_output: RwLock::new(debug_output),
        }
    }

    /// Build a queue from the `[queue]` configuration table
    ///
    /// Fails with `InvalidArgument` if a break flag names the application
    /// sentinel id; nothing is partially applied in that case.
    pub fn from_config(config: &QueueConfig) -> QueueResult<Self> {
        if config.break_on.ids.contains(&MessageId::UNKNOWN) {
            return Err(sentinel_break_error());
        }

        let queue = Self::new();
        {
            let mut state = queue.state();
            state.set_message_count_limit(config.message_count_limit);
            state.set_mute_debug_output(config.mute_debug_output);

            let flags = state.break_flags_mut();
            for category in &config.break_on.categories {
                flags.set_category(*category, true);
            }
            for severity in &config.break_on.severities {
                flags.set_severity(*severity, true);
            }
            for id in &config.break_on.ids {
                flags.set_id(*id, true);
            }

            for filter in &config.storage_filter {
                state.filters_mut(FilterStage::Storage).push(filter.clone());
            }
            for filter in &config.retrieval_filter {
                state.filters_mut(FilterStage::Retrieval).push(filter.clone());
            }
        }

        log::debug!(
            "Info queue configured: limit={}, mute={}, storage frames={}, retrieval frames={}",
            config.message_count_limit,
            config.mute_debug_output,
            config.storage_filter.len(),
            config.retrieval_filter.len()
        );
        Ok(queue)
    }

    // Every mutation leaves the state consistent, so a poisoned lock is safe to reuse
    fn state(&self) -> MutexGuard<'_, QueueState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn current_debug_output(&self) -> Arc<dyn DebugOutput> {
        let guard = self
            .debug_output
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Replace the sink that receives the debug output echo
    pub fn set_debug_output(&self, debug_output: Arc<dyn DebugOutput>) {
        *self
            .debug_output
            .write()
            .unwrap_or_else(PoisonError::into_inner) = debug_output;
    }

    /// Notifier used to deliver break events
    pub fn break_notifier(&self) -> &BreakNotifier {
        &self.notifier
    }

    // ---- ingestion ----------------------------------------------------

    pub fn add_message(
        &self,
        category: MessageCategory,
        severity: MessageSeverity,
        id: MessageId,
        description: String,
    ) {
        self.ingest(Message::new(category, severity, id, description));
    }

    /// Add a message under the application category and sentinel id
    pub fn add_application_message(&self, severity: MessageSeverity, description: String) {
        self.ingest(Message::application(severity, description));
    }

    fn ingest(&self, message: Message) {
        let (outcome, muted) = {
            let mut state = self.state();
            let outcome = state.ingest(message);
            (outcome, state.mute_debug_output())
        };

        match outcome {
            Ingested::Denied => {
                log::trace!("Message denied by storage filter");
            }
            Ingested::Allowed { message, reasons } => {
                if !muted {
                    self.current_debug_output().write(&message);
                }

                if !reasons.is_empty() {
                    log::debug!("Break condition on {} ({:?})", message, reasons);
                    let event = BreakEvent::new(message, reasons);
                    if let Err(e) = self.notifier.publish(event) {
                        log::warn!("Break notification delivery incomplete: {}", e);
                    }
                }
            }
        }
    }

    // ---- storage ------------------------------------------------------

    /// Empty the stored messages; counters, filters and flags are kept
    pub fn clear_stored_messages(&self) {
        let cleared = self.state().clear();
        log::debug!("Cleared {} stored messages", cleared);
    }

    /// Message at `index` within the retrieval-filtered view (0 = oldest)
    pub fn get_message(&self, index: u64) -> QueueResult<Arc<Message>> {
        self.state().get(index)
    }

    pub fn try_get_message(&self, index: u64) -> Option<Arc<Message>> {
        self.get_message(index).ok()
    }

    /// Whole retrieval-filtered view, oldest first, taken under one lock
    pub fn retrievable_messages(&self) -> Vec<Arc<Message>> {
        self.state().retrievable_messages()
    }

    pub fn message_count_limit(&self) -> u64 {
        self.state().message_count_limit()
    }

    /// Change the limit, evicting the oldest messages that no longer fit
    pub fn set_message_count_limit(&self, limit: u64) {
        let evicted = self.state().set_message_count_limit(limit);
        if evicted > 0 {
            log::debug!(
                "Message count limit lowered to {}: evicted {} messages",
                limit,
                evicted
            );
        }
    }

    pub fn mute_debug_output(&self) -> bool {
        self.state().mute_debug_output()
    }

    pub fn set_mute_debug_output(&self, mute: bool) {
        self.state().set_mute_debug_output(mute);
    }

    // ---- counters -----------------------------------------------------

    pub fn num_messages_allowed_by_storage_filter(&self) -> u64 {
        self.state().allowed()
    }

    pub fn num_messages_denied_by_storage_filter(&self) -> u64 {
        self.state().denied()
    }

    pub fn num_messages_discarded_by_message_count_limit(&self) -> u64 {
        self.state().discarded()
    }

    pub fn num_stored_messages(&self) -> u64 {
        self.state().stored()
    }

    pub fn num_stored_messages_allowed_by_retrieval_filter(&self) -> u64 {
        self.state().retrievable_count()
    }

    pub fn stats(&self) -> QueueStats {
        self.state().stats()
    }

    // ---- break flags --------------------------------------------------

    pub fn get_break_on_category(&self, category: MessageCategory) -> bool {
        self.state().break_flags().category(category)
    }

    pub fn get_break_on_severity(&self, severity: MessageSeverity) -> bool {
        self.state().break_flags().severity(severity)
    }

    pub fn get_break_on_id(&self, id: MessageId) -> bool {
        self.state().break_flags().id(id)
    }

    pub fn set_break_on_category(&self, category: MessageCategory, enable: bool) {
        self.state().break_flags_mut().set_category(category, enable);
    }

    pub fn set_break_on_severity(&self, severity: MessageSeverity, enable: bool) {
        self.state().break_flags_mut().set_severity(severity, enable);
    }

    /// Fails with `InvalidArgument` for `MessageId::UNKNOWN`, the id every
    /// application message carries
    pub fn set_break_on_id(&self, id: MessageId, enable: bool) -> QueueResult<()> {
        if id == MessageId::UNKNOWN {
            return Err(sentinel_break_error());
        }
        self.state().break_flags_mut().set_id(id, enable);
        Ok(())
    }

    // ---- filter stacks ------------------------------------------------

    pub fn push_filter(&self, stage: FilterStage, filter: InfoQueueFilter) {
        let mut state = self.state();
        let stack = state.filters_mut(stage);
        stack.push(filter);
        log::trace!("Pushed {} filter (depth {})", stage, stack.len());
    }

    pub fn push_empty_filter(&self, stage: FilterStage) {
        self.push_filter(stage, InfoQueueFilter::allow_all());
    }

    /// Duplicate the active frame; pushes an empty frame on an empty stack
    pub fn push_copy_of_filter(&self, stage: FilterStage) {
        self.state().filters_mut(stage).push_copy();
    }

    pub fn pop_filter(&self, stage: FilterStage) -> Option<InfoQueueFilter> {
        self.state().filters_mut(stage).pop()
    }

    /// Copy of the active (top) frame
    pub fn get_filter(&self, stage: FilterStage) -> Option<InfoQueueFilter> {
        self.state().filters(stage).top().cloned()
    }

    /// Merge entries into the active frame
    pub fn add_filter_entries(&self, stage: FilterStage, filter: &InfoQueueFilter) {
        self.state().filters_mut(stage).add_entries(filter);
    }

    /// Reset the active frame so it passes everything
    pub fn clear_filter(&self, stage: FilterStage) {
        self.state().filters_mut(stage).clear_top();
    }

    pub fn filter_stack_size(&self, stage: FilterStage) -> usize {
        self.state().filters(stage).len()
    }

    pub fn push_storage_filter(&self, filter: InfoQueueFilter) {
        self.push_filter(FilterStage::Storage, filter);
    }

    pub fn push_retrieval_filter(&self, filter: InfoQueueFilter) {
        self.push_filter(FilterStage::Retrieval, filter);
    }
}

fn sentinel_break_error() -> QueueError {
    QueueError::InvalidArgument {
        message: format!(
            "message id {} is reserved for application messages and cannot break",
            MessageId::UNKNOWN
        ),
    }
}
