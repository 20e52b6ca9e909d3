//! Filter frames and filter stacks
//!
//! A filter frame pairs an allow description with a deny description. The
//! queue keeps two independent stacks of frames: one consulted when a
//! message is ingested (storage) and one consulted when stored messages are
//! read back (retrieval). Only the top frame of a stack is active.

use crate::queue::message::{Message, MessageCategory, MessageId, MessageSeverity};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two filter stacks an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterStage {
    Storage,
    Retrieval,
}

impl fmt::Display for FilterStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterStage::Storage => write!(f, "storage"),
            FilterStage::Retrieval => write!(f, "retrieval"),
        }
    }
}

/// Lists of keys used by one side (allow or deny) of a filter frame
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterDesc {
    pub categories: Vec<MessageCategory>,
    pub severities: Vec<MessageSeverity>,
    pub ids: Vec<MessageId>,
}

impl FilterDesc {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.severities.is_empty() && self.ids.is_empty()
    }

    pub fn with_categories(mut self, categories: impl IntoIterator<Item = MessageCategory>) -> Self {
        self.categories.extend(categories);
        self
    }

    pub fn with_severities(mut self, severities: impl IntoIterator<Item = MessageSeverity>) -> Self {
        self.severities.extend(severities);
        self
    }

    pub fn with_ids(mut self, ids: impl IntoIterator<Item = MessageId>) -> Self {
        self.ids.extend(ids);
        self
    }

    /// Allow-side test: each non-empty list must contain the message's key
    fn admits(&self, message: &Message) -> bool {
        (self.categories.is_empty() || self.categories.contains(&message.category))
            && (self.severities.is_empty() || self.severities.contains(&message.severity))
            && (self.ids.is_empty() || self.ids.contains(&message.id))
    }

    /// Deny-side test: any list containing the message's key rejects it
    fn rejects(&self, message: &Message) -> bool {
        self.categories.contains(&message.category)
            || self.severities.contains(&message.severity)
            || self.ids.contains(&message.id)
    }

    fn merge(&mut self, other: &FilterDesc) {
        merge_unique(&mut self.categories, &other.categories);
        merge_unique(&mut self.severities, &other.severities);
        merge_unique(&mut self.ids, &other.ids);
    }
}

fn merge_unique<T: PartialEq + Copy>(target: &mut Vec<T>, entries: &[T]) {
    for entry in entries {
        if !target.contains(entry) {
            target.push(*entry);
        }
    }
}

/// One frame of a filter stack
///
/// # Example
///
/// ```rust
/// use infoqueue::queue::api::{FilterDesc, InfoQueueFilter, Message, MessageSeverity};
///
/// let quiet = InfoQueueFilter::deny(
///     FilterDesc::default().with_severities([MessageSeverity::Info, MessageSeverity::Message]),
/// );
/// assert!(!quiet.allows(&Message::application(MessageSeverity::Info, "x".to_string())));
/// assert!(quiet.allows(&Message::application(MessageSeverity::Error, "x".to_string())));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InfoQueueFilter {
    pub allow: FilterDesc,
    pub deny: FilterDesc,
}

impl InfoQueueFilter {
    /// Frame that lets every message through
    pub fn allow_all() -> Self {
        Self::default()
    }

    pub fn allow(allow: FilterDesc) -> Self {
        Self {
            allow,
            deny: FilterDesc::default(),
        }
    }

    pub fn deny(deny: FilterDesc) -> Self {
        Self {
            allow: FilterDesc::default(),
            deny,
        }
    }

    /// Deny takes priority over allow
    pub fn allows(&self, message: &Message) -> bool {
        !self.deny.rejects(message) && self.allow.admits(message)
    }

    pub fn is_allow_all(&self) -> bool {
        self.allow.is_empty() && self.deny.is_empty()
    }

    /// Add the other frame's entries, skipping ones already present
    pub fn merge(&mut self, other: &InfoQueueFilter) {
        self.allow.merge(&other.allow);
        self.deny.merge(&other.deny);
    }
}

/// Ordered stack of filter frames; the most recently pushed frame decides
#[derive(Debug, Clone, Default)]
pub struct FilterStack {
    frames: Vec<InfoQueueFilter>,
}

impl FilterStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// An empty stack passes everything
    pub fn allows(&self, message: &Message) -> bool {
        self.frames
            .last()
            .map_or(true, |frame| frame.allows(message))
    }

    pub fn top(&self) -> Option<&InfoQueueFilter> {
        self.frames.last()
    }

    pub fn push(&mut self, filter: InfoQueueFilter) {
        self.frames.push(filter);
    }

    pub fn push_copy(&mut self) {
        let copy = self.frames.last().cloned().unwrap_or_default();
        self.frames.push(copy);
    }

    pub fn pop(&mut self) -> Option<InfoQueueFilter> {
        self.frames.pop()
    }

    /// Merge entries into the top frame, pushing one if the stack is empty
    pub fn add_entries(&mut self, filter: &InfoQueueFilter) {
        match self.frames.last_mut() {
            Some(top) => top.merge(filter),
            None => self.frames.push(filter.clone()),
        }
    }

    /// Reset the top frame to allow-everything
    pub fn clear_top(&mut self) {
        if let Some(top) = self.frames.last_mut() {
            *top = InfoQueueFilter::allow_all();
        }
    }
}
