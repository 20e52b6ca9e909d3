//! Traits for the notification system

use crate::notifications::event::BreakEvent;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock};
use std::time::Instant;

/// Statistics tracking for a subscriber
pub struct SubscriberStatistics {
    events_delivered: AtomicUsize,
    last_event_time: RwLock<Option<Instant>>,
}

impl Default for SubscriberStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl SubscriberStatistics {
    pub fn new() -> Self {
        Self {
            events_delivered: AtomicUsize::new(0),
            last_event_time: RwLock::new(None),
        }
    }

    pub fn events_delivered(&self) -> usize {
        self.events_delivered.load(Ordering::Relaxed)
    }

    pub fn record_event_delivered(&self) {
        self.events_delivered.fetch_add(1, Ordering::Relaxed);
        *self
            .last_event_time
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(Instant::now());
    }

    pub fn last_event_time(&self) -> Option<Instant> {
        *self
            .last_event_time
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Synchronous receiver of break events
///
/// Handlers run on the ingesting thread after the queue lock is released,
/// so they may query or modify the queue that raised the event.
pub trait BreakHandler: Send + Sync {
    fn on_break(&self, event: &BreakEvent);
}

impl<F> BreakHandler for F
where
    F: Fn(&BreakEvent) + Send + Sync,
{
    fn on_break(&self, event: &BreakEvent) {
        self(event)
    }
}
