//! BreakNotifier implementation
//!
//! Break events reach two kinds of listener:
//! - handlers, called synchronously on the ingesting thread
//! - subscribers, which receive events over an unbounded channel
//!
//! Handlers are snapshotted before they run so a handler can register
//! more handlers, subscribe, or re-enter the queue without deadlocking.

use crate::notifications::error::NotificationError;
use crate::notifications::event::{BreakEvent, BreakFilter};
use crate::notifications::traits::{BreakHandler, SubscriberStatistics};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

struct SubscriberInfo {
    filter: BreakFilter,
    source: String,
    sender: UnboundedSender<BreakEvent>,
    statistics: Arc<SubscriberStatistics>,
}

#[derive(Default)]
pub struct BreakNotifier {
    handlers: RwLock<Vec<Arc<dyn BreakHandler>>>,
    subscribers: Mutex<HashMap<String, SubscriberInfo>>,
}

impl fmt::Debug for BreakNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BreakNotifier")
            .field("handlers", &self.handler_count())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl BreakNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    fn subscribers(&self) -> MutexGuard<'_, HashMap<String, SubscriberInfo>> {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn register_handler(&self, handler: Arc<dyn BreakHandler>) {
        self.handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn subscribe(
        &self,
        subscriber_id: String,
        filter: BreakFilter,
        source: String,
    ) -> UnboundedReceiver<BreakEvent> {
        let (sender, receiver) = unbounded_channel();

        let subscriber_info = SubscriberInfo {
            filter,
            source: source.clone(),
            sender,
            statistics: Arc::new(SubscriberStatistics::new()),
        };

        // Warn if overwriting existing subscriber
        if let Some(existing) = self
            .subscribers()
            .insert(subscriber_id.clone(), subscriber_info)
        {
            log::warn!(
                "Subscriber '{}' replaced existing subscription (source: {} -> {})",
                subscriber_id,
                existing.source,
                source
            );
        }

        receiver
    }

    pub fn unsubscribe(&self, subscriber_id: &str) -> bool {
        self.subscribers().remove(subscriber_id).is_some()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers().len()
    }

    pub fn has_subscriber(&self, subscriber_id: &str) -> bool {
        self.subscribers().contains_key(subscriber_id)
    }

    pub fn subscriber_statistics(&self, subscriber_id: &str) -> Option<Arc<SubscriberStatistics>> {
        self.subscribers()
            .get(subscriber_id)
            .map(|info| Arc::clone(&info.statistics))
    }

    /// Deliver an event to every handler and every matching subscriber
    ///
    /// Subscribers whose receiver has been dropped are removed and reported
    /// in the returned error; the remaining listeners still get the event.
    pub fn publish(&self, event: BreakEvent) -> Result<(), NotificationError> {
        let handlers: Vec<Arc<dyn BreakHandler>> = self
            .handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for handler in &handlers {
            handler.on_break(&event);
        }

        let mut failed_subscribers = Vec::new();
        {
            let mut subscribers = self.subscribers();
            for (subscriber_id, subscriber_info) in subscribers.iter() {
                if !subscriber_info.filter.accepts(&event) {
                    continue;
                }
                if subscriber_info.sender.send(event.clone()).is_ok() {
                    subscriber_info.statistics.record_event_delivered();
                } else {
                    failed_subscribers.push(subscriber_id.clone());
                }
            }

            // Remove subscribers with closed channels
            for subscriber_id in &failed_subscribers {
                subscribers.remove(subscriber_id);
            }
        }

        if !failed_subscribers.is_empty() {
            return Err(NotificationError::PublishFailed { failed_subscribers });
        }

        Ok(())
    }
}
