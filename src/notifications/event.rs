//! Event types for the notification system

use crate::queue::message::{Message, MessageCategory, MessageId, MessageSeverity};
use std::fmt;
use std::sync::Arc;
use std::time::SystemTime;

/// Which break flag a message matched
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BreakReason {
    Category(MessageCategory),
    Severity(MessageSeverity),
    Id(MessageId),
}

impl fmt::Display for BreakReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreakReason::Category(category) => write!(f, "category={category}"),
            BreakReason::Severity(severity) => write!(f, "severity={severity}"),
            BreakReason::Id(id) => write!(f, "id={id}"),
        }
    }
}

/// Raised once for every stored message that matches a break flag
#[derive(Clone, Debug)]
pub struct BreakEvent {
    pub message: Arc<Message>,
    pub reasons: Vec<BreakReason>,
    pub timestamp: SystemTime,
}

impl BreakEvent {
    pub fn new(message: Arc<Message>, reasons: Vec<BreakReason>) -> Self {
        Self {
            message,
            reasons,
            timestamp: SystemTime::now(),
        }
    }
}

impl fmt::Display for BreakEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reasons: Vec<String> = self.reasons.iter().map(|r| r.to_string()).collect();
        write!(f, "break on {} ({})", self.message, reasons.join(", "))
    }
}

/// Event filtering options for subscribers
#[derive(Clone, Debug, PartialEq)]
pub enum BreakFilter {
    CategoryOnly,
    SeverityOnly,
    IdOnly,
    All,
}

impl BreakFilter {
    /// Check if an event should be accepted by this filter
    pub fn accepts(&self, event: &BreakEvent) -> bool {
        event.reasons.iter().any(|reason| {
            matches!(
                (self, reason),
                (BreakFilter::CategoryOnly, BreakReason::Category(_))
                    | (BreakFilter::SeverityOnly, BreakReason::Severity(_))
                    | (BreakFilter::IdOnly, BreakReason::Id(_))
                    | (BreakFilter::All, _)
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(reasons: Vec<BreakReason>) -> BreakEvent {
        BreakEvent::new(
            Arc::new(Message::new(
                MessageCategory::Execution,
                MessageSeverity::Error,
                MessageId(8),
                "draw".to_string(),
            )),
            reasons,
        )
    }

    #[test]
    fn test_break_filter_accepts_matching_reasons() {
        let severity_event = event(vec![BreakReason::Severity(MessageSeverity::Error)]);
        let mixed_event = event(vec![
            BreakReason::Category(MessageCategory::Execution),
            BreakReason::Id(MessageId(8)),
        ]);

        assert!(BreakFilter::SeverityOnly.accepts(&severity_event));
        assert!(!BreakFilter::SeverityOnly.accepts(&mixed_event));

        assert!(BreakFilter::CategoryOnly.accepts(&mixed_event));
        assert!(BreakFilter::IdOnly.accepts(&mixed_event));
        assert!(!BreakFilter::IdOnly.accepts(&severity_event));

        assert!(BreakFilter::All.accepts(&severity_event));
        assert!(BreakFilter::All.accepts(&mixed_event));
    }

    #[test]
    fn test_event_display() {
        let event = event(vec![
            BreakReason::Severity(MessageSeverity::Error),
            BreakReason::Id(MessageId(8)),
        ]);
        assert_eq!(
            event.to_string(),
            "break on ERROR [execution #8]: draw (severity=error, id=8)"
        );
    }
}
