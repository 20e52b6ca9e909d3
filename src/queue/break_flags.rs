//! Break-on-condition flags
//!
//! Three independent key sets. A stored message that matches any of them
//! produces one break event listing every matching key.

use crate::notifications::event::BreakReason;
use crate::queue::message::{Message, MessageCategory, MessageId, MessageSeverity};
use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct BreakFlags {
    categories: HashSet<MessageCategory>,
    severities: HashSet<MessageSeverity>,
    ids: HashSet<MessageId>,
}

fn toggle<T: Eq + std::hash::Hash>(set: &mut HashSet<T>, key: T, enable: bool) {
    if enable {
        set.insert(key);
    } else {
        set.remove(&key);
    }
}

impl BreakFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self, category: MessageCategory) -> bool {
        self.categories.contains(&category)
    }

    pub fn severity(&self, severity: MessageSeverity) -> bool {
        self.severities.contains(&severity)
    }

    pub fn id(&self, id: MessageId) -> bool {
        self.ids.contains(&id)
    }

    pub fn set_category(&mut self, category: MessageCategory, enable: bool) {
        toggle(&mut self.categories, category, enable);
    }

    pub fn set_severity(&mut self, severity: MessageSeverity, enable: bool) {
        toggle(&mut self.severities, severity, enable);
    }

    pub fn set_id(&mut self, id: MessageId, enable: bool) {
        toggle(&mut self.ids, id, enable);
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.severities.is_empty() && self.ids.is_empty()
    }

    /// Keys of `message` that have a flag set, in category/severity/id order
    pub fn matches(&self, message: &Message) -> Vec<BreakReason> {
        let mut reasons = Vec::new();
        if self.category(message.category) {
            reasons.push(BreakReason::Category(message.category));
        }
        if self.severity(message.severity) {
            reasons.push(BreakReason::Severity(message.severity));
        }
        if self.id(message.id) {
            reasons.push(BreakReason::Id(message.id));
        }
        reasons
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_idempotent() {
        let mut flags = BreakFlags::new();
        flags.set_severity(MessageSeverity::Error, true);
        flags.set_severity(MessageSeverity::Error, true);
        assert!(flags.severity(MessageSeverity::Error));

        flags.set_severity(MessageSeverity::Error, false);
        assert!(!flags.severity(MessageSeverity::Error));
        flags.set_severity(MessageSeverity::Error, false);
        assert!(!flags.severity(MessageSeverity::Error));
        assert!(flags.is_empty());
    }

    #[test]
    fn test_matches_lists_every_matching_key() {
        let mut flags = BreakFlags::new();
        flags.set_category(MessageCategory::Execution, true);
        flags.set_id(MessageId(3), true);

        let message = Message::new(
            MessageCategory::Execution,
            MessageSeverity::Warning,
            MessageId(3),
            "draw".to_string(),
        );
        assert_eq!(
            flags.matches(&message),
            vec![
                BreakReason::Category(MessageCategory::Execution),
                BreakReason::Id(MessageId(3))
            ]
        );

        let unrelated = Message::new(
            MessageCategory::Cleanup,
            MessageSeverity::Warning,
            MessageId(4),
            "release".to_string(),
        );
        assert!(flags.matches(&unrelated).is_empty());
    }
}
