//! Debug output side channel
//!
//! Every message that passes the storage filter is also echoed to a debug
//! output sink unless the queue is muted. The default sink writes through
//! the `log` facade.

use crate::queue::message::{Message, MessageSeverity};

/// Target used for messages echoed by `LogDebugOutput`
pub const DEBUG_OUTPUT_TARGET: &str = "infoqueue::debug_output";

/// Receiver of the debug output echo
pub trait DebugOutput: Send + Sync {
    fn write(&self, message: &Message);
}

/// Echoes messages to the `log` facade, mapping severity to log level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDebugOutput;

impl LogDebugOutput {
    pub fn level_for(severity: MessageSeverity) -> log::Level {
        match severity {
            MessageSeverity::Corruption | MessageSeverity::Error => log::Level::Error,
            MessageSeverity::Warning => log::Level::Warn,
            MessageSeverity::Info => log::Level::Info,
            MessageSeverity::Message => log::Level::Debug,
        }
    }
}

impl DebugOutput for LogDebugOutput {
    fn write(&self, message: &Message) {
        log::log!(
            target: DEBUG_OUTPUT_TARGET,
            Self::level_for(message.severity),
            "{}",
            message
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_level_mapping() {
        assert_eq!(
            LogDebugOutput::level_for(MessageSeverity::Corruption),
            log::Level::Error
        );
        assert_eq!(
            LogDebugOutput::level_for(MessageSeverity::Error),
            log::Level::Error
        );
        assert_eq!(
            LogDebugOutput::level_for(MessageSeverity::Warning),
            log::Level::Warn
        );
        assert_eq!(
            LogDebugOutput::level_for(MessageSeverity::Info),
            log::Level::Info
        );
        assert_eq!(
            LogDebugOutput::level_for(MessageSeverity::Message),
            log::Level::Debug
        );
    }
}
