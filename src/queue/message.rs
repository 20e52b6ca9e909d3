//! Message Types for the Information Queue
//!
//! This module defines the debug message value stored by the queue together
//! with the three keys every filter and break flag is expressed in:
//! category, severity and identifier.

use crate::queue::error::{QueueError, QueueResult};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Subsystem area a message originates from
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
#[repr(u32)]
pub enum MessageCategory {
    ApplicationDefined = 0,
    Miscellaneous = 1,
    Initialization = 2,
    Cleanup = 3,
    Compilation = 4,
    StateCreation = 5,
    StateSetting = 6,
    StateGetting = 7,
    ResourceManipulation = 8,
    Execution = 9,
    Shader = 10,
}

/// How serious a message is
///
/// Raw values follow the graphics runtime (Corruption = 0 ... Message = 4),
/// but ordering is by importance: `Corruption > Error > Warning > Info > Message`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
#[repr(u32)]
pub enum MessageSeverity {
    Corruption = 0,
    Error = 1,
    Warning = 2,
    Info = 3,
    Message = 4,
}

impl MessageSeverity {
    fn importance(self) -> u32 {
        MessageSeverity::Message as u32 - self as u32
    }
}

impl Ord for MessageSeverity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.importance().cmp(&other.importance())
    }
}

impl PartialOrd for MessageSeverity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl TryFrom<u32> for MessageCategory {
    type Error = QueueError;

    fn try_from(value: u32) -> QueueResult<Self> {
        MessageCategory::iter()
            .find(|category| *category as u32 == value)
            .ok_or_else(|| QueueError::InvalidArgument {
                message: format!("message category {value} is out of range"),
            })
    }
}

impl TryFrom<u32> for MessageSeverity {
    type Error = QueueError;

    fn try_from(value: u32) -> QueueResult<Self> {
        MessageSeverity::iter()
            .find(|severity| *severity as u32 == value)
            .ok_or_else(|| QueueError::InvalidArgument {
                message: format!("message severity {value} is out of range"),
            })
    }
}

/// Producer-defined message identifier
///
/// Identifiers are not globally unique; the same id may be reported many
/// times. `MessageId::UNKNOWN` is reserved for application messages.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct MessageId(pub u32);

impl MessageId {
    /// Sentinel carried by application messages
    pub const UNKNOWN: MessageId = MessageId(0);

    pub fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for MessageId {
    fn from(value: u32) -> Self {
        MessageId(value)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single debug message
///
/// Messages are immutable once created. The queue wraps each stored message
/// in an `Arc` so retrieval never copies the description.
///
/// # Example
///
/// ```rust
/// use infoqueue::queue::api::{Message, MessageCategory, MessageId, MessageSeverity};
///
/// let message = Message::new(
///     MessageCategory::StateCreation,
///     MessageSeverity::Error,
///     MessageId(42),
///     "CreateBuffer: invalid size".to_string(),
/// );
/// assert_eq!(message.id, MessageId(42));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub category: MessageCategory,
    pub severity: MessageSeverity,
    pub id: MessageId,
    pub description: String,
}

impl Message {
    pub fn new(
        category: MessageCategory,
        severity: MessageSeverity,
        id: MessageId,
        description: String,
    ) -> Self {
        Self {
            category,
            severity,
            id,
            description,
        }
    }

    /// Build an application-defined message
    pub fn application(severity: MessageSeverity, description: String) -> Self {
        Self::new(
            MessageCategory::ApplicationDefined,
            severity,
            MessageId::UNKNOWN,
            description,
        )
    }

    pub fn is_application_message(&self) -> bool {
        self.category == MessageCategory::ApplicationDefined && self.id == MessageId::UNKNOWN
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{} #{}]: {}",
            self.severity.to_string().to_uppercase(),
            self.category,
            self.id,
            self.description
        )
    }
}
