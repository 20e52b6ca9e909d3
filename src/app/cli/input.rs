//! JSON-lines replay input
//!
//! One message per line:
//!
//! ```text
//! {"category": "execution", "severity": "error", "id": 42, "description": "draw failed"}
//! {"severity": "info", "description": "frame 12 begins"}
//! ```
//!
//! A record without `category` is an application message. Blank lines and
//! lines starting with `#` are skipped.

use super::error::ConfigError;
use crate::queue::api::{InfoQueue, MessageCategory, MessageId, MessageSeverity};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputRecord {
    #[serde(default)]
    pub category: Option<MessageCategory>,
    pub severity: MessageSeverity,
    #[serde(default)]
    pub id: Option<MessageId>,
    pub description: String,
}

impl InputRecord {
    pub fn is_application_message(&self) -> bool {
        self.category.is_none()
    }

    pub fn ingest(&self, queue: &InfoQueue) {
        match self.category {
            Some(category) => queue.add_message(
                category,
                self.severity,
                self.id.unwrap_or(MessageId::UNKNOWN),
                self.description.clone(),
            ),
            None => queue.add_application_message(self.severity, self.description.clone()),
        }
    }
}

/// Parse one line; `Ok(None)` for lines that carry no record
pub fn parse_line(line_number: usize, line: &str) -> Result<Option<InputRecord>, ConfigError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let record: InputRecord =
        serde_json::from_str(trimmed).map_err(|e| ConfigError::input(line_number, e))?;

    if record.is_application_message() && record.id.is_some() {
        return Err(ConfigError::input(
            line_number,
            "application messages (no category) cannot carry an id",
        ));
    }

    Ok(Some(record))
}

/// Parse a whole input document; line numbers start at 1
pub fn parse_input(text: &str) -> Result<Vec<InputRecord>, ConfigError> {
    let mut records = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if let Some(record) = parse_line(index + 1, line)? {
            records.push(record);
        }
    }
    Ok(records)
}
