//! Test Helper Functions
//!
//! Shared utilities for queue tests

use crate::queue::api::{DebugOutput, InfoQueue, Message, MessageCategory, MessageId, MessageSeverity};
use std::sync::{Arc, Mutex};

/// Debug output sink that remembers every echoed description
#[derive(Default)]
pub struct RecordingOutput {
    lines: Mutex<Vec<String>>,
}

impl RecordingOutput {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl DebugOutput for RecordingOutput {
    fn write(&self, message: &Message) {
        self.lines.lock().unwrap().push(message.description.clone());
    }
}

/// Queue wired to a recording sink
pub fn recording_queue() -> (InfoQueue, Arc<RecordingOutput>) {
    let output = Arc::new(RecordingOutput::default());
    let queue = InfoQueue::with_debug_output(output.clone());
    (queue, output)
}

/// Add a message with the given severity and id under the execution category
pub fn add(queue: &InfoQueue, severity: MessageSeverity, id: u32, description: &str) {
    queue.add_message(
        MessageCategory::Execution,
        severity,
        MessageId(id),
        description.to_string(),
    );
}

/// Descriptions of the retrieval-filtered view, oldest first
pub fn descriptions(queue: &InfoQueue) -> Vec<String> {
    queue
        .retrievable_messages()
        .iter()
        .map(|message| message.description.clone())
        .collect()
}
