//! CLI display utilities for formatting output

use crate::core::styles::StyleRole;
use crate::notifications::api::BreakEvent;
use crate::queue::api::{Message, QueueStats, UNLIMITED};
use serde::Serialize;
use std::sync::Arc;

/// Outcome of a replay run
#[derive(Debug, Clone)]
pub struct ReplayReport {
    pub messages: Vec<Arc<Message>>,
    pub stats: QueueStats,
    pub breaks: usize,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    messages: Vec<&'a Message>,
    stats: &'a QueueStats,
    breaks: usize,
}

impl ReplayReport {
    /// Single JSON object: `{"messages": [...], "stats": {...}, "breaks": N}`
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&JsonReport {
            messages: self.messages.iter().map(|m| m.as_ref()).collect(),
            stats: &self.stats,
            breaks: self.breaks,
        })
    }

    pub fn to_text(&self, use_color: bool) -> String {
        let mut lines = Vec::with_capacity(self.messages.len() + 8);

        lines.push(StyleRole::Header.paint(
            &format!("Messages ({})", self.messages.len()),
            use_color,
        ));
        for (index, message) in self.messages.iter().enumerate() {
            lines.push(format!(
                "{}  {}",
                StyleRole::Dim.paint(&format!("{:>5}", index), use_color),
                format_message(message, use_color)
            ));
        }

        lines.push(String::new());
        lines.push(StyleRole::Header.paint("Counters", use_color));
        lines.extend(format_stats(&self.stats, use_color));
        lines.push(format_row("breaks", &self.breaks.to_string(), use_color));

        lines.join("\n")
    }
}

/// `ERROR      execution #7: description`
pub fn format_message(message: &Message, use_color: bool) -> String {
    let severity = format!("{:<10}", message.severity.to_string().to_uppercase());
    let source = if message.is_application_message() {
        message.category.to_string()
    } else {
        format!("{} #{}", message.category, message.id)
    };
    format!(
        "{} {}: {}",
        StyleRole::for_severity(message.severity).paint(&severity, use_color),
        StyleRole::Dim.paint(&source, use_color),
        message.description
    )
}

pub fn format_break(event: &BreakEvent, use_color: bool) -> String {
    let reasons: Vec<String> = event.reasons.iter().map(|r| r.to_string()).collect();
    format!(
        "{} {} ({})",
        StyleRole::Break.paint("BREAK", use_color),
        format_message(&event.message, use_color),
        reasons.join(", ")
    )
}

fn format_row(key: &str, value: &str, use_color: bool) -> String {
    format!(
        "  {}  {}",
        StyleRole::Key.paint(&format!("{:<34}", key), use_color),
        StyleRole::Value.paint(value, use_color)
    )
}

pub fn format_stats(stats: &QueueStats, use_color: bool) -> Vec<String> {
    let limit = if stats.message_count_limit == UNLIMITED {
        "unlimited".to_string()
    } else {
        stats.message_count_limit.to_string()
    };

    vec![
        format_row("allowed by storage filter", &stats.allowed_by_storage_filter.to_string(), use_color),
        format_row("denied by storage filter", &stats.denied_by_storage_filter.to_string(), use_color),
        format_row(
            "discarded by message count limit",
            &stats.discarded_by_message_count_limit.to_string(),
            use_color,
        ),
        format_row("stored", &stats.stored.to_string(), use_color),
        format_row(
            "allowed by retrieval filter",
            &stats.stored_allowed_by_retrieval_filter.to_string(),
            use_color,
        ),
        format_row("message count limit", &limit, use_color),
    ]
}
