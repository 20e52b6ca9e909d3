//! Replay recorded messages through a queue
//!
//! Break events are collected by a channel subscriber running on its own
//! task, so the count covers every break raised during ingestion.

use crate::app::cli::display::{format_break, ReplayReport};
use crate::app::cli::input::InputRecord;
use crate::notifications::api::BreakFilter;
use crate::queue::api::InfoQueue;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_REPLAY: AtomicU64 = AtomicU64::new(0);

// Never reuses an id already registered on this queue
fn replay_subscriber_id(queue: &InfoQueue) -> String {
    loop {
        let id = format!("replay-{}", NEXT_REPLAY.fetch_add(1, Ordering::Relaxed));
        if !queue.break_notifier().has_subscriber(&id) {
            return id;
        }
    }
}

/// Ingest every record in order and report what the queue kept
///
/// With `echo_breaks` each break is printed to stderr as it arrives.
pub async fn replay(
    queue: Arc<InfoQueue>,
    records: &[InputRecord],
    echo_breaks: bool,
    use_color: bool,
) -> ReplayReport {
    let subscriber_id = replay_subscriber_id(&queue);
    let mut receiver = queue.break_notifier().subscribe(
        subscriber_id.clone(),
        BreakFilter::All,
        "cli:replay".to_string(),
    );

    let reporter = tokio::spawn(async move {
        let mut breaks = 0usize;
        while let Some(event) = receiver.recv().await {
            breaks += 1;
            if echo_breaks {
                eprintln!("{}", format_break(&event, use_color));
            }
        }
        breaks
    });

    for record in records {
        record.ingest(&queue);
    }
    log::debug!("Replayed {} records", records.len());

    // Dropping the subscription closes the channel and ends the reporter
    queue.break_notifier().unsubscribe(&subscriber_id);
    let breaks = match reporter.await {
        Ok(breaks) => breaks,
        Err(e) => {
            log::warn!("Break reporter task failed: {}", e);
            0
        }
    };

    ReplayReport {
        messages: queue.retrievable_messages(),
        stats: queue.stats(),
        breaks,
    }
}
