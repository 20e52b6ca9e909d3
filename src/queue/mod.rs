//! Information Queue Component
//!
//! A bounded, filterable store of debug and validation messages. A graphics
//! or validation layer produces messages; a diagnostics consumer reads them
//! back and inspects the counters.
//!
//! # Overview
//!
//! - **Bounded FIFO**: the oldest message is evicted once the message count
//!   limit is exceeded
//! - **Storage filter stack**: decides at ingestion whether a message is kept
//! - **Retrieval filter stack**: a read-only view over the stored messages
//! - **Break flags**: per category, severity and id; a matching stored
//!   message raises a break event through the notification system
//! - **Counters**: allowed, denied, discarded and stored counts
//!
//! # Architecture
//!
//! ```text
//!   add_message / add_application_message
//!                  │
//!                  ▼
//!        ┌───────────────────┐  denied   ┌──────────────┐
//!        │  storage filter   │──────────▶│ denied += 1  │
//!        └─────────┬─────────┘           └──────────────┘
//!                  │ allowed += 1
//!                  ▼
//!        ┌───────────────────┐  over limit ┌────────────────┐
//!        │ FIFO  [1][2][3].. │────────────▶│ discarded += 1 │
//!        └─────────┬─────────┘             └────────────────┘
//!                  │ get_message(i)
//!                  ▼
//!        ┌───────────────────┐
//!        │ retrieval filter  │  (view only)
//!        └───────────────────┘
//! ```
//!
//! Debug output and break events are emitted after the queue lock is
//! released.

pub(crate) mod break_flags;
pub(crate) mod config;
pub(crate) mod error;
pub(crate) mod filter;
pub(crate) mod internal;
pub(crate) mod manager;
pub(crate) mod message;
pub(crate) mod output;
pub(crate) mod types;

pub mod api;

#[cfg(test)]
mod tests;
