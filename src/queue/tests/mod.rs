//! Test modules for the queue system
//!
//! Tests are organized by functional area.

mod filters;
pub mod helpers;
