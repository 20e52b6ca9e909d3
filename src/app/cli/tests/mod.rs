//! Tests for the CLI module
//!
//! Argument parsing, config file merging, replay input and report output.
