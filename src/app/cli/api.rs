//! Public API exports for the CLI module

pub use super::args::{Args, OutputFormat};
pub use super::config::{default_config_path, read_config_file};
pub use super::display::{format_break, format_message, format_stats, ReplayReport};
pub use super::error::ConfigError;
pub use super::input::{parse_input, parse_line, InputRecord};
