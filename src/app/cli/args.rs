//! Command-line arguments
//!
//! Values given on the command line take precedence over the config file:
//! `apply_toml_values` only fills fields the user left unset.

use crate::core::logging::LogFormat;
use crate::queue::api::{MessageCategory, MessageSeverity, UNLIMITED};
use crate::core::styles::palette_to_clap;
use clap::{ArgAction, ColorChoice, CommandFactory, FromArgMatches, Parser, ValueEnum};
use std::ffi::OsString;
use std::path::PathBuf;

/// How the replay report is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "infoqueue")]
#[command(about = "Replay debug messages through a filtered information queue")]
#[command(version, long_version = crate::core::version::long_version())]
#[command(after_help = " * can be specified multiple times or as a comma-separated list")]
pub struct Args {
    /// JSON-lines message file ('-' or absent reads stdin)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Configuration file path
    #[arg(short = 'c', long = "config-file", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Maximum number of stored messages (or 'unlimited')
    #[arg(short = 'n', long = "limit", value_name = "COUNT", value_parser = parse_limit)]
    pub limit: Option<u64>,

    /// Do not echo stored messages to the debug output
    #[arg(short = 'm', long = "mute", action = ArgAction::SetTrue)]
    pub mute: bool,

    /// Severities that raise a break*
    #[arg(short = 'b', long = "break-on-severity", value_name = "SEVERITIES", value_delimiter = ',')]
    pub break_on_severity: Vec<MessageSeverity>,

    /// Categories that raise a break*
    #[arg(long = "break-on-category", value_name = "CATEGORIES", value_delimiter = ',')]
    pub break_on_category: Vec<MessageCategory>,

    /// Message ids that raise a break*
    #[arg(long = "break-on-id", value_name = "IDS", value_delimiter = ',')]
    pub break_on_id: Vec<u32>,

    /// Report format
    #[arg(short = 'O', long = "output", value_name = "FORMAT", value_enum)]
    pub output: Option<OutputFormat>,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    pub log_level: Option<String>,

    /// Log output format (text, ext, json)
    #[arg(short = 'o', long = "log-format", value_name = "FORMAT")]
    pub log_format: Option<LogFormat>,

    /// Log file path (use 'none' to disable file logging)
    #[arg(short = 'f', long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Force colored output
    #[arg(long = "color", action = ArgAction::SetTrue, conflicts_with = "no_color")]
    pub color: bool,

    /// Disable colored output
    #[arg(long = "no-color", action = ArgAction::SetTrue)]
    pub no_color: bool,
}

fn parse_limit(value: &str) -> Result<u64, String> {
    if value.eq_ignore_ascii_case("unlimited") {
        return Ok(UNLIMITED);
    }
    value
        .parse::<u64>()
        .map_err(|_| format!("'{}' is not a message count or 'unlimited'", value))
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output.unwrap_or_default()
    }

    pub fn log_format(&self) -> LogFormat {
        self.log_format.unwrap_or_default()
    }

    /// Input path, `None` meaning stdin
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|path| path.as_os_str() != "-")
    }

    /// Parse an argument list with help and error output styled from the palette
    pub fn try_parse_styled_from<I, T>(argv: I, color_enabled: bool) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::styled_command(color_enabled).try_get_matches_from(argv)?;
        Self::from_arg_matches(&matches)
    }

    pub fn styled_command(color_enabled: bool) -> clap::Command {
        let color_choice = if color_enabled {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self::command()
            .color(color_choice)
            .styles(palette_to_clap(color_enabled))
    }

    /// Colour for help output, decided before the arguments are parsed
    pub fn help_color(argv: &[OsString], is_terminal: bool) -> bool {
        if argv.iter().any(|a| a == "--no-color") {
            false
        } else if argv.iter().any(|a| a == "--color") {
            true
        } else {
            is_terminal
        }
    }

    /// Resolve colour: explicit flags win, otherwise follow the terminal
    pub fn use_color(&self, is_terminal: bool) -> bool {
        match (self.color, self.no_color) {
            (_, true) => false,
            (true, _) => true,
            _ => is_terminal,
        }
    }
}
