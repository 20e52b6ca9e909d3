//! TOML configuration file parsing and loading
//!
//! The file has a `[queue]` table (see `QueueConfig`), a `[log]` table and
//! an optional top-level `output` key. A missing default file is not an
//! error; a missing explicit `--config-file` is.

use super::args::{Args, OutputFormat};
use super::error::ConfigError;
use crate::core::logging::LogFormat;
use crate::queue::api::{MessageId, QueueConfig};
use clap::ValueEnum;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// `<config dir>/Infoqueue/infoqueue.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("Infoqueue").join("infoqueue.toml"))
}

/// Read and parse a configuration file
pub async fn read_config_file(path: &Path) -> Result<toml::Table, ConfigError> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ConfigError::io(path, e))?;
    toml::from_str::<toml::Table>(&contents).map_err(|e| ConfigError::parse(path, e))
}

fn push_unique<T: PartialEq>(target: &mut Vec<T>, entries: impl IntoIterator<Item = T>) {
    for entry in entries {
        if !target.contains(&entry) {
            target.push(entry);
        }
    }
}

impl Args {
    /// Load the explicit config file, or the default one if it exists
    pub async fn load_config_file(&self) -> Result<Option<toml::Table>, ConfigError> {
        let config_path = match &self.config_file {
            Some(path) if !path.exists() => return Err(ConfigError::not_found(path)),
            Some(path) => Some(path.clone()),
            None => default_config_path().filter(|path| path.exists()),
        };

        match config_path {
            Some(path) => {
                log::debug!("Loading configuration from {}", path.display());
                read_config_file(&path).await.map(Some)
            }
            None => Ok(None),
        }
    }

    /// Fill unset arguments from the `[log]` table and `output` key
    pub fn apply_toml_values(args: &mut Self, config: &toml::Table) -> Result<(), ConfigError> {
        if args.output.is_none() {
            if let Some(output) = config.get("output").and_then(|v| v.as_str()) {
                let format = OutputFormat::from_str(output, true)
                    .map_err(|_| ConfigError::invalid("output", format!("unknown format '{}'", output)))?;
                args.output = Some(format);
            }
        }

        let Some(log) = config.get("log").and_then(|v| v.as_table()) else {
            return Ok(());
        };

        if args.log_level.is_none() {
            if let Some(level) = log.get("level").and_then(|v| v.as_str()) {
                let level = level.to_ascii_lowercase();
                if !LOG_LEVELS.contains(&level.as_str()) {
                    return Err(ConfigError::invalid(
                        "log.level",
                        format!("expected one of {}", LOG_LEVELS.join(", ")),
                    ));
                }
                args.log_level = Some(level);
            }
        }
        if args.log_format.is_none() {
            if let Some(format) = log.get("format").and_then(|v| v.as_str()) {
                let format = LogFormat::from_str(format).map_err(|_| {
                    ConfigError::invalid("log.format", format!("unknown format '{}'", format))
                })?;
                args.log_format = Some(format);
            }
        }
        if args.log_file.is_none() {
            if let Some(log_file) = log.get("file").and_then(|v| v.as_str()) {
                // Magic values "none" and "-" disable file logging
                if !log_file.eq_ignore_ascii_case("none") && log_file != "-" {
                    args.log_file = Some(PathBuf::from(log_file));
                }
            }
        }
        if !args.color && !args.no_color {
            if let Some(color) = log.get("color").and_then(|v| v.as_bool()) {
                args.color = color;
                args.no_color = !color;
            }
        }

        Ok(())
    }

    /// Queue settings from the `[queue]` table with command-line overrides applied
    pub fn queue_config(&self, config: Option<&toml::Table>) -> Result<QueueConfig, ConfigError> {
        let mut queue = match config.and_then(|c| c.get("queue")) {
            Some(value) => value
                .clone()
                .try_into::<QueueConfig>()
                .map_err(|e| ConfigError::invalid("queue", e))?,
            None => QueueConfig::default(),
        };

        if let Some(limit) = self.limit {
            queue.message_count_limit = limit;
        }
        if self.mute {
            queue.mute_debug_output = true;
        }
        push_unique(&mut queue.break_on.severities, self.break_on_severity.iter().copied());
        push_unique(&mut queue.break_on.categories, self.break_on_category.iter().copied());
        push_unique(
            &mut queue.break_on.ids,
            self.break_on_id.iter().copied().map(MessageId),
        );

        Ok(queue)
    }
}
