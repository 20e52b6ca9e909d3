//! Errors raised while assembling a run from config, arguments and input

use crate::queue::api::QueueError;
use std::path::{Path, PathBuf};

/// Every variant except `Io` carries a ready-to-print message
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{message}")]
    NotFound { path: PathBuf, message: String },

    #[error("Error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{message}")]
    Parse { message: String },

    #[error("{message}")]
    Invalid { message: String },

    #[error("{message}")]
    Input { line: usize, message: String },
}

impl ConfigError {
    pub fn not_found(path: &Path) -> Self {
        ConfigError::NotFound {
            path: path.to_path_buf(),
            message: format!(
                "The specified configuration file does not exist: {}",
                path.display()
            ),
        }
    }

    pub fn io(path: &Path, source: std::io::Error) -> Self {
        ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn parse(path: &Path, error: impl std::fmt::Display) -> Self {
        ConfigError::Parse {
            message: format!(
                "Error parsing configuration file {}: {}",
                path.display(),
                error
            ),
        }
    }

    pub fn invalid(key: &str, message: impl std::fmt::Display) -> Self {
        ConfigError::Invalid {
            message: format!("Invalid value for '{}': {}", key, message),
        }
    }

    pub fn input(line: usize, message: impl std::fmt::Display) -> Self {
        ConfigError::Input {
            line,
            message: format!("Input line {}: {}", line, message),
        }
    }
}

impl From<QueueError> for ConfigError {
    fn from(error: QueueError) -> Self {
        ConfigError::Invalid {
            message: error.to_string(),
        }
    }
}

impl crate::core::error_handling::ContextualError for ConfigError {
    fn is_user_actionable(&self) -> bool {
        !matches!(self, ConfigError::Io { .. })
    }

    fn user_message(&self) -> Option<&str> {
        match self {
            ConfigError::NotFound { message, .. }
            | ConfigError::Parse { message }
            | ConfigError::Invalid { message }
            | ConfigError::Input { message, .. } => Some(message),
            ConfigError::Io { .. } => None,
        }
    }
}
