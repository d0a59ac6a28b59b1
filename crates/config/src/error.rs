//! Errors raised while locating, reading, checking or writing the config

use std::path::PathBuf;
use thiserror::Error;

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not valid TOML or has a value of the wrong type
    #[error("Malformed config {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Cannot render config as TOML: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// One or more values are out of range; the message lists them all
    #[error("Invalid config: {0}")]
    ValidationError(String),

    #[error("Invalid value '{value}' in {variable}: {reason}")]
    EnvOverrideError {
        variable: String,
        value: String,
        reason: String,
    },

    #[error("Cannot create config directory {path}: {source}")]
    DirectoryCreationError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No usable config directory: {reason}")]
    PathResolutionError { reason: String },

    #[error("Cannot back up the previous config: {source}")]
    BackupError { source: std::io::Error },

    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// A rejected value, addressed by its dotted path (`catalog.popular_limit`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub value: Option<String>,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            value: None,
        }
    }

    pub fn with_value(
        field: impl Into<String>,
        message: impl Into<String>,
        value: impl ToString,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            value: Some(value.to_string()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Field '{}': {}", self.field, self.message)?;
        match &self.value {
            Some(value) => write!(f, " (got: {})", value),
            None => Ok(()),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Joins validation errors into the single message stored in [`ConfigError::ValidationError`]
pub(crate) fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
