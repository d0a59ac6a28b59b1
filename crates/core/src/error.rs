//! Shared error taxonomy for the Jaigurudev crates
//!
//! Crate-specific errors (catalog, config) convert into [`AppError`] at the
//! edge of the program. Every variant knows how bad it is and what a front
//! end should do about it, so callers do not have to match on variants to
//! pick a message or a fallback.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// What a front end should do after an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryAction {
    /// Show an empty result or the default settings and carry on
    UseDefault,
    /// Leave the offending record out
    SkipRecord,
    /// Ask the user to fix the input, file or data set
    UserIntervention,
}

impl fmt::Display for RecoveryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::UseDefault => "falling back to defaults",
            Self::SkipRecord => "skipping the record",
            Self::UserIntervention => "needs attention",
        };
        f.write_str(text)
    }
}

/// How much of the app an error takes down
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Only the current lookup failed
    Recoverable,
    /// Some content or settings are unavailable
    Degraded,
    /// The catalog cannot be built from this data
    Fatal,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Recoverable => "recoverable",
            Self::Degraded => "degraded",
            Self::Fatal => "fatal",
        };
        f.write_str(text)
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    /// No record of `entity` type has this id
    #[error("No {entity} with id '{identifier}'")]
    RecordNotFound { entity: String, identifier: String },

    /// Two records of the same type share an id
    #[error("Duplicate {entity} id '{identifier}'")]
    DuplicateId { entity: String, identifier: String },

    #[error("Invalid {entity} '{identifier}': {}", .reasons.join("; "))]
    InvalidRecord {
        entity: String,
        identifier: String,
        reasons: Vec<String>,
    },

    /// A setting was rejected
    #[error("Setting {setting} = '{value}' rejected: {reason}")]
    InvalidConfiguration {
        setting: String,
        value: String,
        reason: String,
    },

    /// Reading or writing a file failed
    #[error("Could not access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Catalog data could not be turned into JSON or back
    #[error("Serialization error: {message}")]
    SerializationError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::RecordNotFound { .. } => ErrorSeverity::Recoverable,
            Self::InvalidRecord { .. }
            | Self::InvalidConfiguration { .. }
            | Self::Io { .. }
            | Self::SerializationError { .. } => ErrorSeverity::Degraded,
            Self::DuplicateId { .. } => ErrorSeverity::Fatal,
        }
    }

    pub fn recovery_action(&self) -> RecoveryAction {
        match self {
            Self::RecordNotFound { .. } | Self::InvalidConfiguration { .. } => {
                RecoveryAction::UseDefault
            }
            Self::InvalidRecord { .. } => RecoveryAction::SkipRecord,
            Self::DuplicateId { .. } | Self::Io { .. } | Self::SerializationError { .. } => {
                RecoveryAction::UserIntervention
            }
        }
    }

    /// Short message for end users, without ids of internal state
    pub fn user_message(&self) -> String {
        match self {
            Self::RecordNotFound { entity, .. } => {
                format!("The requested {} was not found.", entity)
            }
            Self::DuplicateId { .. } | Self::InvalidRecord { .. } => {
                "Some content could not be loaded.".to_string()
            }
            Self::InvalidConfiguration { setting, .. } => {
                format!("The setting '{}' is invalid, so the default is used.", setting)
            }
            Self::Io { path, .. } => format!("Could not read or write {}.", path.display()),
            Self::SerializationError { .. } => "Could not export the catalog.".to_string(),
        }
    }

    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Fatal
    }

    /// True if a caller may quietly fall back to a default
    pub fn has_safe_default(&self) -> bool {
        self.recovery_action() == RecoveryAction::UseDefault
    }

    pub fn not_found(entity: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::RecordNotFound {
            entity: entity.into(),
            identifier: identifier.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn serialization<E: std::error::Error + Send + Sync + 'static>(
        message: impl Into<String>,
        source: E,
    ) -> Self {
        Self::SerializationError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_recovery_action_display() {
        assert_eq!(RecoveryAction::UseDefault.to_string(), "falling back to defaults");
        assert_eq!(RecoveryAction::UserIntervention.to_string(), "needs attention");
    }

    #[test]
    fn test_error_severity_ordering() {
        assert!(ErrorSeverity::Recoverable < ErrorSeverity::Degraded);
        assert!(ErrorSeverity::Degraded < ErrorSeverity::Fatal);
    }

    #[test]
    fn test_not_found_is_recoverable() {
        let err = AppError::not_found("video", "v999");
        assert_eq!(err.severity(), ErrorSeverity::Recoverable);
        assert!(err.has_safe_default());
        assert!(!err.is_critical());
        assert_eq!(err.to_string(), "No video with id 'v999'");
        assert_eq!(err.user_message(), "The requested video was not found.");
    }

    #[test]
    fn test_duplicate_id_is_fatal() {
        let err = AppError::DuplicateId {
            entity: "book".to_string(),
            identifier: "b001".to_string(),
        };
        assert!(err.is_critical());
        assert_eq!(err.recovery_action(), RecoveryAction::UserIntervention);
        assert!(err.to_string().contains("b001"));
    }

    #[test]
    fn test_invalid_record_joins_reasons() {
        let err = AppError::InvalidRecord {
            entity: "event".to_string(),
            identifier: "e001".to_string(),
            reasons: vec!["Title cannot be empty".to_string(), "Bad times".to_string()],
        };
        assert!(err.to_string().contains("Title cannot be empty; Bad times"));
        assert_eq!(err.recovery_action(), RecoveryAction::SkipRecord);
        assert!(!err.user_message().contains("e001"));
    }

    #[test]
    fn test_invalid_configuration_uses_default() {
        let err = AppError::InvalidConfiguration {
            setting: "catalog.popular_limit".to_string(),
            value: "0".to_string(),
            reason: "must be at least 1".to_string(),
        };
        assert!(err.has_safe_default());
        assert!(err.user_message().contains("catalog.popular_limit"));
    }

    #[test]
    fn test_io_keeps_path_and_source() {
        let err = AppError::io(
            "/tmp/export.json",
            io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
        );
        assert!(err.to_string().contains("/tmp/export.json"));
        assert!(err.source().is_some());
        assert_eq!(err.severity(), ErrorSeverity::Degraded);
    }

    #[test]
    fn test_serialization_helper_keeps_source() {
        let inner = io::Error::new(io::ErrorKind::Other, "broken pipe");
        let err = AppError::serialization("export failed", inner);
        assert!(matches!(err, AppError::SerializationError { .. }));
        assert!(err.source().is_some());
    }
}
