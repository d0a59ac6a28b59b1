//! Catalog error types

use jaigurudev_core::{AppError, ContentId, ContentType};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("{content_type} '{id}' not found")]
    NotFound {
        content_type: ContentType,
        id: ContentId,
    },

    #[error("Duplicate {content_type} id '{id}'")]
    DuplicateId {
        content_type: ContentType,
        id: ContentId,
    },

    #[error("Invalid {content_type} '{id}': {}", .reasons.join("; "))]
    InvalidRecord {
        content_type: ContentType,
        id: ContentId,
        reasons: Vec<String>,
    },

    /// The `[catalog]` settings are out of range
    #[error("Invalid catalog settings: {}", .reasons.join("; "))]
    InvalidConfig { reasons: Vec<String> },
}

impl CatalogError {
    pub fn not_found(content_type: ContentType, id: impl Into<ContentId>) -> Self {
        Self::NotFound {
            content_type,
            id: id.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound { content_type, id } => {
                AppError::not_found(content_type.as_str(), id.as_str())
            }
            CatalogError::DuplicateId { content_type, id } => AppError::DuplicateId {
                entity: content_type.to_string(),
                identifier: id.to_string(),
            },
            CatalogError::InvalidRecord {
                content_type,
                id,
                reasons,
            } => AppError::InvalidRecord {
                entity: content_type.to_string(),
                identifier: id.to_string(),
                reasons,
            },
            CatalogError::InvalidConfig { reasons } => AppError::InvalidConfiguration {
                setting: "catalog".to_string(),
                value: String::new(),
                reason: reasons.join("; "),
            },
        }
    }
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
