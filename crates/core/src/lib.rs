//! Core domain model for the Jaigurudev content catalog
//!
//! Record types for videos, music, books and events, the traits the catalog
//! queries through, and the shared error taxonomy.

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{AppError, ErrorSeverity, RecoveryAction, Result};
pub use types::{
    eq_ignore_case, fold_case, Book, Content, ContentId, ContentStats, ContentType, Duration,
    Event, Music, ParseContentTypeError, Rated, Timestamp, Validator, Video,
};
