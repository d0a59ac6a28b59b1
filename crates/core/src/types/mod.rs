//! Domain types for the Jaigurudev catalog
//!
//! - `content`: ids, content kinds and the `Content`/`Rated` traits
//! - `video`, `music`, `book`, `event`: the four record types
//! - `stats`: catalog statistics
//! - `common`: timestamps, durations and validation

mod book;
mod common;
mod content;
mod event;
mod music;
mod stats;
mod video;

pub use book::Book;
pub use common::{Duration, Timestamp, Validator};
pub use content::{
    eq_ignore_case, fold_case, Content, ContentId, ContentType, ParseContentTypeError, Rated,
};
pub use event::Event;
pub use music::Music;
pub use stats::ContentStats;
pub use video::Video;
