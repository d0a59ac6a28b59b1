//! Jaigurudev content catalog
//!
//! An in-memory catalog of devotional videos, music, books and events with
//! search, filtering, ranking, simple recommendations and per-type
//! favorites.
//!
//! Records are validated once when the catalog is built. After that every
//! query is infallible: id lookups return `Option`, listings return plain
//! vectors of borrowed records, and only favorites mutation can fail (with
//! [`CatalogError::NotFound`]) when the id does not exist.
//!
//! # Example
//!
//! ```rust
//! use jaigurudev_catalog::{sample::sample_catalog, SearchRequest};
//! use jaigurudev_core::{ContentType, Timestamp};
//!
//! let catalog = sample_catalog(Timestamp::now()).expect("sample data is valid");
//!
//! let hits = catalog.videos().search("gita");
//! assert_eq!(hits[0].id, "v001");
//!
//! catalog.add_favorite("m003", ContentType::Music).expect("known id");
//! assert_eq!(catalog.favorite_music().len(), 1);
//!
//! let results = catalog.search_content(&SearchRequest::new("krishna"));
//! assert_eq!(results.total(), 3);
//! ```

pub mod catalog;
pub mod error;
pub mod events;
pub mod favorites;
mod ranking;
pub mod sample;
pub mod search;
pub mod shelf;
pub mod videos;
pub mod views;

pub use catalog::{CatalogData, CatalogSnapshot, ContentCatalog};
pub use error::{CatalogError, CatalogResult};
pub use events::TimeWindow;
pub use favorites::Favorites;
pub use search::{SearchRequest, SearchResults, SearchScope};
pub use shelf::Shelf;
pub use videos::trending_score;
pub use views::parse_view_count;
