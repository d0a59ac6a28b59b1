//! The content catalog
//!
//! [`ContentCatalog`] owns the four shelves, the favorites sets and the
//! query defaults. It is built once, explicitly, and shared by reference;
//! nothing in this crate keeps a global instance.

use crate::error::{CatalogError, CatalogResult};
use crate::events::TimeWindow;
use crate::favorites::Favorites;
use crate::search::{SearchRequest, SearchResults};
use crate::shelf::Shelf;
use jaigurudev_config::{CatalogConfig, ConfigSection};
use jaigurudev_core::{
    Book, Content, ContentId, ContentStats, ContentType, Event, Music, Timestamp, Video,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw records for building a catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogData {
    pub videos: Vec<Video>,
    pub music: Vec<Music>,
    pub books: Vec<Book>,
    pub events: Vec<Event>,
}

/// Serializable view of the whole catalog, favorites included
#[derive(Debug, Serialize)]
pub struct CatalogSnapshot<'a> {
    pub videos: &'a Shelf<Video>,
    pub music: &'a Shelf<Music>,
    pub books: &'a Shelf<Book>,
    pub events: &'a Shelf<Event>,
    /// Favorite ids per type, sorted
    pub favorites: BTreeMap<ContentType, Vec<ContentId>>,
    pub stats: ContentStats,
}

#[derive(Debug)]
pub struct ContentCatalog {
    videos: Shelf<Video>,
    music: Shelf<Music>,
    books: Shelf<Book>,
    events: Shelf<Event>,
    favorites: Favorites,
    config: CatalogConfig,
}

impl ContentCatalog {
    /// Builds a catalog from raw records
    ///
    /// Fails on out-of-range settings, then on the first invalid record or
    /// duplicate id. Books shipped with `is_favorite` set start out in the
    /// favorites.
    pub fn new(data: CatalogData, config: CatalogConfig) -> CatalogResult<Self> {
        config.validate().map_err(|errors| CatalogError::InvalidConfig {
            reasons: errors.iter().map(ToString::to_string).collect(),
        })?;

        let catalog = Self {
            videos: Shelf::new(data.videos)?,
            music: Shelf::new(data.music)?,
            books: Shelf::new(data.books)?,
            events: Shelf::new(data.events)?,
            favorites: Favorites::new(),
            config,
        };

        for book in catalog.books.iter().filter(|b| b.is_favorite) {
            catalog
                .favorites
                .insert(ContentType::Book, book.id.clone());
        }

        log::info!(
            "Catalog ready: {} videos, {} music, {} books, {} events",
            catalog.videos.len(),
            catalog.music.len(),
            catalog.books.len(),
            catalog.events.len()
        );
        Ok(catalog)
    }

    /// The shipped sample catalog with default settings, events relative to now
    pub fn sample() -> CatalogResult<Self> {
        crate::sample::sample_catalog(Timestamp::now())
    }

    pub fn videos(&self) -> &Shelf<Video> {
        &self.videos
    }

    pub fn music(&self) -> &Shelf<Music> {
        &self.music
    }

    pub fn books(&self) -> &Shelf<Book> {
        &self.books
    }

    pub fn events(&self) -> &Shelf<Event> {
        &self.events
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// True if a record of `content_type` with this id exists
    pub fn is_valid_id(&self, id: &str, content_type: ContentType) -> bool {
        match content_type {
            ContentType::Video => self.videos.contains(id),
            ContentType::Music => self.music.contains(id),
            ContentType::Book => self.books.contains(id),
            ContentType::Event => self.events.contains(id),
        }
    }

    fn require_id(&self, id: &str, content_type: ContentType) -> CatalogResult<()> {
        if self.is_valid_id(id, content_type) {
            Ok(())
        } else {
            Err(CatalogError::not_found(content_type, id))
        }
    }

    /// Marks a record as favorite
    ///
    /// Returns `Ok(false)` if it already was one.
    pub fn add_favorite(&self, id: &str, content_type: ContentType) -> CatalogResult<bool> {
        self.require_id(id, content_type)?;
        let added = self.favorites.insert(content_type, ContentId::new(id));
        log::debug!("Favorite {} '{}' added: {}", content_type, id, added);
        Ok(added)
    }

    /// Removes a favorite mark
    ///
    /// Returns `Ok(false)` if the record was not a favorite.
    pub fn remove_favorite(&self, id: &str, content_type: ContentType) -> CatalogResult<bool> {
        self.require_id(id, content_type)?;
        let removed = self.favorites.remove(content_type, id);
        log::debug!("Favorite {} '{}' removed: {}", content_type, id, removed);
        Ok(removed)
    }

    pub fn is_favorite(&self, id: &str, content_type: ContentType) -> bool {
        self.favorites.contains(content_type, id)
    }

    /// Favorite ids of one type in catalog order
    pub fn favorites(&self, content_type: ContentType) -> Vec<ContentId> {
        match content_type {
            ContentType::Video => ids_of(self.favorites_in(&self.videos)),
            ContentType::Music => ids_of(self.favorites_in(&self.music)),
            ContentType::Book => ids_of(self.favorites_in(&self.books)),
            ContentType::Event => ids_of(self.favorites_in(&self.events)),
        }
    }

    /// Removes every favorite of one type, returning how many were removed
    pub fn clear_favorites(&self, content_type: ContentType) -> usize {
        self.favorites.clear(content_type)
    }

    pub fn favorite_videos(&self) -> Vec<&Video> {
        self.favorites_in(&self.videos)
    }

    pub fn favorite_music(&self) -> Vec<&Music> {
        self.favorites_in(&self.music)
    }

    pub fn favorite_books(&self) -> Vec<&Book> {
        self.favorites_in(&self.books)
    }

    pub fn favorite_events(&self) -> Vec<&Event> {
        self.favorites_in(&self.events)
    }

    fn favorites_in<'a, T: Content>(&self, shelf: &'a Shelf<T>) -> Vec<&'a T> {
        let ids = self.favorites.ids(T::CONTENT_TYPE);
        if ids.is_empty() {
            return Vec::new();
        }
        shelf.iter().filter(|item| ids.contains(item.id())).collect()
    }

    /// Searches videos, music and books at once
    ///
    /// Events are not searchable, so `SearchScope::Only(ContentType::Event)`
    /// yields empty results.
    pub fn search_content(&self, request: &SearchRequest) -> SearchResults<'_> {
        let results = SearchResults {
            videos: request.run(&self.videos),
            music: request.run(&self.music),
            books: request.run(&self.books),
        };
        log::debug!(
            "Search '{}' ({:?}) matched {} records",
            request.query,
            request.scope,
            results.total()
        );
        results
    }

    /// Events admitted by `window`, using the configured window lengths
    pub fn events_within(&self, now: Timestamp, window: TimeWindow) -> Vec<&Event> {
        self.events.within(now, window, &self.config)
    }

    /// Caps a caller-supplied limit at the configured maximum
    pub fn clamp_limit(&self, limit: usize) -> usize {
        self.config.clamp_limit(limit)
    }

    pub fn stats(&self) -> ContentStats {
        ContentStats {
            total_videos: self.videos.len(),
            total_music: self.music.len(),
            total_books: self.books.len(),
            total_events: self.events.len(),
            live_videos: self.videos.live().len(),
            favorite_videos: self.favorites.count(ContentType::Video),
            favorite_music: self.favorites.count(ContentType::Music),
            favorite_books: self.favorites.count(ContentType::Book),
            favorite_events: self.favorites.count(ContentType::Event),
        }
    }

    pub fn snapshot(&self) -> CatalogSnapshot<'_> {
        let favorites = ContentType::ALL
            .into_iter()
            .map(|content_type| {
                let mut ids: Vec<ContentId> =
                    self.favorites.ids(content_type).into_iter().collect();
                ids.sort();
                (content_type, ids)
            })
            .collect();

        CatalogSnapshot {
            videos: &self.videos,
            music: &self.music,
            books: &self.books,
            events: &self.events,
            favorites,
            stats: self.stats(),
        }
    }
}

fn ids_of<T: Content>(items: Vec<&T>) -> Vec<ContentId> {
    items.into_iter().map(|item| item.id().clone()).collect()
}
