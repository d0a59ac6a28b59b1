//! Cross-collection search requests and results

use crate::shelf::Shelf;
use jaigurudev_core::{eq_ignore_case, Book, ContentType, Music, Rated, Video};
use serde::Serialize;

/// Which collections a search covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchScope {
    #[default]
    All,
    Only(ContentType),
}

impl SearchScope {
    pub fn includes(&self, content_type: ContentType) -> bool {
        match self {
            SearchScope::All => true,
            SearchScope::Only(only) => *only == content_type,
        }
    }
}

/// A query plus optional filters
///
/// Category and language filters ignore case. Blank filters are treated as
/// absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub scope: SearchScope,
    pub category: Option<String>,
    pub language: Option<String>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn in_scope(mut self, scope: SearchScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = non_blank(category.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = non_blank(language.into());
        self
    }

    /// Runs the request against one shelf
    pub(crate) fn run<'a, T: Rated>(&self, shelf: &'a Shelf<T>) -> Vec<&'a T> {
        if !self.scope.includes(T::CONTENT_TYPE) {
            return Vec::new();
        }

        let category = self.category.as_deref().filter(|c| !c.trim().is_empty());
        let language = self.language.as_deref().filter(|l| !l.trim().is_empty());

        shelf
            .search(&self.query)
            .into_iter()
            .filter(|item| category.is_none_or(|c| eq_ignore_case(item.category(), c)))
            .filter(|item| language.is_none_or(|l| eq_ignore_case(item.language(), l)))
            .collect()
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Matches from each searchable collection, each in catalog order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchResults<'a> {
    pub videos: Vec<&'a Video>,
    pub music: Vec<&'a Music>,
    pub books: Vec<&'a Book>,
}

impl SearchResults<'_> {
    pub fn total(&self) -> usize {
        self.videos.len() + self.music.len() + self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
