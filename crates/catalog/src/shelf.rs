//! An indexed, read-only collection of one content type
//!
//! A [`Shelf`] keeps its records in catalog order and an id index beside
//! them. Records are checked once on construction; after that every query
//! is infallible and returns borrowed records in a documented order.

use crate::error::{CatalogError, CatalogResult};
use crate::ranking::top_by;
use jaigurudev_core::{eq_ignore_case, fold_case, Content, ContentId, Rated, Validator};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Shelf<T> {
    items: Vec<T>,
    #[serde(skip)]
    index: HashMap<ContentId, usize>,
}

impl<T: Content + Validator> Shelf<T> {
    /// Builds a shelf, rejecting invalid records and duplicate ids
    pub fn new(items: Vec<T>) -> CatalogResult<Self> {
        let mut index = HashMap::with_capacity(items.len());

        for (position, item) in items.iter().enumerate() {
            if let Err(reasons) = item.validate() {
                return Err(CatalogError::InvalidRecord {
                    content_type: T::CONTENT_TYPE,
                    id: item.id().clone(),
                    reasons,
                });
            }

            if index.insert(item.id().clone(), position).is_some() {
                return Err(CatalogError::DuplicateId {
                    content_type: T::CONTENT_TYPE,
                    id: item.id().clone(),
                });
            }
        }

        log::debug!("Loaded {} {} records", items.len(), T::CONTENT_TYPE);
        Ok(Self { items, index })
    }
}

impl<T: Content> Shelf<T> {
    /// Every record in catalog order
    pub fn all(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).and_then(|&position| self.items.get(position))
    }

    /// Like [`Shelf::get`], but a miss is a [`CatalogError::NotFound`]
    pub fn require(&self, id: &str) -> CatalogResult<&T> {
        self.get(id)
            .ok_or_else(|| CatalogError::not_found(T::CONTENT_TYPE, id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Records whose category equals `category` exactly (case-sensitive)
    pub fn by_category(&self, category: &str) -> Vec<&T> {
        self.items
            .iter()
            .filter(|item| item.category() == category)
            .collect()
    }

    /// Distinct categories, sorted
    pub fn categories(&self) -> Vec<&str> {
        self.items
            .iter()
            .map(|item| item.category())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// The first `limit` records in catalog order
    ///
    /// Records carry no publish date, so "recent" is the head of the list.
    pub fn recent(&self, limit: usize) -> Vec<&T> {
        self.items.iter().take(limit).collect()
    }
}

impl<T: Rated> Shelf<T> {
    /// Case-insensitive substring search over title, secondary field and tags
    ///
    /// An empty query matches every record.
    pub fn search(&self, query: &str) -> Vec<&T> {
        let needle = fold_case(query);
        self.items
            .iter()
            .filter(|item| item.matches_lowercase(&needle))
            .collect()
    }

    /// Records whose language equals `language`, ignoring case
    pub fn by_language(&self, language: &str) -> Vec<&T> {
        self.items
            .iter()
            .filter(|item| eq_ignore_case(item.language(), language))
            .collect()
    }

    /// Distinct languages, sorted
    pub fn languages(&self) -> Vec<&str> {
        self.items
            .iter()
            .map(|item| item.language())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Highest [`Rated::popularity_score`] first
    pub fn popular(&self, limit: usize) -> Vec<&T> {
        top_by(&self.items, limit, |item| item.popularity_score())
    }

    /// Records related to `base_id`, best rated first
    ///
    /// Related means same category or at least one identical tag. The seed
    /// itself is never returned. An unknown seed falls back to
    /// [`Shelf::popular`].
    pub fn recommended(&self, base_id: &str, limit: usize) -> Vec<&T> {
        let Some(seed) = self.get(base_id) else {
            log::warn!(
                "No {} with id '{}' to recommend from, falling back to popular",
                T::CONTENT_TYPE,
                base_id
            );
            return self.popular(limit);
        };

        let related = self.items.iter().filter(|item| {
            item.id() != seed.id()
                && (item.category() == seed.category() || item.shares_tag_with(seed))
        });

        top_by(related, limit, |item| f64::from(item.rating()))
    }
}

impl<'a, T> IntoIterator for &'a Shelf<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
