//! Book domain model

use crate::types::common::validate_common;
use crate::types::{Content, ContentId, ContentType, Rated, Validator};
use serde::{Deserialize, Serialize};

/// A scripture, commentary or practice guide available as a PDF
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: ContentId,
    pub title: String,
    pub author: String,
    pub description: String,
    pub category: String,
    pub pages: u32,
    pub rating: f32,
    pub cover_image_url: String,
    pub pdf_url: String,
    pub language: String,
    pub publish_year: u16,
    pub publisher: String,
    pub isbn: String,
    pub read_time: String,
    pub chapters: Vec<String>,
    pub is_downloaded: bool,
    /// Seed flag shipped with the record; runtime favorites live in the catalog
    pub is_favorite: bool,
    pub tags: Vec<String>,
}

impl Book {
    /// Creates a book with the required fields
    pub fn new(
        id: impl Into<ContentId>,
        title: impl Into<String>,
        author: impl Into<String>,
        category: impl Into<String>,
        pages: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            description: String::new(),
            category: category.into(),
            pages,
            rating: 4.5,
            cover_image_url: String::new(),
            pdf_url: String::new(),
            language: "Hindi".to_string(),
            publish_year: 2024,
            publisher: String::new(),
            isbn: String::new(),
            read_time: String::new(),
            chapters: Vec::new(),
            is_downloaded: false,
            is_favorite: false,
            tags: Vec::new(),
        }
    }

    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    /// Returns the title of the chapter at a 1-based position
    pub fn chapter(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|index| self.chapters.get(index))
            .map(String::as_str)
    }
}

impl Content for Book {
    const CONTENT_TYPE: ContentType = ContentType::Book;

    fn id(&self) -> &ContentId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn category(&self) -> &str {
        &self.category
    }
}

impl Rated for Book {
    fn secondary(&self) -> &str {
        &self.author
    }

    fn language(&self) -> &str {
        &self.language
    }

    fn rating(&self) -> f32 {
        self.rating
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Books are ranked by rating alone
    fn popularity_score(&self) -> f64 {
        f64::from(self.rating)
    }
}

impl Validator for Book {
    fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        validate_common(&mut errors, self.id.as_str(), &self.title, Some(self.rating));

        if self.pages == 0 {
            errors.push("Page count must be greater than zero".to_string());
        }

        if self.chapters.iter().any(|c| c.trim().is_empty()) {
            errors.push("Chapter titles cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yoga_sutras() -> Book {
        let mut book = Book::new("b006", "Yoga Sutras of Patanjali", "Maharshi Patanjali", "Philosophy", 420);
        book.chapters = vec![
            "Samadhi Pada".to_string(),
            "Sadhana Pada".to_string(),
            "Vibhuti Pada".to_string(),
            "Kaivalya Pada".to_string(),
        ];
        book.rating = 4.8;
        book
    }

    #[test]
    fn test_book_new() {
        let book = yoga_sutras();
        assert_eq!(book.pages, 420);
        assert!(!book.is_favorite);
        assert!(book.is_valid());
    }

    #[test]
    fn test_book_chapters_are_one_based() {
        let book = yoga_sutras();
        assert_eq!(book.chapter_count(), 4);
        assert_eq!(book.chapter(1), Some("Samadhi Pada"));
        assert_eq!(book.chapter(4), Some("Kaivalya Pada"));
        assert_eq!(book.chapter(0), None);
        assert_eq!(book.chapter(5), None);
    }

    #[test]
    fn test_book_popularity_is_rating() {
        let book = yoga_sutras();
        assert_eq!(book.popularity_score(), f64::from(4.8f32));
    }

    #[test]
    fn test_book_validation_zero_pages() {
        let mut book = yoga_sutras();
        book.pages = 0;
        assert!(!book.is_valid());
    }

    #[test]
    fn test_book_validation_blank_chapter() {
        let mut book = yoga_sutras();
        book.chapters.push("   ".to_string());
        assert!(!book.is_valid());
    }
}
