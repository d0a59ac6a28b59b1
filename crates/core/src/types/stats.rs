//! Catalog statistics

use serde::{Deserialize, Serialize};

/// Counts across the whole catalog, including runtime favorites
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentStats {
    pub total_videos: usize,
    pub total_music: usize,
    pub total_books: usize,
    pub total_events: usize,
    pub live_videos: usize,
    pub favorite_videos: usize,
    pub favorite_music: usize,
    pub favorite_books: usize,
    pub favorite_events: usize,
}

impl ContentStats {
    /// Creates empty statistics
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of records across all four collections
    pub fn total_items(&self) -> usize {
        self.total_videos + self.total_music + self.total_books + self.total_events
    }

    /// Number of favorites across all four collections
    pub fn total_favorites(&self) -> usize {
        self.favorite_videos + self.favorite_music + self.favorite_books + self.favorite_events
    }

    /// Returns the percentage of records marked as favorite
    pub fn favorite_percentage(&self) -> f64 {
        let total = self.total_items();
        if total == 0 {
            return 0.0;
        }
        (self.total_favorites() as f64 / total as f64) * 100.0
    }

    pub fn is_empty(&self) -> bool {
        self.total_items() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stats() {
        let stats = ContentStats::empty();
        assert!(stats.is_empty());
        assert_eq!(stats.favorite_percentage(), 0.0);
    }

    #[test]
    fn test_totals() {
        let stats = ContentStats {
            total_videos: 5,
            total_music: 5,
            total_books: 6,
            total_events: 4,
            live_videos: 1,
            favorite_videos: 2,
            favorite_books: 3,
            ..ContentStats::default()
        };
        assert_eq!(stats.total_items(), 20);
        assert_eq!(stats.total_favorites(), 5);
        assert!((stats.favorite_percentage() - 25.0).abs() < f64::EPSILON);
    }
}
