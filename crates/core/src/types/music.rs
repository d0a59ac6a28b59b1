//! Music track domain model

use crate::types::common::validate_common;
use crate::types::{Content, ContentId, ContentType, Duration, Rated, Validator};
use serde::{Deserialize, Serialize};

/// A mantra, bhajan or aarti recording
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Music {
    pub id: ContentId,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub duration: String,
    pub category: String,
    pub audio_url: String,
    pub thumbnail_url: String,
    pub is_downloaded: bool,
    pub language: String,
    pub lyrics: String,
    pub rating: f32,
    pub play_count: u32,
    pub release_year: u16,
    pub tags: Vec<String>,
}

impl Music {
    /// Creates a track with the required fields; language defaults to Sanskrit
    pub fn new(
        id: impl Into<ContentId>,
        title: impl Into<String>,
        artist: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            album: String::new(),
            duration: String::new(),
            category: category.into(),
            audio_url: String::new(),
            thumbnail_url: String::new(),
            is_downloaded: false,
            language: "Sanskrit".to_string(),
            lyrics: String::new(),
            rating: 4.5,
            play_count: 0,
            release_year: 2024,
            tags: Vec::new(),
        }
    }

    /// Parsed track length
    pub fn runtime(&self) -> Option<Duration> {
        Duration::parse_clock(&self.duration)
    }

    pub fn has_lyrics(&self) -> bool {
        !self.lyrics.trim().is_empty()
    }
}

impl Content for Music {
    const CONTENT_TYPE: ContentType = ContentType::Music;

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

impl Rated for Music {
    fn secondary(&self) -> &str {
        &self.artist
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

    /// rating × play count
    fn popularity_score(&self) -> f64 {
        f64::from(self.rating) * f64::from(self.play_count)
    }
}

impl Validator for Music {
    fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        validate_common(&mut errors, self.id.as_str(), &self.title, Some(self.rating));

        if self.artist.trim().is_empty() {
            errors.push("Artist cannot be empty".to_string());
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

    #[test]
    fn test_music_new_defaults() {
        let track = Music::new("m001", "Om Namah Shivaya", "Divine Chants", "Mantras");
        assert_eq!(track.language, "Sanskrit");
        assert_eq!(track.release_year, 2024);
        assert!(!track.has_lyrics());
        assert!(track.is_valid());
    }

    #[test]
    fn test_music_popularity_uses_play_count() {
        let mut a = Music::new("m001", "A", "X", "Mantras");
        a.rating = 4.9;
        a.play_count = 67890;
        let mut b = Music::new("m002", "B", "Y", "Mantras");
        b.rating = 4.8;
        b.play_count = 54321;
        assert!(a.popularity_score() > b.popularity_score());
    }

    #[test]
    fn test_music_search_ignores_album() {
        let mut track = Music::new("m003", "Krishna Bhajan Medley", "Devotional Singers", "Devotional");
        track.album = "Krishna Love Songs".to_string();
        assert!(track.matches_lowercase("singers"));
        assert!(!track.matches_lowercase("love songs"));
    }

    #[test]
    fn test_music_validation_requires_artist() {
        let track = Music::new("m009", "Untitled", "  ", "Mantras");
        assert!(!track.is_valid());
    }

    #[test]
    fn test_music_runtime() {
        let mut track = Music::new("m002", "Gayatri Mantra", "Sanskrit Scholars", "Mantras");
        track.duration = "8:15".to_string();
        assert_eq!(track.runtime().unwrap().as_seconds(), 495);
    }
}
