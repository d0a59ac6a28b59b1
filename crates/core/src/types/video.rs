//! Video domain model

use crate::types::common::validate_common;
use crate::types::{Content, ContentId, ContentType, Duration, Rated, Validator};
use serde::{Deserialize, Serialize};

/// A devotional video, satsang recording or live stream
///
/// `duration` and `views` are display strings exactly as shown in the UI
/// (`"1:45:30"`, `"125K"`); use [`Video::runtime`] and the catalog's view
/// parser for numeric values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: ContentId,
    pub title: String,
    pub description: String,
    pub creator: String,
    pub duration: String,
    pub views: String,
    pub upload_date: String,
    pub category: String,
    pub thumbnail_url: String,
    pub video_url: String,
    pub is_live: bool,
    pub language: String,
    pub quality: String,
    pub rating: f32,
    pub likes: u32,
    pub comments: u32,
    pub tags: Vec<String>,
}

impl Video {
    /// Creates a video with the required fields and the app's defaults
    /// (Hindi, HD, rating 4.5, no engagement yet)
    pub fn new(
        id: impl Into<ContentId>,
        title: impl Into<String>,
        creator: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            creator: creator.into(),
            duration: String::new(),
            views: "0".to_string(),
            upload_date: String::new(),
            category: category.into(),
            thumbnail_url: String::new(),
            video_url: String::new(),
            is_live: false,
            language: "Hindi".to_string(),
            quality: "HD".to_string(),
            rating: 4.5,
            likes: 0,
            comments: 0,
            tags: Vec::new(),
        }
    }

    /// Parsed running time; `None` for live streams and unparsable values
    pub fn runtime(&self) -> Option<Duration> {
        if self.is_live {
            return None;
        }
        Duration::parse_clock(&self.duration)
    }
}

impl Content for Video {
    const CONTENT_TYPE: ContentType = ContentType::Video;

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

impl Rated for Video {
    fn secondary(&self) -> &str {
        &self.creator
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

    /// rating × likes
    fn popularity_score(&self) -> f64 {
        f64::from(self.rating) * f64::from(self.likes)
    }
}

impl Validator for Video {
    fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        validate_common(&mut errors, self.id.as_str(), &self.title, Some(self.rating));

        if self.category.trim().is_empty() {
            errors.push("Category cannot be empty".to_string());
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

    fn sample() -> Video {
        let mut video = Video::new("v001", "Bhagavad Gita Chapter 1", "Gurudev Academy", "Satsang");
        video.duration = "1:45:30".to_string();
        video.rating = 4.9;
        video.likes = 5420;
        video.tags = vec!["Krishna".to_string(), "Dharma".to_string()];
        video
    }

    #[test]
    fn test_video_new_defaults() {
        let video = Video::new("v010", "Title", "Creator", "Satsang");
        assert_eq!(video.language, "Hindi");
        assert_eq!(video.quality, "HD");
        assert!(!video.is_live);
        assert!(video.is_valid());
    }

    #[test]
    fn test_video_runtime() {
        assert_eq!(sample().runtime().unwrap().as_seconds(), 6330);

        let mut live = sample();
        live.is_live = true;
        live.duration = "LIVE".to_string();
        assert!(live.runtime().is_none());
    }

    #[test]
    fn test_video_popularity_score() {
        let score = sample().popularity_score();
        assert!((score - 4.9f32 as f64 * 5420.0).abs() < 1e-6);
    }

    #[test]
    fn test_video_matches_secondary_and_tags() {
        let video = sample();
        assert!(video.matches_lowercase("gita"));
        assert!(video.matches_lowercase("academy"));
        assert!(video.matches_lowercase("dharm"));
        assert!(!video.matches_lowercase("ramayana"));
    }

    #[test]
    fn test_video_validation_rejects_bad_rating() {
        let mut video = sample();
        video.rating = 7.0;
        assert!(!video.is_valid());
    }

    #[test]
    fn test_video_validation_rejects_empty_category() {
        let mut video = sample();
        video.category = String::new();
        assert!(!video.is_valid());
    }
}
