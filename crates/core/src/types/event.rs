//! Event domain model

use crate::types::common::validate_common;
use crate::types::{Content, ContentId, ContentType, Duration, Timestamp, Validator};
use serde::{Deserialize, Serialize};

/// A satsang, workshop or festival, either in person or online
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: ContentId,
    pub title: String,
    pub description: String,
    pub location: String,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub organizer: String,
    pub category: String,
    pub is_online: bool,
    pub registration_required: bool,
    /// `None` means attendance is not capped
    pub max_attendees: Option<u32>,
    pub current_attendees: u32,
    pub price: String,
    pub image_url: String,
    pub contact_info: String,
    pub requirements: Vec<String>,
}

impl Event {
    /// Creates a free, uncapped event
    pub fn new(
        id: impl Into<ContentId>,
        title: impl Into<String>,
        category: impl Into<String>,
        start_time: Timestamp,
        end_time: Timestamp,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            location: String::new(),
            start_time,
            end_time,
            organizer: String::new(),
            category: category.into(),
            is_online: false,
            registration_required: false,
            max_attendees: None,
            current_attendees: 0,
            price: "Free".to_string(),
            image_url: String::new(),
            contact_info: String::new(),
            requirements: Vec::new(),
        }
    }

    pub fn duration(&self) -> Duration {
        self.end_time.since(self.start_time)
    }

    /// Remaining places, or `None` when attendance is uncapped
    pub fn spots_left(&self) -> Option<u32> {
        self.max_attendees
            .map(|max| max.saturating_sub(self.current_attendees))
    }

    pub fn is_full(&self) -> bool {
        self.spots_left() == Some(0)
    }

    pub fn is_free(&self) -> bool {
        self.price.trim().eq_ignore_ascii_case("free")
    }

    /// An event starting exactly at `now` is still upcoming
    pub fn has_started(&self, now: Timestamp) -> bool {
        self.start_time < now
    }

    pub fn is_upcoming(&self, now: Timestamp) -> bool {
        !self.has_started(now)
    }

    /// True while `now` falls after the start and before the end
    pub fn is_in_progress(&self, now: Timestamp) -> bool {
        self.has_started(now) && now < self.end_time
    }
}

impl Content for Event {
    const CONTENT_TYPE: ContentType = ContentType::Event;

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

impl Validator for Event {
    fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        validate_common(&mut errors, self.id.as_str(), &self.title, None);

        if self.end_time < self.start_time {
            errors.push("End time must not be before start time".to_string());
        }

        if let Some(max) = self.max_attendees {
            if self.current_attendees > max {
                errors.push(format!(
                    "Current attendees ({}) exceed the maximum ({})",
                    self.current_attendees, max
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
