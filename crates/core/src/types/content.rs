//! Identifiers, content kinds and the traits every catalog record implements

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Identifier of a catalog record (e.g. `"v001"`)
///
/// Ids are unique within one content type only; `v001` and `m001` live in
/// different collections.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(String);

impl ContentId {
    /// Creates an id from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ContentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for ContentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Lets id-keyed maps be queried with a plain `&str`
impl Borrow<str> for ContentId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ContentId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ContentId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// The four kinds of content held by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Video,
    Music,
    Book,
    Event,
}

impl ContentType {
    /// All content types in display order
    pub const ALL: [ContentType; 4] = [
        ContentType::Video,
        ContentType::Music,
        ContentType::Book,
        ContentType::Event,
    ];

    /// Singular lowercase name, used in messages and errors
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Video => "video",
            ContentType::Music => "music",
            ContentType::Book => "book",
            ContentType::Event => "event",
        }
    }

    /// Plural name for headings
    pub fn plural(&self) -> &'static str {
        match self {
            ContentType::Video => "videos",
            ContentType::Music => "music",
            ContentType::Book => "books",
            ContentType::Event => "events",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a content type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown content type '{0}' (expected video, music, book or event)")]
pub struct ParseContentTypeError(pub String);

impl FromStr for ContentType {
    type Err = ParseContentTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "video" | "videos" => Ok(ContentType::Video),
            "music" | "song" | "songs" | "track" | "tracks" => Ok(ContentType::Music),
            "book" | "books" => Ok(ContentType::Book),
            "event" | "events" => Ok(ContentType::Event),
            _ => Err(ParseContentTypeError(s.to_string())),
        }
    }
}

/// Behaviour shared by every catalog record
pub trait Content {
    /// The collection this record belongs to
    const CONTENT_TYPE: ContentType;

    fn id(&self) -> &ContentId;

    fn title(&self) -> &str;

    fn category(&self) -> &str;
}

/// Records that can be searched, rated and recommended
///
/// Lowercases `text` one character at a time
///
/// Unlike [`str::to_lowercase`], the result of each character does not depend
/// on its neighbours (a capital sigma always becomes `σ`), so a folded
/// substring stays a substring of the folded text.
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// `a` and `b` are equal once both are folded with [`fold_case`]
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a == b || fold_case(a) == fold_case(b)
}

/// Videos, music and books implement this; events do not carry ratings or
/// tags and only support the plain [`Content`] operations.
pub trait Rated: Content {
    /// Creator, artist or author
    fn secondary(&self) -> &str;

    fn language(&self) -> &str;

    fn rating(&self) -> f32;

    fn tags(&self) -> &[String];

    /// Type-specific popularity score used for "popular" listings
    fn popularity_score(&self) -> f64;

    /// Case-insensitive substring match against title, secondary field and tags
    ///
    /// `needle` must already be folded with [`fold_case`].
    fn matches_lowercase(&self, needle: &str) -> bool {
        fold_case(self.title()).contains(needle)
            || fold_case(self.secondary()).contains(needle)
            || self
                .tags()
                .iter()
                .any(|tag| fold_case(tag).contains(needle))
    }

    /// Returns true if any tag of `self` also appears on `other` (exact match)
    fn shares_tag_with(&self, other: &Self) -> bool
    where
        Self: Sized,
    {
        self.tags().iter().any(|tag| other.tags().contains(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_id_conversions() {
        let id = ContentId::new("v001");
        assert_eq!(id.as_str(), "v001");
        assert_eq!(id, "v001");
        assert_eq!(ContentId::from("v001"), id);
        assert_eq!(id.to_string(), "v001");
    }

    #[test]
    fn test_content_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&ContentId::new("b003")).unwrap();
        assert_eq!(json, "\"b003\"");
    }

    #[test]
    fn test_content_type_from_str() {
        assert_eq!("videos".parse::<ContentType>(), Ok(ContentType::Video));
        assert_eq!("Music".parse::<ContentType>(), Ok(ContentType::Music));
        assert_eq!(" BOOK ".parse::<ContentType>(), Ok(ContentType::Book));
        assert_eq!("events".parse::<ContentType>(), Ok(ContentType::Event));
        assert!("podcast".parse::<ContentType>().is_err());
    }

    #[test]
    fn test_content_type_display() {
        assert_eq!(ContentType::Video.to_string(), "video");
        assert_eq!(ContentType::Book.plural(), "books");
        assert_eq!(ContentType::ALL.len(), 4);
    }

    #[test]
    fn test_parse_error_message() {
        let err = "podcast".parse::<ContentType>().unwrap_err();
        assert!(err.to_string().contains("podcast"));
    }

    #[test]
    fn test_fold_case_is_position_independent() {
        // str::to_lowercase turns a word-final capital sigma into 'ς'
        assert_eq!(fold_case("ΟΔΟΣ"), "οδοσ");
        assert!(fold_case("ΟΔΟΣΑ").contains(&fold_case("ΟΔΟΣ")));
        assert_eq!(fold_case("Satsang"), "satsang");
    }

    #[test]
    fn test_eq_ignore_case() {
        assert!(eq_ignore_case("Satsang", "SATSANG"));
        assert!(eq_ignore_case("ΟΔΟΣ", "οδοσ"));
        assert!(!eq_ignore_case("Satsang", "Bhajan"));
    }
}
