//! Time values and record validation shared by all record types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Milliseconds since the Unix epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    /// A clock set before 1970 reads as the epoch
    pub fn now() -> Self {
        Self(
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_else(|_| std::time::Duration::from_secs(0))
                .as_millis() as i64,
        )
    }

    pub fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub fn as_millis(&self) -> i64 {
        self.0
    }

    /// Returns a timestamp shifted forward by `offset`, saturating at the bounds
    pub fn plus(&self, offset: Duration) -> Self {
        let millis = i64::try_from(offset.as_millis()).unwrap_or(i64::MAX);
        Self(self.0.saturating_add(millis))
    }

    /// Returns the non-negative distance from `earlier` to `self`
    pub fn since(&self, earlier: Timestamp) -> Duration {
        Duration::from_millis(self.0.saturating_sub(earlier.0).max(0) as u64)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A span of time, stored in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Duration(u64);

impl Duration {
    pub const ZERO: Self = Self(0);

    pub fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    pub fn from_seconds(seconds: u64) -> Self {
        Self(seconds * 1000)
    }

    pub fn from_hours(hours: u64) -> Self {
        Self::from_seconds(hours * 3600)
    }

    pub fn from_days(days: u64) -> Self {
        Self::from_hours(days * 24)
    }

    /// Parses a clock-style display duration such as `"1:45:30"` or `"30:00"`
    ///
    /// Returns `None` for anything that is not two or three colon-separated
    /// numeric parts, e.g. `"LIVE"`. Minutes and seconds after the first
    /// part must be below 60.
    pub fn parse_clock(display: &str) -> Option<Self> {
        let parts: Vec<&str> = display.trim().split(':').collect();
        if !(2..=3).contains(&parts.len()) {
            return None;
        }

        let mut numbers = Vec::with_capacity(parts.len());
        for part in &parts {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            numbers.push(part.parse::<u64>().ok()?);
        }

        if numbers[1..].iter().any(|&n| n >= 60) {
            return None;
        }

        let seconds = numbers
            .iter()
            .try_fold(0u64, |acc, &n| acc.checked_mul(60)?.checked_add(n))?;
        Some(Self(seconds.checked_mul(1000)?))
    }

    pub fn as_millis(&self) -> u64 {
        self.0
    }

    pub fn as_seconds(&self) -> u64 {
        self.0 / 1000
    }

    /// `H:MM:SS`, hours always shown
    pub fn as_hms(&self) -> String {
        let secs = self.as_seconds();
        format!("{}:{:02}:{:02}", secs / 3600, secs / 60 % 60, secs % 60)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_hms())
    }
}

impl std::ops::Add for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Duration {
        Duration(self.0.saturating_add(rhs.0))
    }
}

impl std::iter::Sum for Duration {
    fn sum<I: Iterator<Item = Duration>>(iter: I) -> Self {
        iter.fold(Duration::ZERO, |acc, d| acc + d)
    }
}

/// Self-check run on every record before it enters the catalog
pub trait Validator {
    /// Every problem found, as human-readable reasons
    fn validate(&self) -> Result<(), Vec<String>>;

    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Pushes the checks shared by every catalog record
pub(crate) fn validate_common(
    errors: &mut Vec<String>,
    id: &str,
    title: &str,
    rating: Option<f32>,
) {
    if id.trim().is_empty() {
        errors.push("Id cannot be empty".to_string());
    }

    if title.trim().is_empty() {
        errors.push("Title cannot be empty".to_string());
    }

    if let Some(rating) = rating {
        if !(0.0..=5.0).contains(&rating) {
            errors.push(format!("Rating must be between 0 and 5 (got {})", rating));
        }
    }
}
