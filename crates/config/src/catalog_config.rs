//! Catalog query configuration section
//!
//! Holds the default result sizes for ranked queries and the lengths of
//! the event time windows.

use crate::validation::{ConfigSection, ValidationError, Validator};
use serde::{Deserialize, Serialize};

/// Upper bound accepted for `max_limit`
pub const MAX_LIMIT_CEILING: usize = 1000;

/// Catalog query settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Default size of popular lists
    pub popular_limit: usize,

    /// Default size of recent lists
    pub recent_limit: usize,

    /// Default size of the trending video list
    pub trending_limit: usize,

    /// Default size of recommendation lists
    pub recommended_limit: usize,

    /// Largest limit any query will honour
    pub max_limit: usize,

    /// Length of the "this week" event window
    pub event_week_days: u32,

    /// Length of the "this month" event window
    pub event_month_days: u32,
}

impl CatalogConfig {
    /// Caps a caller-supplied limit at `max_limit`
    pub fn clamp_limit(&self, requested: usize) -> usize {
        requested.min(self.max_limit)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            popular_limit: 10,
            recent_limit: 5,
            trending_limit: 10,
            recommended_limit: 5,
            max_limit: 100,
            event_week_days: 7,
            event_month_days: 30,
        }
    }
}

impl ConfigSection for CatalogConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let max = self.max_limit.max(1);

        let results = vec![
            Validator::in_range(self.max_limit, 1, MAX_LIMIT_CEILING, "catalog.max_limit"),
            Validator::in_range(self.popular_limit, 1, max, "catalog.popular_limit"),
            Validator::in_range(self.recent_limit, 1, max, "catalog.recent_limit"),
            Validator::in_range(self.trending_limit, 1, max, "catalog.trending_limit"),
            Validator::in_range(self.recommended_limit, 1, max, "catalog.recommended_limit"),
            Validator::in_range(self.event_week_days, 1, 366, "catalog.event_week_days"),
            Validator::in_range(
                self.event_month_days,
                self.event_week_days.max(1),
                366,
                "catalog.event_month_days",
            ),
        ];

        Validator::collect_errors(results)
    }

    fn merge(&mut self, other: Self) {
        self.popular_limit = other.popular_limit;
        self.recent_limit = other.recent_limit;
        self.trending_limit = other.trending_limit;
        self.recommended_limit = other.recommended_limit;
        self.max_limit = other.max_limit;
        self.event_week_days = other.event_week_days;
        self.event_month_days = other.event_month_days;
    }

    fn section_name(&self) -> &'static str {
        "catalog"
    }
}
