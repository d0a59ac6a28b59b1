//! Event-only queries and time windows

use crate::shelf::Shelf;
use jaigurudev_config::CatalogConfig;
use jaigurudev_core::{Duration, Event, Timestamp};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The time filters offered on the events screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeWindow {
    /// Every event, regardless of start time
    #[default]
    Upcoming,
    /// Events starting within `event_week_days`
    #[serde(rename = "week")]
    ThisWeek,
    /// Events starting within `event_month_days`
    #[serde(rename = "month")]
    ThisMonth,
}

impl TimeWindow {
    /// Latest start time admitted by this window, or `None` for no limit
    pub fn cutoff(&self, now: Timestamp, config: &CatalogConfig) -> Option<Timestamp> {
        let days = match self {
            TimeWindow::Upcoming => return None,
            TimeWindow::ThisWeek => config.event_week_days,
            TimeWindow::ThisMonth => config.event_month_days,
        };
        Some(now.plus(Duration::from_days(u64::from(days))))
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeWindow::Upcoming => "Upcoming",
            TimeWindow::ThisWeek => "This Week",
            TimeWindow::ThisMonth => "This Month",
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upcoming" | "all" => Ok(TimeWindow::Upcoming),
            "week" | "this week" | "this-week" => Ok(TimeWindow::ThisWeek),
            "month" | "this month" | "this-month" => Ok(TimeWindow::ThisMonth),
            other => Err(format!(
                "unknown time window '{}', expected upcoming, week or month",
                other
            )),
        }
    }
}

impl Shelf<Event> {
    /// Events that have not started yet, soonest first
    pub fn upcoming(&self, now: Timestamp) -> Vec<&Event> {
        let mut events: Vec<&Event> = self.iter().filter(|e| e.is_upcoming(now)).collect();
        events.sort_by_key(|e| e.start_time);
        events
    }

    /// Events admitted by `window`, soonest first
    pub fn within(&self, now: Timestamp, window: TimeWindow, config: &CatalogConfig) -> Vec<&Event> {
        let cutoff = window.cutoff(now, config);
        let mut events: Vec<&Event> = self
            .iter()
            .filter(|e| cutoff.is_none_or(|limit| e.start_time <= limit))
            .collect();
        events.sort_by_key(|e| e.start_time);
        events
    }

    pub fn online(&self) -> Vec<&Event> {
        self.iter().filter(|e| e.is_online).collect()
    }

    pub fn in_person(&self) -> Vec<&Event> {
        self.iter().filter(|e| !e.is_online).collect()
    }

    /// Events that still accept attendees (uncapped events always do)
    pub fn with_open_spots(&self) -> Vec<&Event> {
        self.iter().filter(|e| !e.is_full()).collect()
    }
}
