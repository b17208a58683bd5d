//! Event data model
//!
//! Raw date-range items as supplied by the element that owns the child
//! nodes, and the validated `Event`s the builder derives from them.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Milliseconds in one calendar day (24h * 60m * 60s * 1000ms)
pub const ONE_DAY_MS: i64 = 86_400_000;

/// One day as a chrono duration
pub fn one_day() -> Duration {
    Duration::milliseconds(ONE_DAY_MS)
}

/// Opaque handle to the child element an item came from.
///
/// The calendar never interprets it; JavaScript keeps the mapping from
/// id to DOM node (usually the child's index or a slot number).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct EventId(pub u32);

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A child item exactly as read from its `start-date` / `end-date` attributes
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawEventItem {
    /// Identity of the owning element
    pub id: EventId,

    /// Raw `start-date` attribute (None when the attribute is missing)
    #[serde(default)]
    pub start_date: Option<String>,

    /// Raw `end-date` attribute (None when the attribute is missing)
    #[serde(default)]
    pub end_date: Option<String>,
}

impl RawEventItem {
    pub fn new(id: u32, start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            id: EventId(id),
            start_date: Some(start_date.into()),
            end_date: Some(end_date.into()),
        }
    }
}

/// A validated event, never crossing a week boundary
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,

    /// Inclusive start instant
    pub start: NaiveDateTime,

    /// Exclusive end instant (`end > start`)
    pub end: NaiveDateTime,

    /// True when the event lasts longer than one day
    pub multiday: bool,

    /// `ceil((end - start) / ONE_DAY)`, at least 1
    pub duration_days: u32,
}

impl Event {
    /// Build an event from an already validated interval
    pub fn new(id: EventId, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        let duration = end - start;
        let millis = duration.num_milliseconds();
        let days = (millis + ONE_DAY_MS - 1).div_euclid(ONE_DAY_MS).max(1);

        Self {
            id,
            start,
            end,
            multiday: duration > one_day(),
            duration_days: days as u32,
        }
    }

    /// Length of the half-open interval
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// True when the two half-open intervals do not share any instant
    pub fn is_disjoint(&self, other: &Event) -> bool {
        self.end <= other.start || other.end <= self.start
    }
}
