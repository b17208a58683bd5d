//! Event building and validation
//!
//! Every raw item is validated on its own. A bad item never aborts the
//! batch: it is returned as a `RejectedItem` and left out of placement.

use chrono::{Duration, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::ordering::compare_events;
use crate::error::ItemError;
use crate::models::{day_of_week, Event, EventId, RawEventItem, DAYS_PER_WEEK};
use crate::parse::parse_instant;

/// What to do with an item whose range reaches into the next week
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WeekBoundaryPolicy {
    /// Exclude the item and report `WeekBoundaryViolation`
    #[default]
    Reject,
}

/// An item excluded from placement, with the reason
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RejectedItem {
    pub id: EventId,
    pub kind: String,
    pub message: String,
}

impl From<&ItemError> for RejectedItem {
    fn from(err: &ItemError) -> Self {
        Self {
            id: err.id(),
            kind: err.kind().to_string(),
            message: err.to_string(),
        }
    }
}

/// Result of one build pass
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct BuildOutput {
    /// Valid events in placement priority order
    pub events: Vec<Event>,

    /// Items that failed validation
    pub rejected: Vec<RejectedItem>,
}

/// Sunday 00:00 that closes the week containing `start`
pub fn week_end(start: NaiveDateTime) -> NaiveDateTime {
    let date = start.date();
    let days_left = (DAYS_PER_WEEK - day_of_week(date)) as i64;
    (date + Duration::days(days_left)).and_time(NaiveTime::MIN)
}

/// Validate raw items and sort the survivors into placement order
pub fn build_events(raw_items: &[RawEventItem], policy: WeekBoundaryPolicy) -> BuildOutput {
    let mut output = BuildOutput::default();

    for item in raw_items {
        match validate_item(item, policy) {
            Ok(event) => output.events.push(event),
            Err(err) => {
                log::warn!("{}", err);
                output.rejected.push(RejectedItem::from(&err));
            }
        }
    }

    // Stable, so equal events keep their document order
    output.events.sort_by(compare_events);

    log::debug!(
        "build_events: {} events, {} rejected",
        output.events.len(),
        output.rejected.len()
    );
    output
}

fn validate_item(item: &RawEventItem, policy: WeekBoundaryPolicy) -> Result<Event, ItemError> {
    let invalid = |reason: String| ItemError::InvalidDateRange { id: item.id, reason };

    let start = match item.start_date.as_deref() {
        Some(text) => parse_instant(text).map_err(|e| invalid(format!("start-date: {}", e)))?,
        None => return Err(invalid("missing start-date".to_string())),
    };
    let end = match item.end_date.as_deref() {
        Some(text) => parse_instant(text).map_err(|e| invalid(format!("end-date: {}", e)))?,
        None => return Err(invalid("missing end-date".to_string())),
    };

    if end <= start {
        return Err(invalid(format!("end {} is not after start {}", end, start)));
    }

    match policy {
        WeekBoundaryPolicy::Reject => {
            let boundary = week_end(start);
            if end >= boundary {
                return Err(ItemError::WeekBoundaryViolation {
                    id: item.id,
                    end: end.to_string(),
                    week_end: boundary.to_string(),
                });
            }
        }
    }

    Ok(Event::new(item.id, start, end))
}
