//! Placement priority order
//!
//! Multi-day events come first so they claim the top rows of a week.
//! This is a best-effort heuristic, not an overlap-free solver; the
//! layout engine relies on exactly this comparator for its tie-breaks.

use std::cmp::Ordering;

use crate::models::Event;

/// Comparator used to sort events before layout
pub fn compare_events(a: &Event, b: &Event) -> Ordering {
    match (a.multiday, b.multiday) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (true, true) => a.start.cmp(&b.start),
        (false, false) => {
            if a.end <= b.start {
                Ordering::Less
            } else if b.end <= a.start {
                Ordering::Greater
            } else {
                // Overlapping
                a.start.cmp(&b.start)
            }
        }
    }
}
