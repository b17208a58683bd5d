// Test: building events from raw child items
//
// Covers validation (invalid ranges, week-boundary violations) and the
// placement priority order of the surviving events.

use calendar_wasm::event_model::{build_events, compare_events, WeekBoundaryPolicy};
use calendar_wasm::models::{EventId, RawEventItem};
use std::cmp::Ordering;

fn build(items: &[RawEventItem]) -> calendar_wasm::BuildOutput {
    build_events(items, WeekBoundaryPolicy::Reject)
}

#[test]
fn test_single_day_event() {
    let output = build(&[RawEventItem::new(1, "2024-06-03T00:00Z", "2024-06-04T00:00Z")]);

    assert!(output.rejected.is_empty());
    let event = &output.events[0];
    assert_eq!(event.duration_days, 1);
    assert!(!event.multiday);
}

#[test]
fn test_three_day_event() {
    let output = build(&[RawEventItem::new(1, "2024-06-03", "2024-06-06")]);

    let event = &output.events[0];
    assert_eq!(event.duration_days, 3);
    assert!(event.multiday);
}

#[test]
fn test_inverted_range_is_invalid() {
    let output = build(&[RawEventItem::new(9, "2024-06-06", "2024-06-03")]);

    assert!(output.events.is_empty());
    assert_eq!(output.rejected.len(), 1);
    assert_eq!(output.rejected[0].id, EventId(9));
    assert_eq!(output.rejected[0].kind, "invalid_date_range");
}

#[test]
fn test_unparsable_dates_are_invalid() {
    let output = build(&[
        RawEventItem::new(1, "yesterday", "2024-06-03"),
        RawEventItem::new(2, "2024-06-03", "2024-02-30"),
    ]);

    assert!(output.events.is_empty());
    assert!(output.rejected.iter().all(|r| r.kind == "invalid_date_range"));
}

#[test]
fn test_saturday_to_monday_crosses_week() {
    // Saturday 2024-06-08 to Monday 2024-06-10
    let output = build(&[RawEventItem::new(5, "2024-06-08", "2024-06-10")]);

    assert!(output.events.is_empty());
    assert_eq!(output.rejected[0].id, EventId(5));
    assert_eq!(output.rejected[0].kind, "week_boundary_violation");
    assert!(output.rejected[0].message.contains("week"));
}

#[test]
fn test_end_at_sunday_midnight_is_rejected() {
    // Reaching the closing Sunday 00:00 counts as crossing
    let output = build(&[RawEventItem::new(1, "2024-06-08T09:00", "2024-06-09T00:00")]);
    assert_eq!(output.rejected[0].kind, "week_boundary_violation");

    // Ending just before it is fine
    let output = build(&[RawEventItem::new(2, "2024-06-08T09:00", "2024-06-08T23:59")]);
    assert!(output.rejected.is_empty());
}

#[test]
fn test_whole_week_from_sunday() {
    let output = build(&[RawEventItem::new(1, "2024-06-02", "2024-06-08T18:00")]);
    assert_eq!(output.events[0].duration_days, 7);
}

#[test]
fn test_placement_order() {
    let output = build(&[
        RawEventItem::new(1, "2024-06-05T14:00", "2024-06-05T15:00"),
        RawEventItem::new(2, "2024-06-05T09:00", "2024-06-05T10:00"),
        RawEventItem::new(3, "2024-06-06", "2024-06-08"),
        RawEventItem::new(4, "2024-06-03", "2024-06-05"),
        RawEventItem::new(5, "2024-06-04T08:00", "2024-06-04T20:00"),
    ]);

    let order: Vec<u32> = output.events.iter().map(|e| e.id.0).collect();
    // Multi-day by start, then single-day in time order
    assert_eq!(order, vec![4, 3, 5, 2, 1]);
}

#[test]
fn test_equal_events_keep_document_order() {
    let output = build(&[
        RawEventItem::new(7, "2024-06-05T09:00", "2024-06-05T10:00"),
        RawEventItem::new(3, "2024-06-05T09:00", "2024-06-05T10:00"),
    ]);

    let order: Vec<u32> = output.events.iter().map(|e| e.id.0).collect();
    assert_eq!(order, vec![7, 3]);
}

#[test]
fn test_sorted_output_is_consistent_with_comparator() {
    let output = build(&[
        RawEventItem::new(1, "2024-06-10T09:00", "2024-06-10T12:00"),
        RawEventItem::new(2, "2024-06-10T10:00", "2024-06-10T11:00"),
        RawEventItem::new(3, "2024-06-11", "2024-06-13"),
        RawEventItem::new(4, "2024-06-10T08:00", "2024-06-10T09:00"),
        RawEventItem::new(5, "2024-06-09", "2024-06-15"),
        RawEventItem::new(6, "2024-06-12T23:00", "2024-06-13T01:00"),
    ]);

    for pair in output.events.windows(2) {
        assert_ne!(compare_events(&pair[0], &pair[1]), Ordering::Greater);
    }
}
