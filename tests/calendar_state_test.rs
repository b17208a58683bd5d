// Test: calendar state rebuilds
//
// Notifications are coalesced: however many arrive between two queries,
// the next query performs at most one event build and one layout pass.

use calendar_wasm::calendar::{CalendarState, Change};
use calendar_wasm::grid_layout::LayoutConfig;
use calendar_wasm::models::{EventId, RawEventItem, ViewMonth};
use chrono::NaiveDate;

fn june() -> ViewMonth {
    ViewMonth::new(2024, 6).unwrap()
}

#[test]
fn test_burst_of_mutations_rebuilds_once() {
    let mut state = CalendarState::new(june());

    for i in 0..5 {
        let items: Vec<RawEventItem> = (0..=i)
            .map(|id| RawEventItem::new(id, "2024-06-05T09:00", "2024-06-05T10:00"))
            .collect();
        state.set_items(items);
    }
    state.notify(Change::Children);
    state.set_view(june().next());
    state.set_view(june());

    let grid = state.placement_grid();
    assert_eq!(grid.placements.len(), 5);
    assert_eq!(state.build_count(), 1);
    assert_eq!(state.layout_count(), 1);
}

#[test]
fn test_selection_change_does_not_relayout() {
    let mut state = CalendarState::new(june());
    state.flush();

    state.set_selected(NaiveDate::from_ymd_opt(2024, 6, 12));
    assert!(!state.flush());
    assert_eq!(state.layout_count(), 1);
}

#[test]
fn test_view_change_moves_placements() {
    let mut state = CalendarState::new(june());
    state.set_items(vec![RawEventItem::new(1, "2024-07-10", "2024-07-11")]);

    assert!(state.placement_grid().placement(EventId(1)).is_none());

    state.set_view(june().next());
    // July 2024 starts on a Monday, so cell 0 is Sunday June 30
    let placement = state.placement_grid().placement(EventId(1)).cloned().unwrap();
    assert_eq!(placement.cell, 10);
}

#[test]
fn test_diagnostics_report_rejections_and_overflow() {
    let mut state = CalendarState::new(june());
    let mut items: Vec<RawEventItem> = (0..5)
        .map(|id| RawEventItem::new(id, "2024-06-12T09:00", "2024-06-12T10:00"))
        .collect();
    items.push(RawEventItem::new(10, "2024-06-08", "2024-06-10"));
    items.push(RawEventItem::new(11, "2024-06-10", "2024-06-09"));
    state.set_items(items);

    let diags = state.diagnostics();
    assert!(diags.has_errors());
    assert_eq!(diags.of_kind("week_boundary_violation").count(), 1);
    assert_eq!(diags.of_kind("invalid_date_range").count(), 1);

    let overflow: Vec<_> = diags.of_kind("layout_overflow").collect();
    assert_eq!(overflow.len(), 1);
    assert_eq!(overflow[0].cell, Some(14));

    assert_eq!(state.rejected().len(), 2);
    assert_eq!(state.events().len(), 5);
}

#[test]
fn test_rebuild_always_produces_full_grid() {
    let mut state = CalendarState::new(june());
    state.set_items(vec![
        RawEventItem::new(1, "bad", "worse"),
        RawEventItem::new(2, "2024-06-08", "2024-06-10"),
    ]);

    let grid = state.placement_grid();
    assert_eq!(grid.cells.len(), 42);
    assert_eq!(grid.weeks.len(), 6);
    assert!(grid.placements.is_empty());
}

#[test]
fn test_config_change_relayouts_without_rebuild() {
    let mut state = CalendarState::new(june());
    state.set_items(vec![RawEventItem::new(1, "2024-06-03", "2024-06-05")]);
    state.flush();

    let config = LayoutConfig {
        min_rows: 2,
        ..LayoutConfig::default()
    };
    state.set_config(config).unwrap();
    let grid = state.placement_grid();
    assert_eq!(grid.rows_in_week(0), 2);
    assert_eq!(state.build_count(), 1);
    assert_eq!(state.layout_count(), 2);
}

#[test]
fn test_invalid_config_is_rejected() {
    let mut state = CalendarState::new(june());
    let config = LayoutConfig {
        min_rows: 0,
        ..LayoutConfig::default()
    };
    assert!(state.set_config(config).is_err());
    assert_eq!(state.config().min_rows, 4);
}

#[test]
fn test_day_cells_follow_view() {
    let mut state = CalendarState::new(june());
    state.set_selected(NaiveDate::from_ymd_opt(2024, 6, 3));

    let cells = state.day_cells(NaiveDate::from_ymd_opt(2024, 6, 4).unwrap());
    assert!(cells[8].selected);
    assert!(cells[9].today);
    assert_eq!(cells.iter().filter(|c| c.in_month).count(), 30);
}
