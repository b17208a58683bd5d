//! WASM build test
//!
//! This module tests that the WASM module can be built and the JavaScript
//! surface of the calendar engine works in a browser.

use calendar_wasm::api::helpers::{layout_config, optional_date};
use calendar_wasm::api::{layout_month, CalendarEngine};
use calendar_wasm::grid_layout::PlacementGrid;
use calendar_wasm::models::{EventId, RawEventItem, ViewRange};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn items_js(items: &[RawEventItem]) -> JsValue {
    serde_wasm_bindgen::to_value(items).unwrap()
}

#[wasm_bindgen_test]
fn test_engine_creation() {
    let engine = CalendarEngine::new(Some("2024-06-15".to_string()));
    assert!(engine.is_ok());
    assert_eq!(engine.unwrap().month_title(), "2024-06");
}

#[wasm_bindgen_test]
fn test_engine_without_view_uses_current_month() {
    let engine = CalendarEngine::new(None);
    assert!(engine.is_ok());
}

#[wasm_bindgen_test]
fn test_invalid_view_is_an_error() {
    assert!(CalendarEngine::new(Some("not a date".to_string())).is_err());
}

#[wasm_bindgen_test]
fn test_placement_grid_round_trip() {
    let mut engine = CalendarEngine::new(Some("2024-06-01".to_string())).unwrap();
    engine
        .set_children(items_js(&[RawEventItem::new(1, "2024-06-03", "2024-06-06")]))
        .unwrap();
    assert!(engine.is_dirty());
    assert!(engine.flush());

    let grid: PlacementGrid =
        serde_wasm_bindgen::from_value(engine.placement_grid().unwrap()).unwrap();
    let placement = grid.placement(EventId(1)).unwrap();
    assert_eq!(placement.cell, 8);
    assert_eq!(placement.width.as_deref(), Some("calc(300% + 2px)"));
}

#[wasm_bindgen_test]
fn test_month_input_navigation() {
    let mut engine = CalendarEngine::new(Some("2024-06-01".to_string())).unwrap();
    engine.set_month_input("2024-12").unwrap();
    engine.next_month();
    assert_eq!(engine.month_title(), "2025-01");
    assert!(engine.set_month_input("2024-13").is_err());
}

#[wasm_bindgen_test]
fn test_select_cell() {
    let mut engine = CalendarEngine::new(Some("2024-06-01".to_string())).unwrap();
    assert_eq!(engine.select_cell(8).unwrap(), "2024-06-03");
    assert!(engine.select_cell(42).is_err());
}

#[wasm_bindgen_test]
fn test_layout_month() {
    let result = layout_month(
        items_js(&[RawEventItem::new(1, "2024-06-03", "2024-06-04")]),
        "2024-06-01",
        JsValue::UNDEFINED,
    );
    let grid: PlacementGrid = serde_wasm_bindgen::from_value(result.unwrap()).unwrap();
    assert_eq!(grid.placements.len(), 1);
}

#[wasm_bindgen_test]
fn test_view_range_has_both_ends() {
    let engine = CalendarEngine::new(Some("2024-06-15".to_string())).unwrap();
    let range: ViewRange = serde_wasm_bindgen::from_value(engine.view_range().unwrap()).unwrap();
    assert_eq!(range.first.to_string(), "2024-05-26");
    assert_eq!(range.last.to_string(), "2024-07-06");
}

#[wasm_bindgen_test]
fn test_optional_date_attribute() {
    assert_eq!(optional_date(None).unwrap(), None);
    assert_eq!(optional_date(Some("  ")).unwrap(), None);
    assert_eq!(
        optional_date(Some("2024-06-03T10:00")).unwrap().map(|d| d.to_string()),
        Some("2024-06-03".to_string())
    );
    assert!(optional_date(Some("someday")).is_err());
}

#[wasm_bindgen_test]
fn test_layout_config_defaults_when_absent() {
    assert_eq!(layout_config(JsValue::UNDEFINED).unwrap().min_rows, 4);
    assert_eq!(layout_config(JsValue::NULL).unwrap().visible_rows, 4);

    let mut engine = CalendarEngine::new(Some("2024-06-01".to_string())).unwrap();
    assert!(engine.set_config(JsValue::UNDEFINED).is_ok());
}
