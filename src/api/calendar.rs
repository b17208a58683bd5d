//! Calendar engine exposed to JavaScript
//!
//! The `basic-calendar` (and `grid-calendar`) custom elements each own one
//! `CalendarEngine`. The element forwards attribute changes and child-list
//! mutations as they arrive, then calls `flush()` once per microtask and
//! mounts the returned placement grid into its shadow DOM.

use wasm_bindgen::prelude::*;

use crate::api::helpers::*;
use crate::{wasm_error, wasm_info, wasm_log, wasm_warn};
use crate::calendar::{CalendarState, Change};
use crate::diagnostics::DiagnosticSeverity;
use crate::event_model::{build_events, WeekBoundaryPolicy};
use crate::grid_layout::LayoutEngine;
use crate::models::{Controls, RawEventItem, ViewMonth};
use crate::parse::{parse_month_input, parse_view};

#[wasm_bindgen]
pub struct CalendarEngine {
    state: CalendarState,
}

#[wasm_bindgen]
impl CalendarEngine {
    /// Create an engine for the month containing `view` (a date string),
    /// or the current month when no `view` attribute is set
    #[wasm_bindgen(constructor)]
    pub fn new(view: Option<String>) -> Result<CalendarEngine, JsValue> {
        let month = match view.as_deref() {
            Some(text) => parse_view(text).map_err(config_error)?,
            None => ViewMonth::containing(today()),
        };
        wasm_info!("CalendarEngine created for {}", month.title());
        Ok(CalendarEngine {
            state: CalendarState::new(month),
        })
    }

    /// Replace the child items: `[{ id, startDate, endDate }]`
    #[wasm_bindgen(js_name = setChildren)]
    pub fn set_children(&mut self, items_js: JsValue) -> Result<(), JsValue> {
        let items: Vec<RawEventItem> = deserialize(items_js, "Invalid child items")?;
        wasm_log!("setChildren: {} items", items.len());
        self.state.set_items(items);
        Ok(())
    }

    /// Mark the children changed without replacing them
    #[wasm_bindgen(js_name = childrenChanged)]
    pub fn children_changed(&mut self) {
        self.state.notify(Change::Children);
    }

    /// Apply the `view` attribute (any date inside the month to show)
    #[wasm_bindgen(js_name = setView)]
    pub fn set_view(&mut self, view: &str) -> Result<(), JsValue> {
        let month = parse_view(view).map_err(config_error)?;
        self.state.set_view(month);
        Ok(())
    }

    /// Apply the month title input's `YYYY-MM` value
    #[wasm_bindgen(js_name = setMonthInput)]
    pub fn set_month_input(&mut self, value: &str) -> Result<(), JsValue> {
        let month = parse_month_input(value).map_err(config_error)?;
        self.state.set_view(month);
        Ok(())
    }

    #[wasm_bindgen(js_name = nextMonth)]
    pub fn next_month(&mut self) {
        let next = self.state.view().next();
        self.state.set_view(next);
    }

    #[wasm_bindgen(js_name = prevMonth)]
    pub fn prev_month(&mut self) {
        let prev = self.state.view().prev();
        self.state.set_view(prev);
    }

    /// `YYYY-MM` value for the month title input
    #[wasm_bindgen(js_name = monthTitle)]
    pub fn month_title(&self) -> String {
        self.state.view().title()
    }

    /// Visible range as `{ first, last }` (cells 0 and 41)
    #[wasm_bindgen(js_name = viewRange)]
    pub fn view_range(&self) -> Result<JsValue, JsValue> {
        serialize(&self.state.view_range(), "Failed to serialize view range")
    }

    /// Apply the `selected` attribute (None clears the selection)
    #[wasm_bindgen(js_name = setSelected)]
    pub fn set_selected(&mut self, selected: Option<String>) -> Result<(), JsValue> {
        let date = optional_date(selected.as_deref())?;
        self.state.set_selected(date);
        Ok(())
    }

    /// Select the date of a clicked cell; returns it as `YYYY-MM-DD`
    #[wasm_bindgen(js_name = selectCell)]
    pub fn select_cell(&mut self, index: usize) -> Result<String, JsValue> {
        let date = self.state.select_cell(index).map_err(config_error)?;
        Ok(date.to_string())
    }

    /// Apply the `controls` and `suppress-controls` attributes
    #[wasm_bindgen(js_name = setControls)]
    pub fn set_controls(&mut self, controls: Option<String>, suppress: Option<String>) {
        let controls = Controls::from_attributes(controls.as_deref(), suppress.as_deref());
        self.state.set_controls(controls);
    }

    /// Replace the layout configuration (`{ minRows, visibleRows, borderWidthPx }`);
    /// `undefined` restores the defaults
    #[wasm_bindgen(js_name = setConfig)]
    pub fn set_config(&mut self, config_js: JsValue) -> Result<(), JsValue> {
        let config = layout_config(config_js)?;
        self.state.set_config(config).map_err(config_error)
    }

    /// True when pending changes would trigger a rebuild
    #[wasm_bindgen(js_name = isDirty)]
    pub fn is_dirty(&self) -> bool {
        self.state.is_dirty()
    }

    /// Apply all pending changes in a single rebuild
    pub fn flush(&mut self) -> bool {
        let rebuilt = self.state.flush();
        if rebuilt {
            for mark in &self.state.diagnostics().marks {
                match mark.severity {
                    DiagnosticSeverity::Error => wasm_error!("{}: {}", mark.kind, mark.message),
                    DiagnosticSeverity::Warning => wasm_warn!("{}: {}", mark.kind, mark.message),
                    DiagnosticSeverity::Info => wasm_info!("{}: {}", mark.kind, mark.message),
                }
            }
        }
        rebuilt
    }

    /// Placement grid: `{ cells, placements, weeks, unplaced }`
    #[wasm_bindgen(js_name = placementGrid)]
    pub fn placement_grid(&mut self) -> Result<JsValue, JsValue> {
        serialize(self.state.placement_grid(), "Failed to serialize placement grid")
    }

    /// Decoration of the 42 day cells; `today` defaults to the browser clock
    #[wasm_bindgen(js_name = dayCells)]
    pub fn day_cells(&self, today_js: Option<String>) -> Result<JsValue, JsValue> {
        let date = optional_date(today_js.as_deref())?.unwrap_or_else(today);
        serialize(&self.state.day_cells(date), "Failed to serialize day cells")
    }

    /// Rejected items and overflowing weeks from the last rebuild
    pub fn diagnostics(&mut self) -> Result<JsValue, JsValue> {
        serialize(self.state.diagnostics(), "Failed to serialize diagnostics")
    }
}

/// One-shot layout: build events from `items_js` and place them in the
/// month containing `view`
#[wasm_bindgen(js_name = layoutMonth)]
pub fn layout_month(items_js: JsValue, view: &str, config_js: JsValue) -> Result<JsValue, JsValue> {
    let items: Vec<RawEventItem> = deserialize(items_js, "Invalid child items")?;
    let month = parse_view(view).map_err(config_error)?;
    let engine = LayoutEngine::new(layout_config(config_js)?).map_err(config_error)?;

    let built = build_events(&items, WeekBoundaryPolicy::Reject);
    let grid = engine.layout(&built.events, &month.view_range());
    serialize(&grid, "Failed to serialize placement grid")
}
