//! Calendar state management
//!
//! This module contains the CalendarState struct which owns the raw child
//! items and view settings, and memoises the built events and placements.
//!
//! Setters only record a `Change`. Queries flush pending changes and
//! recompute what the changes made dirty, so many notifications in one
//! turn cost one rebuild. Recomputation is a pure function of
//! (raw items, view range, layout config).

use chrono::NaiveDate;

use super::changes::{Change, ChangeQueue};
use crate::diagnostics::Diagnostics;
use crate::error::ConfigError;
use crate::event_model::{build_events, BuildOutput, RejectedItem, WeekBoundaryPolicy};
use crate::grid_layout::{DayCell, LayoutConfig, LayoutEngine, PlacementGrid};
use crate::models::{Control, Controls, Event, RawEventItem, ViewMonth, ViewRange};

/// Complete calendar state (source of truth for the layout)
#[derive(Clone, Debug)]
pub struct CalendarState {
    items: Vec<RawEventItem>,
    view: ViewMonth,
    selected: Option<NaiveDate>,
    controls: Controls,
    engine: LayoutEngine,
    policy: WeekBoundaryPolicy,

    queue: ChangeQueue,

    // Memoised outputs and their dirty flags
    events_dirty: bool,
    layout_dirty: bool,
    build: BuildOutput,
    grid: PlacementGrid,
    diagnostics: Diagnostics,

    build_count: usize,
    layout_count: usize,
}

impl CalendarState {
    /// Create a calendar showing the given month with default layout
    pub fn new(view: ViewMonth) -> Self {
        Self {
            items: Vec::new(),
            view,
            selected: None,
            controls: Controls::default(),
            engine: LayoutEngine::default(),
            policy: WeekBoundaryPolicy::default(),
            queue: ChangeQueue::new(),
            events_dirty: true,
            layout_dirty: true,
            build: BuildOutput::default(),
            grid: PlacementGrid::empty(),
            diagnostics: Diagnostics::new(),
            build_count: 0,
            layout_count: 0,
        }
    }

    /// Create a calendar with a custom layout configuration
    pub fn with_config(view: ViewMonth, config: LayoutConfig) -> Result<Self, ConfigError> {
        let mut state = Self::new(view);
        state.engine = LayoutEngine::new(config)?;
        Ok(state)
    }

    // ------------------------------------------------------------------
    // Inputs
    // ------------------------------------------------------------------

    /// Record a notification without rebuilding
    pub fn notify(&mut self, change: Change) {
        self.queue.push(change);
    }

    /// Replace the child items (a child-list or date attribute mutation)
    pub fn set_items(&mut self, items: Vec<RawEventItem>) {
        self.items = items;
        self.notify(Change::Children);
    }

    pub fn items(&self) -> &[RawEventItem] {
        &self.items
    }

    /// Show a different month; unchanged months are ignored
    pub fn set_view(&mut self, view: ViewMonth) {
        if view != self.view {
            self.view = view;
            self.notify(Change::View);
        }
    }

    pub fn view(&self) -> ViewMonth {
        self.view
    }

    pub fn view_range(&self) -> ViewRange {
        self.view.view_range()
    }

    /// Change the selected date. Ignored unless `select-date` is enabled.
    pub fn set_selected(&mut self, date: Option<NaiveDate>) {
        let date = if self.controls.contains(Control::SelectDate) {
            date
        } else {
            None
        };
        if date != self.selected {
            self.selected = date;
            self.notify(Change::Selected);
        }
    }

    /// Select the date shown in a cell (a click on the cell)
    pub fn select_cell(&mut self, index: usize) -> Result<NaiveDate, ConfigError> {
        if index >= crate::models::GRID_CELLS {
            return Err(ConfigError::InvalidCell(index));
        }
        let date = self.view_range().date_at(index);
        self.set_selected(Some(date));
        Ok(date)
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    pub fn set_controls(&mut self, controls: Controls) {
        if controls != self.controls {
            self.controls = controls;
            if !self.controls.contains(Control::SelectDate) && self.selected.is_some() {
                self.selected = None;
                self.notify(Change::Selected);
            }
            self.notify(Change::Controls);
        }
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    pub fn set_config(&mut self, config: LayoutConfig) -> Result<(), ConfigError> {
        self.engine = LayoutEngine::new(config)?;
        self.notify(Change::Config);
        Ok(())
    }

    pub fn config(&self) -> &LayoutConfig {
        self.engine.config()
    }

    // ------------------------------------------------------------------
    // Rebuild
    // ------------------------------------------------------------------

    /// Apply pending changes, recomputing only what they made dirty.
    ///
    /// Returns true when anything was recomputed.
    pub fn flush(&mut self) -> bool {
        let changes = self.queue.drain();
        if changes.needs_event_rebuild() {
            self.events_dirty = true;
        }
        if changes.needs_layout() {
            self.layout_dirty = true;
        }

        let mut rebuilt = false;

        if self.events_dirty {
            self.build = build_events(&self.items, self.policy);
            self.events_dirty = false;
            self.layout_dirty = true;
            self.build_count += 1;
            rebuilt = true;
        }

        if self.layout_dirty {
            let range = self.view_range();
            self.grid = self.engine.layout(&self.build.events, &range);
            self.diagnostics = Diagnostics::collect(&self.build.rejected, &self.grid);
            self.layout_dirty = false;
            self.layout_count += 1;
            rebuilt = true;
        }

        rebuilt
    }

    /// True when a query would recompute something
    pub fn is_dirty(&self) -> bool {
        self.events_dirty || self.layout_dirty || !self.queue.is_empty()
    }

    // ------------------------------------------------------------------
    // Outputs
    // ------------------------------------------------------------------

    /// Placement grid for the current items and view
    pub fn placement_grid(&mut self) -> &PlacementGrid {
        self.flush();
        &self.grid
    }

    /// Valid events in placement order
    pub fn events(&mut self) -> &[Event] {
        self.flush();
        &self.build.events
    }

    /// Items excluded by the last build
    pub fn rejected(&mut self) -> &[RejectedItem] {
        self.flush();
        &self.build.rejected
    }

    pub fn diagnostics(&mut self) -> &Diagnostics {
        self.flush();
        &self.diagnostics
    }

    /// Decoration of the 42 day cells for the given "today"
    pub fn day_cells(&self, today: NaiveDate) -> Vec<DayCell> {
        self.engine
            .day_cells(&self.view_range(), self.view, today, self.selected)
    }

    /// Number of event builds performed so far
    pub fn build_count(&self) -> usize {
        self.build_count
    }

    /// Number of layout passes performed so far
    pub fn layout_count(&self) -> usize {
        self.layout_count
    }
}
