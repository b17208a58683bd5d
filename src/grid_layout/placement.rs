//! Placement Grid
//!
//! This module defines the output structure returned from the layout engine to JavaScript.
//! The grid holds, for every one of the 42 day cells, the ordered rows to mount into the
//! cell's event list, and for every placed event its starting cell and span. JavaScript
//! only mounts slots and spacers; it never decides placement.

use serde::{Deserialize, Serialize};

use crate::models::{EventId, GRID_CELLS};

/// Width of a placed event, in cells and in the cell borders it crosses
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpanWidth {
    /// Number of day cells covered
    pub cells: u32,

    /// Borders crossed between adjacent covered cells (`cells - 1`)
    pub borders: u32,
}

impl SpanWidth {
    pub fn new(cells: u32) -> Self {
        let cells = cells.max(1);
        Self {
            cells,
            borders: cells - 1,
        }
    }

    /// CSS width for the event element, relative to its starting cell.
    ///
    /// Single-day events keep their natural width (None).
    pub fn css_width(&self, border_px: f32) -> Option<String> {
        if self.cells <= 1 {
            return None;
        }
        Some(format!(
            "calc({}% + {}px)",
            self.cells * 100,
            self.borders as f32 * border_px
        ))
    }

    /// Absolute width in pixels for a known cell width
    pub fn width_px(&self, cell_width: f32, border_px: f32) -> f32 {
        self.cells as f32 * cell_width + self.borders as f32 * border_px
    }
}

/// One row slot inside a day cell's event list
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RowEntry {
    /// The event starts in this cell; mount its slot here
    Event { id: EventId, span: SpanWidth },

    /// Covered by a multi-day event that started in an earlier cell of the
    /// same week; rendered as a spacer
    Continuation { id: EventId },

    /// Nothing in this row on this day
    Spacer,
}

impl RowEntry {
    /// True for entries rendered as an empty spacer element
    pub fn is_spacer(&self) -> bool {
        !matches!(self, RowEntry::Event { .. })
    }

    /// Event occupying this slot, if any
    pub fn event_id(&self) -> Option<EventId> {
        match self {
            RowEntry::Event { id, .. } | RowEntry::Continuation { id } => Some(*id),
            RowEntry::Spacer => None,
        }
    }
}

/// Where one event ended up
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventPlacement {
    pub id: EventId,

    /// 0-based index of the starting cell within the 42-cell grid
    pub cell: usize,

    /// Week row of the grid (0..6)
    pub week: usize,

    /// Row within the week's event lists (0 = top)
    pub row: usize,

    pub span: SpanWidth,

    /// Pre-computed CSS width (None for single-day events)
    pub width: Option<String>,

    /// Row is beyond the visible rows of the cell
    pub hidden: bool,
}

/// Row accounting for one week
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeekLayout {
    pub week: usize,

    /// Rows emitted for every day of this week (at least the configured minimum)
    pub rows: usize,

    /// Rows at or beyond the visible rows, including the closing spacer row
    pub hidden_rows: usize,

    /// Events placed in hidden rows
    pub hidden_events: usize,
}

impl WeekLayout {
    /// True when some event of this week sits in a hidden row
    pub fn overflows(&self) -> bool {
        self.hidden_events > 0
    }
}

/// Complete layout of the month grid
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlacementGrid {
    /// Row entries per cell; always `GRID_CELLS` long
    pub cells: Vec<Vec<RowEntry>>,

    /// Placed events in placement order
    pub placements: Vec<EventPlacement>,

    /// Row counts per week; always `WEEKS` long
    pub weeks: Vec<WeekLayout>,

    /// Visible-range events that no cell could take
    pub unplaced: Vec<EventId>,
}

impl PlacementGrid {
    pub(crate) fn empty() -> Self {
        Self {
            cells: vec![Vec::new(); GRID_CELLS],
            placements: Vec::new(),
            weeks: Vec::new(),
            unplaced: Vec::new(),
        }
    }

    /// Placement of a given event, if it was placed
    pub fn placement(&self, id: EventId) -> Option<&EventPlacement> {
        self.placements.iter().find(|p| p.id == id)
    }

    /// Row entries of one cell
    pub fn cell(&self, index: usize) -> &[RowEntry] {
        self.cells.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of rows rendered in the given week
    pub fn rows_in_week(&self, week: usize) -> usize {
        self.weeks.get(week).map(|w| w.rows).unwrap_or(0)
    }

    /// True when any week needs more rows than a cell shows
    pub fn has_overflow(&self) -> bool {
        self.weeks.iter().any(WeekLayout::overflows)
    }
}
