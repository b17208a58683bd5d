//! Diagnostics module for calendar problems
//!
//! Collects everything the calendar could not honour during a rebuild:
//! rejected child items and weeks whose rows overflow their cells.
//! JavaScript logs or surfaces these; the core never throws for them.

use serde::{Deserialize, Serialize};

use crate::event_model::RejectedItem;
use crate::grid_layout::PlacementGrid;
use crate::models::{EventId, DAYS_PER_WEEK};

/// Severity level for diagnostic marks
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Error,
    Warning,
    Info,
}

/// A diagnostic mark about one item or one part of the grid
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticMark {
    /// Child item concerned, if any
    pub id: Option<EventId>,
    /// First grid cell concerned, if any
    pub cell: Option<usize>,
    /// Number of cells highlighted (default 1)
    pub len: usize,
    /// Severity level
    pub severity: DiagnosticSeverity,
    /// Kind identifier (e.g., "invalid_date_range", "layout_overflow")
    pub kind: String,
    /// Human-readable message
    pub message: String,
}

impl DiagnosticMark {
    /// Create a new diagnostic mark
    pub fn new(
        severity: DiagnosticSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            cell: None,
            len: 1,
            severity,
            kind: kind.into(),
            message: message.into(),
        }
    }

    pub fn for_item(mut self, id: EventId) -> Self {
        self.id = Some(id);
        self
    }

    /// Attach to a cell range
    pub fn at_cells(mut self, cell: usize, len: usize) -> Self {
        self.cell = Some(cell);
        self.len = len;
        self
    }
}

impl From<&RejectedItem> for DiagnosticMark {
    fn from(item: &RejectedItem) -> Self {
        DiagnosticMark::new(DiagnosticSeverity::Error, item.kind.clone(), item.message.clone())
            .for_item(item.id)
    }
}

/// Collection of diagnostic marks for one rebuild
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Diagnostics {
    /// All diagnostic marks
    pub marks: Vec<DiagnosticMark>,
}

impl Diagnostics {
    /// Create empty diagnostics
    pub fn new() -> Self {
        Self { marks: Vec::new() }
    }

    /// Collect the diagnostics of one build + layout pass
    pub fn collect(rejected: &[RejectedItem], grid: &PlacementGrid) -> Self {
        let mut diags = Self::new();
        diags.extend(rejected.iter().map(DiagnosticMark::from));

        for week in grid.weeks.iter().filter(|w| w.overflows()) {
            diags.add(
                DiagnosticMark::new(
                    DiagnosticSeverity::Info,
                    "layout_overflow",
                    format!(
                        "Week {} needs {} rows; {} events are hidden",
                        week.week, week.rows, week.hidden_events
                    ),
                )
                .at_cells(week.week * DAYS_PER_WEEK, DAYS_PER_WEEK),
            );
        }

        diags
    }

    /// Add a mark
    pub fn add(&mut self, mark: DiagnosticMark) {
        self.marks.push(mark);
    }

    /// Extend with multiple marks
    pub fn extend(&mut self, marks: impl IntoIterator<Item = DiagnosticMark>) {
        self.marks.extend(marks);
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.marks
            .iter()
            .any(|m| m.severity == DiagnosticSeverity::Error)
    }

    /// Marks of a given kind
    pub fn of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a DiagnosticMark> {
        self.marks.iter().filter(move |m| m.kind == kind)
    }

    /// Check if there are any diagnostics
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_mark_creation() {
        let mark = DiagnosticMark::new(DiagnosticSeverity::Info, "layout_overflow", "Too many")
            .at_cells(7, 7);

        assert_eq!(mark.id, None);
        assert_eq!(mark.cell, Some(7));
        assert_eq!(mark.len, 7);
        assert_eq!(mark.severity, DiagnosticSeverity::Info);
        assert_eq!(mark.kind, "layout_overflow");
    }

    #[test]
    fn test_rejected_item_is_error() {
        let rejected = RejectedItem {
            id: EventId(4),
            kind: "week_boundary_violation".to_string(),
            message: "spans weeks".to_string(),
        };
        let mut diags = Diagnostics::new();
        assert!(!diags.has_errors());

        diags.add(DiagnosticMark::from(&rejected));
        assert!(diags.has_errors());
        assert_eq!(diags.of_kind("week_boundary_violation").count(), 1);
        assert_eq!(diags.marks[0].id, Some(EventId(4)));
    }
}
