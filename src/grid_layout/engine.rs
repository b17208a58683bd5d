//! Grid-level layout computation
//!
//! This module contains the main entry point for layout calculations,
//! taking the sorted events and the visible range and producing a PlacementGrid.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::cell::{DayCell, DayCellBuilder};
use super::placement::*;
use super::week::WeekLayoutComputer;
use crate::error::ConfigError;
use crate::models::{Event, ViewMonth, ViewRange, DAYS_PER_WEEK, WEEKS};

/// Configuration for layout calculations
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// Rows every week reserves, even when empty
    pub min_rows: usize,

    /// Rows a day cell can show before the rest is overflow
    pub visible_rows: usize,

    /// Width of the border between two day cells, in pixels
    pub border_width_px: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_rows: 4,
            visible_rows: 4,
            border_width_px: 1.0,
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_rows == 0 {
            return Err(ConfigError::InvalidLayout("min_rows must be at least 1".to_string()));
        }
        if self.visible_rows == 0 {
            return Err(ConfigError::InvalidLayout(
                "visible_rows must be at least 1".to_string(),
            ));
        }
        if !self.border_width_px.is_finite() || self.border_width_px < 0.0 {
            return Err(ConfigError::InvalidLayout(format!(
                "border_width_px must be a non-negative number, got {}",
                self.border_width_px
            )));
        }
        Ok(())
    }
}

/// Main layout engine for computing placement grids
#[derive(Clone, Debug)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    /// Create a layout engine, rejecting invalid configuration
    pub fn new(config: LayoutConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Compute complete layout for the visible range
    ///
    /// # Arguments
    /// * `sorted_events` - Events in placement order (see `event_model::compare_events`)
    /// * `range` - The 42 visible days
    ///
    /// # Returns
    /// PlacementGrid with the rows of every cell and the span of every placed event
    pub fn layout(&self, sorted_events: &[Event], range: &ViewRange) -> PlacementGrid {
        let mut grid = PlacementGrid::empty();

        // Only events that are visible take part
        let mut pool: Vec<&Event> = sorted_events
            .iter()
            .filter(|ev| range.intersects(ev.start, ev.end))
            .collect();

        let week_computer = WeekLayoutComputer::new(&self.config);

        for (week, week_cells) in grid.cells.chunks_mut(DAYS_PER_WEEK).enumerate().take(WEEKS) {
            let week_layout = week_computer.compute_week_layout(
                week,
                range.week_start(week),
                &mut pool,
                week_cells,
                &mut grid.placements,
            );
            grid.weeks.push(week_layout);
        }

        // Visible but starting before the first cell (ends exactly at its 00:00)
        grid.unplaced = pool.iter().map(|ev| ev.id).collect();
        if !grid.unplaced.is_empty() {
            log::debug!("{} visible events could not be placed", grid.unplaced.len());
        }

        log::debug!(
            "layout: {} placements, rows per week {:?}",
            grid.placements.len(),
            grid.weeks.iter().map(|w| w.rows).collect::<Vec<_>>()
        );
        grid
    }

    /// Compute the decoration of the 42 day cells
    pub fn day_cells(
        &self,
        range: &ViewRange,
        view: ViewMonth,
        today: NaiveDate,
        selected: Option<NaiveDate>,
    ) -> Vec<DayCell> {
        DayCellBuilder::new(range, view).build(today, selected)
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self {
            config: LayoutConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        assert!(LayoutConfig::default().validate().is_ok());

        let no_rows = LayoutConfig {
            min_rows: 0,
            ..LayoutConfig::default()
        };
        assert!(LayoutEngine::new(no_rows).is_err());

        let bad_border = LayoutConfig {
            border_width_px: f32::NAN,
            ..LayoutConfig::default()
        };
        assert!(bad_border.validate().is_err());
    }

    #[test]
    fn test_config_from_partial_json() {
        let config: LayoutConfig = serde_json::from_str(r#"{"borderWidthPx": 2.0}"#).unwrap();
        assert_eq!(config.min_rows, 4);
        assert_eq!(config.border_width_px, 2.0);
    }

    #[test]
    fn test_empty_month_has_four_rows_per_week() {
        let engine = LayoutEngine::default();
        let range = ViewMonth::new(2024, 6).unwrap().view_range();
        let grid = engine.layout(&[], &range);

        assert_eq!(grid.weeks.len(), WEEKS);
        assert!(grid.weeks.iter().all(|w| w.rows == 4));
        assert!(grid.cells.iter().all(|c| c.len() == 4));
        assert!(grid.cells.iter().flatten().all(|e| *e == RowEntry::Spacer));
        assert!(!grid.has_overflow());
    }
}
