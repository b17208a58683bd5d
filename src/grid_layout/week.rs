//! Week-level layout computation
//!
//! Fills one week of the grid row by row. Each row is filled greedily
//! left to right: on every day the first remaining event (in placement
//! order) that starts on that day takes the slot, otherwise a spacer does.

use chrono::{Duration, NaiveDate, NaiveTime};

use super::engine::LayoutConfig;
use super::placement::*;
use crate::models::{one_day, Event, DAYS_PER_WEEK};

/// Computes layout for a single week
pub struct WeekLayoutComputer<'a> {
    config: &'a LayoutConfig,
}

/// One filled row before it is committed to the grid
struct FilledRow {
    entries: Vec<RowEntry>,
    /// (pool index, day of week, span) in day order
    placed: Vec<(usize, usize, SpanWidth)>,
}

impl<'a> WeekLayoutComputer<'a> {
    /// Create a new week computer
    pub fn new(config: &'a LayoutConfig) -> Self {
        Self { config }
    }

    /// Lay out one week.
    ///
    /// Placed events are removed from `pool`. Row entries are appended to
    /// the seven cells of `week_cells`.
    pub fn compute_week_layout(
        &self,
        week: usize,
        week_start: NaiveDate,
        pool: &mut Vec<&Event>,
        week_cells: &mut [Vec<RowEntry>],
        placements: &mut Vec<EventPlacement>,
    ) -> WeekLayout {
        let mut rows = 0;
        let mut hidden_events = 0;
        let mut event_added = false;

        // Past the minimum, a row is added only after a row that placed an
        // event, so the all-spacer row that ends growth is still emitted
        while rows < self.config.min_rows || event_added {
            let filled = self.fill_row(week_start, pool);
            event_added = !filled.placed.is_empty();

            for (day, entry) in filled.entries.into_iter().enumerate() {
                week_cells[day].push(entry);
            }

            let hidden = rows >= self.config.visible_rows;
            if hidden {
                hidden_events += filled.placed.len();
            }
            for &(event_idx, day, span) in &filled.placed {
                placements.push(EventPlacement {
                    id: pool[event_idx].id,
                    cell: week * DAYS_PER_WEEK + day,
                    week,
                    row: rows,
                    span,
                    width: span.css_width(self.config.border_width_px),
                    hidden,
                });
            }

            // Highest index first so earlier removals don't shift later ones
            let mut used: Vec<usize> = filled.placed.iter().map(|p| p.0).collect();
            used.sort_unstable_by(|a, b| b.cmp(a));
            for idx in used {
                pool.remove(idx);
            }

            rows += 1;
        }

        let hidden_rows = rows.saturating_sub(self.config.visible_rows);
        if hidden_events > 0 {
            log::warn!(
                "Week {} needs {} rows but cells show {}; {} events are hidden",
                week,
                rows,
                self.config.visible_rows,
                hidden_events
            );
        }

        WeekLayout {
            week,
            rows,
            hidden_rows,
            hidden_events,
        }
    }

    /// Fill one row of the week without touching the pool
    fn fill_row(&self, week_start: NaiveDate, pool: &[&Event]) -> FilledRow {
        let mut entries = Vec::with_capacity(DAYS_PER_WEEK);
        let mut placed: Vec<(usize, usize, SpanWidth)> = Vec::new();
        let mut day = 0;

        while day < DAYS_PER_WEEK {
            let day_start = (week_start + Duration::days(day as i64)).and_time(NaiveTime::MIN);

            let found = pool
                .iter()
                .position(|ev| ev.start >= day_start && ev.start - day_start < one_day());

            match found {
                None => {
                    entries.push(RowEntry::Spacer);
                    day += 1;
                }
                Some(idx) => {
                    let event = pool[idx];

                    let remaining = (DAYS_PER_WEEK - day) as u32;
                    if event.duration_days > remaining {
                        log::warn!(
                            "Event {} spans {} days but only {} remain in its week; clipping",
                            event.id,
                            event.duration_days,
                            remaining
                        );
                    }
                    let span = SpanWidth::new(event.duration_days.min(remaining));

                    entries.push(RowEntry::Event { id: event.id, span });
                    for _ in 1..span.cells {
                        entries.push(RowEntry::Continuation { id: event.id });
                    }

                    placed.push((idx, day, span));
                    day += span.cells as usize;
                }
            }
        }

        FilledRow { entries, placed }
    }
}
