//! Day-cell information and styling
//!
//! Everything the renderer needs to decorate one `<td>` of the month
//! grid: the date, its day number and the CSS state classes.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{ViewMonth, ViewRange, GRID_CELLS};

/// One cell of the 6x7 month grid
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DayCell {
    /// 0-based cell index (week * 7 + weekday)
    pub index: usize,

    pub date: NaiveDate,

    /// Day of month shown in the `.date` title
    pub day_number: u32,

    /// Date belongs to the displayed month
    pub in_month: bool,

    pub today: bool,

    pub selected: bool,

    /// Cell is in the tab order (`tabindex="0"`)
    pub tab_stop: bool,
}

impl DayCell {
    /// CSS classes to apply to the cell
    pub fn classes(&self) -> Vec<String> {
        let mut classes = Vec::new();
        if self.today {
            classes.push("today".to_string());
        }
        if self.in_month {
            classes.push("in-month".to_string());
        }
        if self.selected {
            classes.push("selected".to_string());
        }
        classes
    }
}

/// Builder for the 42 day cells
pub struct DayCellBuilder<'a> {
    range: &'a ViewRange,
    view: ViewMonth,
}

impl<'a> DayCellBuilder<'a> {
    pub fn new(range: &'a ViewRange, view: ViewMonth) -> Self {
        Self { range, view }
    }

    /// Build all cells.
    ///
    /// With a visible selection the selected cell is the tab stop;
    /// otherwise the first day of the view month is.
    pub fn build(&self, today: NaiveDate, selected: Option<NaiveDate>) -> Vec<DayCell> {
        let selected_index = selected.and_then(|date| self.range.index_of(date));
        let tab_index = selected_index.or_else(|| self.range.index_of(self.view.first_day()));

        (0..GRID_CELLS)
            .map(|index| {
                let date = self.range.date_at(index);
                DayCell {
                    index,
                    date,
                    day_number: date.day(),
                    in_month: self.view.contains(date),
                    today: date == today,
                    selected: selected_index == Some(index),
                    tab_stop: tab_index == Some(index),
                }
            })
            .collect()
    }
}
