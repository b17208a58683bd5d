//! View month and the visible 6-week range
//!
//! The month view always renders 42 consecutive days starting on the
//! Sunday on or before the first day of the displayed month.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Number of weeks in the month grid
pub const WEEKS: usize = 6;

/// Days per week (Sunday first)
pub const DAYS_PER_WEEK: usize = 7;

/// Total cells in the month grid
pub const GRID_CELLS: usize = WEEKS * DAYS_PER_WEEK;

/// Column of a date within its Sunday-first week (Sunday = 0)
pub fn day_of_week(date: NaiveDate) -> usize {
    date.weekday().num_days_from_sunday() as usize
}

/// The displayed calendar month
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ViewMonth {
    pub year: i32,
    /// 1-based month number
    pub month: u32,
}

impl ViewMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, ConfigError> {
        if !(1..=12).contains(&month) || NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(ConfigError::InvalidMonth(format!("{:04}-{:02}", year, month)));
        }
        Ok(Self { year, month })
    }

    /// Month containing the given date
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// First day of the month
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Value for the `<input type="month">` title (`YYYY-MM`)
    pub fn title(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    /// True when the date falls inside this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Visible 42-day range for this month
    pub fn view_range(&self) -> ViewRange {
        ViewRange::for_month(*self)
    }
}

/// The 42 visible days, `[first, last]`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewRange {
    /// First visible day (always a Sunday)
    pub first: NaiveDate,

    /// Last visible day (always a Saturday, 41 days after `first`)
    pub last: NaiveDate,
}

impl ViewRange {
    pub fn for_month(month: ViewMonth) -> Self {
        let first_of_month = month.first_day();
        let offset = day_of_week(first_of_month) as i64;
        Self::starting(first_of_month - Duration::days(offset))
    }

    fn starting(first: NaiveDate) -> Self {
        Self {
            first,
            last: first + Duration::days(GRID_CELLS as i64 - 1),
        }
    }

    /// Last visible day
    pub fn last(&self) -> NaiveDate {
        self.last
    }

    /// 00:00 of the first visible day
    pub fn first_instant(&self) -> NaiveDateTime {
        self.first.and_time(NaiveTime::MIN)
    }

    /// 23:59:59.999 of the last visible day
    pub fn last_instant(&self) -> NaiveDateTime {
        let end_of_day = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
        self.last().and_time(end_of_day)
    }

    /// Date shown in the given cell
    pub fn date_at(&self, index: usize) -> NaiveDate {
        self.first + Duration::days(index as i64)
    }

    /// Cell showing the given date, if it is visible
    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        let offset = (date - self.first).num_days();
        if (0..GRID_CELLS as i64).contains(&offset) {
            Some(offset as usize)
        } else {
            None
        }
    }

    /// First day of the given week row (0..6)
    pub fn week_start(&self, week: usize) -> NaiveDate {
        self.date_at(week * DAYS_PER_WEEK)
    }

    /// True when `[start, end)` intersects the visible range
    pub fn intersects(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        end >= self.first_instant() && start < self.last_instant()
    }
}
