use chrono::{Datelike, Months, NaiveDate};

use crate::error::{GridError, GridResult};
use crate::layout_constants::COLUMNS;
use crate::types::CellKind;

/// Layout facts about one calendar month
///
/// All fields are computed eagerly by [`CalendarMonth::compute`]; the value is
/// immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarMonth {
    /// First day of the month
    pub first_of_month: NaiveDate,
    /// Weekday column of day 1 (Monday = 0 .. Sunday = 6)
    pub first_day_offset: u32,
    /// Days in the month, leap-year aware
    pub day_count: u32,
    /// Week rows the days occupy: ceil((first_day_offset + day_count) / 7)
    pub row_count: u32,
}

impl CalendarMonth {
    /// Compute the month layout for `year`/`month` (1-based month)
    pub fn compute(year: i32, month: u32) -> GridResult<Self> {
        let invalid = GridError::InvalidMonth { year, month };
        let first_of_month = NaiveDate::from_ymd_opt(year, month, 1).ok_or(invalid.clone())?;
        let next_month = first_of_month
            .checked_add_months(Months::new(1))
            .ok_or(invalid)?;

        let day_count = next_month.signed_duration_since(first_of_month).num_days() as u32;
        let first_day_offset = first_of_month.weekday().num_days_from_monday();
        let row_count = (first_day_offset + day_count).div_ceil(COLUMNS as u32);

        Ok(Self {
            first_of_month,
            first_day_offset,
            day_count,
            row_count,
        })
    }

    pub fn year(&self) -> i32 {
        self.first_of_month.year()
    }

    pub fn month(&self) -> u32 {
        self.first_of_month.month()
    }

    /// Last day of the month
    pub fn last_of_month(&self) -> NaiveDate {
        self.first_of_month
            .with_day(self.day_count)
            .unwrap_or(self.first_of_month)
    }

    /// Whether `date` falls inside this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// Classify an item index of this month's section
    pub fn cell_kind(&self, item: usize) -> CellKind {
        match item {
            0 => CellKind::LeadingPlaceholder,
            i if i <= self.day_count as usize => CellKind::Day(i as u32),
            _ => CellKind::TrailingPlaceholder,
        }
    }
}
