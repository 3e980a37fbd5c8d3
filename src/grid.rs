use chrono::{Datelike, NaiveDate, TimeDelta};
use tracing::debug;

use crate::error::{GridError, GridResult};
use crate::month::CalendarMonth;
use crate::types::GridCoordinate;

/// Precomputed, immutable sequence of months backing the calendar
///
/// Section `i` is exactly `i` months after January of `initial_year`. The grid holds
/// `number_of_years * 12 + 1` months and is never resized after construction, so
/// it can be shared by reference (or `Arc`) without synchronization.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid {
    initial_year: i32,
    months: Vec<CalendarMonth>,
}

impl MonthGrid {
    /// Build the grid starting at January of `initial_year`
    pub fn build(initial_year: i32, number_of_years: u32) -> GridResult<Self> {
        let total = number_of_years as usize * 12 + 1;
        let months = (0..total)
            .map(|index| {
                let year = initial_year + (index / 12) as i32;
                let month = (index % 12) as u32 + 1;
                CalendarMonth::compute(year, month)
            })
            .collect::<GridResult<Vec<_>>>()?;

        debug!(
            "GRID: Built {} sections starting {}-01",
            months.len(),
            initial_year
        );

        Ok(Self {
            initial_year,
            months,
        })
    }

    pub fn initial_year(&self) -> i32 {
        self.initial_year
    }

    pub fn section_count(&self) -> usize {
        self.months.len()
    }

    pub fn months(&self) -> &[CalendarMonth] {
        &self.months
    }

    /// Month backing `section`
    pub fn month_at(&self, section: usize) -> GridResult<&CalendarMonth> {
        self.months.get(section).ok_or(GridError::OutOfRange {
            section,
            len: self.months.len(),
        })
    }

    /// Date shown at `coordinate`: first of the section's month plus `item - 1` days
    ///
    /// The item is not checked against the month's day count. Placeholder items
    /// resolve to dates in the neighbouring months.
    pub fn date_for(&self, coordinate: GridCoordinate) -> GridResult<NaiveDate> {
        let month = self.month_at(coordinate.section)?;
        let out_of_range = GridError::OutOfRange {
            section: coordinate.section,
            len: self.months.len(),
        };
        let delta = i64::try_from(coordinate.item)
            .ok()
            .and_then(|item| TimeDelta::try_days(item - 1))
            .ok_or_else(|| out_of_range.clone())?;
        month
            .first_of_month
            .checked_add_signed(delta)
            .ok_or(out_of_range)
    }

    /// Coordinate of the day cell showing `date`
    pub fn coordinate_for(&self, date: NaiveDate) -> GridResult<GridCoordinate> {
        let months_from_start =
            (date.year() as i64 - self.initial_year as i64) * 12 + date.month0() as i64;
        if months_from_start < 0 || months_from_start >= self.months.len() as i64 {
            return Err(GridError::DateOutOfRange(date));
        }

        Ok(GridCoordinate::new(
            months_from_start as usize,
            date.day() as usize,
        ))
    }

    /// Section containing `date`, if the grid covers it
    pub fn section_for(&self, date: NaiveDate) -> Option<usize> {
        self.coordinate_for(date).ok().map(|c| c.section)
    }
}
