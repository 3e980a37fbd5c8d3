//! Interfaces between the calendar control and its host application.

use chrono::NaiveDate;
use ratatui::style::Color;

/// Per-day display data supplied by the host
///
/// Both methods have defaults, so a host only implements what it has data for.
pub trait CalendarDataSource {
    /// Whether `date` should be styled as a weekend/day off
    fn is_weekend(&self, _date: NaiveDate) -> bool {
        false
    }

    /// Indicator badge colors for `date`, in display order
    ///
    /// Only the first [`MAX_INDICATORS`](crate::layout_constants::MAX_INDICATORS)
    /// are shown.
    fn indicator_colors(&self, _date: NaiveDate) -> Vec<Color> {
        Vec::new()
    }
}

/// Data source for hosts without per-day data
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDataSource;

impl CalendarDataSource for NoDataSource {}

/// Notifications the calendar sends to its host
pub trait CalendarDelegate {
    /// The picked day changed
    fn on_cell_picked(&mut self, _date: NaiveDate) {}

    /// A section (month) became the displayed one
    fn on_section_changed(&mut self, _date: NaiveDate, _rows: u32) {}

    /// Paging mode was set
    fn on_paging_changed(&mut self, _enabled: bool) {}
}
