use chrono::NaiveDate;

/// Address of a single cell in the calendar grid
///
/// `section` is the month index inside the [`MonthGrid`](crate::grid::MonthGrid),
/// `item` the cell index inside that section. Item 0 is the leading placeholder,
/// items `1..=day_count` are days of the month, anything above is trailing padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct GridCoordinate {
    pub section: usize,
    pub item: usize,
}

impl GridCoordinate {
    pub const fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }
}

impl std::fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.section, self.item)
    }
}

/// What a given item index represents inside its section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// Variable-width spacer shifting day 1 to its weekday column
    LeadingPlaceholder,
    /// A real day; carries the day of month
    Day(u32),
    /// Padding after the last day, completing the six-row grid
    TrailingPlaceholder,
}

impl CellKind {
    pub fn is_day(&self) -> bool {
        matches!(self, CellKind::Day(_))
    }
}

/// Construction-time configuration of a calendar control
///
/// Immutable once the control is built. `today` is injected rather than read
/// from the wall clock so hosts and tests control what "today" means.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarConfig {
    pub initial_year: i32,
    pub number_of_years: u32,
    pub today: NaiveDate,
    pub paging_enabled: bool,
}

impl CalendarConfig {
    pub fn new(initial_year: i32, number_of_years: u32, today: NaiveDate) -> Self {
        Self {
            initial_year,
            number_of_years,
            today,
            paging_enabled: false,
        }
    }

    pub fn with_paging(mut self, enabled: bool) -> Self {
        self.paging_enabled = enabled;
        self
    }
}
