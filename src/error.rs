use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised by the calendar grid
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("Section {section} is outside the calendar grid (0..{len})")]
    OutOfRange { section: usize, len: usize },

    #[error("Invalid calendar month: {year}-{month:02}")]
    InvalidMonth { year: i32, month: u32 },

    #[error("Date {0} is outside the calendar grid")]
    DateOutOfRange(NaiveDate),

    #[error("Viewport {width}x{height} cannot hold a header and six rows")]
    InvalidViewport { width: f64, height: f64 },
}

/// Result type for grid operations
pub type GridResult<T> = Result<T, GridError>;
