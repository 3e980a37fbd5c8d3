//! Shared layout constants for the calendar grid.
//!
//! The grid is always laid out as seven weekday columns and six week rows,
//! whatever the month.

/// Number of weekday columns in a section
pub const COLUMNS: usize = 7;

/// Number of week rows rendered per section
pub const ROWS: usize = 6;

/// Height of the month header above each section (points)
pub const HEADER_HEIGHT: f64 = 40.0;

/// Subtracted from the computed cell width so that seven cells never overflow a row
pub const CELL_WIDTH_EPSILON: f64 = 0.00001;

/// Leading placeholder plus the 36 cell slots that reach into the sixth row.
/// Reduced by the first-day offset, since the placeholder already spans those slots.
pub const PADDED_ITEM_BASE: usize = 1 + (ROWS - 1) * COLUMNS + 1;

/// Drag velocity (units per ms) above which a free-scroll drag shows the month name
pub const FLING_VELOCITY_THRESHOLD: f64 = 1.0;

/// Maximum number of indicator badges shown on a day cell
pub const MAX_INDICATORS: usize = 6;
