pub mod month;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};

/// Resolve optional year/month arguments to the first day of that month
///
/// Missing components default to today's. Returns an error for a month outside
/// 1..=12 or a year chrono cannot represent.
pub fn resolve_month(year: Option<i32>, month: Option<u32>, today: NaiveDate) -> Result<NaiveDate> {
    let year = year.unwrap_or_else(|| today.year());
    let month = month.unwrap_or_else(|| today.month());
    NaiveDate::from_ymd_opt(year, month, 1)
        .with_context(|| format!("Invalid month {}-{:02}. Use --month 1..12", year, month))
}
