use chrono::NaiveDate;

/// Date string styles used by the calendar and its hosts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// Mon, January 13
    Short,
    /// Monday, January 13, 2020
    Full,
    /// January 13, 2020
    Long,
    /// January 13
    DayAndMonth,
    /// January 2020
    MonthAndYear,
}

impl DateStyle {
    fn pattern(&self) -> &'static str {
        match self {
            DateStyle::Short => "%a, %B %-d",
            DateStyle::Full => "%A, %B %-d, %Y",
            DateStyle::Long => "%B %-d, %Y",
            DateStyle::DayAndMonth => "%B %-d",
            DateStyle::MonthAndYear => "%B %Y",
        }
    }
}

/// Format a date in the given style
pub fn format_date(date: NaiveDate, style: DateStyle) -> String {
    date.format(style.pattern()).to_string()
}

/// Standalone month name with its first letter capitalized
pub fn month_name(date: NaiveDate) -> String {
    capitalize(&date.format("%B").to_string())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
