use anyhow::{Context, Result};
use chrono::{NaiveDate, Weekday};
use tracing::debug;

use crate::config::Config;
use crate::controller::CalendarState;
use crate::data_provider::ConfigDataProvider;
use crate::formatting::{format_date, DateStyle};
use crate::grid::MonthGrid;
use crate::layout::GridLayout;
use crate::layout_constants::{COLUMNS, ROWS};
use crate::types::GridCoordinate;
use crate::view::{CalendarView, CellContent};

/// Characters per day column: two digits, a marker, a space
const COLUMN_WIDTH: usize = 4;

/// Print the month containing `first_of_month` as a text grid
pub fn run(config: &Config, today: NaiveDate, first_of_month: NaiveDate) -> Result<()> {
    print!("{}", month_text(config, today, first_of_month)?);
    Ok(())
}

/// Text grid of the month containing `first_of_month`
///
/// Only the requested month has to be inside the configured range. When today
/// is not, the month is rendered without a today marker.
pub fn month_text(
    config: &Config,
    today: NaiveDate,
    first_of_month: NaiveDate,
) -> Result<String> {
    let calendar_config = config.calendar_config(today);
    let grid = MonthGrid::build(calendar_config.initial_year, calendar_config.number_of_years)?;
    let layout = GridLayout::with_header_height(
        (COLUMNS * COLUMN_WIDTH) as f64,
        1.0 + ROWS as f64,
        1.0,
    )?;

    let section = grid.section_for(first_of_month).with_context(|| {
        format!(
            "{} is outside the configured calendar range",
            format_date(first_of_month, DateStyle::MonthAndYear)
        )
    })?;

    let state = match CalendarState::initial(&grid, &layout, &calendar_config) {
        Ok(state) => Some(state),
        Err(e) => {
            debug!("MONTH: No today marker: {}", e);
            None
        }
    };

    let data_provider = ConfigDataProvider::new(config);
    let view = match &state {
        Some(state) => CalendarView::new(&grid, &layout, state, &data_provider),
        None => CalendarView::without_selection(&grid, &layout, &data_provider),
    };
    render_month(&view, section)
}

/// Render one section as text
///
/// Always six week rows, whatever the month, so consecutive months line up.
/// `*` marks today and `+` marks days with indicators.
pub fn render_month(view: &CalendarView, section: usize) -> Result<String> {
    let month = *view.grid().month_at(section)?;
    let line_width = COLUMNS * COLUMN_WIDTH - 1;
    let mut output = String::new();

    let title = format_date(month.first_of_month, DateStyle::MonthAndYear);
    output.push_str(format!("{:^width$}", title, width = line_width).trim_end());
    output.push('\n');

    let weekdays: Vec<String> = std::iter::successors(Some(Weekday::Mon), |d| Some(d.succ()))
        .take(COLUMNS)
        .map(weekday_label)
        .collect();
    output.push_str(&weekdays.join("  "));
    output.push('\n');

    for row in 0..ROWS {
        let mut line = String::new();
        for column in 0..COLUMNS {
            let item = view.layout().item_at(&month, row, column);
            let content = match item {
                Some(item) => Some(view.cell(GridCoordinate::new(section, item))?),
                None => None,
            };

            match content {
                Some(CellContent::Day(cell)) => {
                    let marker = if cell.is_today {
                        '*'
                    } else if !cell.indicator_colors.is_empty() {
                        '+'
                    } else {
                        ' '
                    };
                    line.push_str(&format!("{:>2}{} ", cell.day, marker));
                }
                _ => line.push_str(&" ".repeat(COLUMN_WIDTH)),
            }
        }
        output.push_str(line.trim_end());
        output.push('\n');
    }

    Ok(output)
}

fn weekday_label(weekday: Weekday) -> String {
    weekday.to_string().chars().take(2).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IndicatorConfig;
    use crate::controller::CalendarRuntime;
    use crate::types::CalendarConfig;
    use ratatui::style::Color;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn runtime() -> CalendarRuntime {
        let config = CalendarConfig::new(2018, 10, date(2019, 3, 26));
        let layout = GridLayout::with_header_height(28.0, 7.0, 1.0).unwrap();
        CalendarRuntime::new(&config, layout).unwrap()
    }

    #[test]
    fn test_render_march_2019() {
        let runtime = runtime();
        let config = Config {
            indicators: vec![IndicatorConfig {
                date: date(2019, 3, 4),
                colors: vec![Color::Red],
            }],
            ..Config::default()
        };
        let data_provider = ConfigDataProvider::new(&config);
        let view = runtime.view(&data_provider);

        let text = render_month(&view, 14).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2 + ROWS);
        assert_eq!(lines[0].trim(), "March 2019");
        assert_eq!(lines[1], "Mo  Tu  We  Th  Fr  Sa  Su");
        assert_eq!(lines[2], "                 1   2   3");
        assert_eq!(lines[3], " 4+  5   6   7   8   9  10");
        assert_eq!(lines[6], "25  26* 27  28  29  30  31");
        assert_eq!(lines[7], "");
    }

    #[test]
    fn test_render_six_row_month() {
        let runtime = runtime();
        let view = runtime.view(&crate::host::NoDataSource);

        // September 2019 starts on Sunday and spills into a sixth row
        let text = render_month(&view, 20).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[2], "                         1");
        assert_eq!(lines[7], "30");
    }

    #[test]
    fn test_month_text_with_today_outside_range() {
        let config = Config::default();
        let text = month_text(&config, date(2035, 6, 1), date(2019, 3, 1)).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0].trim(), "March 2019");
        assert_eq!(lines[6], "25  26  27  28  29  30  31");
        assert!(!text.contains('*'));
    }

    #[test]
    fn test_month_text_marks_today_in_range() {
        let config = Config::default();
        let text = month_text(&config, date(2019, 3, 26), date(2019, 3, 1)).unwrap();
        assert_eq!(text.lines().nth(6), Some("25  26* 27  28  29  30  31"));
    }

    #[test]
    fn test_month_text_outside_range_fails() {
        let config = Config::default();
        assert!(month_text(&config, date(2019, 3, 26), date(2040, 1, 1)).is_err());
    }

    #[test]
    fn test_render_unknown_section_fails() {
        let runtime = runtime();
        let view = runtime.view(&crate::host::NoDataSource);
        assert!(render_month(&view, 500).is_err());
    }
}
