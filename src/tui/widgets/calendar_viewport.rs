/// CalendarViewport widget - the scrolling month grid
///
/// Renders a weekday label row, then every section intersecting the viewport at
/// the host's scroll offset: the month title above day 1's column, the day
/// numbers styled from the theme, and a row of indicator dots under each day
/// when the cells are tall enough. The transient month-name overlay is drawn
/// last, centered over the grid.

use chrono::Weekday;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};
use unicode_width::UnicodeWidthStr;

use crate::config::ThemeConfig;
use crate::layout::CellFrame;
use crate::layout_constants::COLUMNS;
use crate::tui::widgets::RenderableWidget;
use crate::types::GridCoordinate;
use crate::view::{CalendarView, CellContent, DayCell};

/// Width of a rendered day number
const DAY_NUMBER_WIDTH: i32 = 2;

/// Widget drawing a [`CalendarView`] at a given scroll offset
pub struct CalendarViewport<'a> {
    view: CalendarView<'a>,
    scroll_offset_y: f64,
    overlay: Option<&'a str>,
}

impl<'a> CalendarViewport<'a> {
    /// The view's layout must be sized to the area minus the weekday row
    pub fn new(view: CalendarView<'a>, scroll_offset_y: f64) -> Self {
        Self {
            view,
            scroll_offset_y,
            overlay: None,
        }
    }

    /// Show the month-name overlay
    pub fn with_overlay(mut self, text: Option<&'a str>) -> Self {
        self.overlay = text;
        self
    }

    fn render_weekdays(&self, area: Rect, buf: &mut Buffer, theme: &ThemeConfig) {
        let cell_width = self.view.layout().cell_size().width;
        let style = Style::default().fg(theme.label_fg).add_modifier(Modifier::DIM);

        let weekdays = std::iter::successors(Some(Weekday::Mon), |d| Some(d.succ()));
        for (column, weekday) in weekdays.take(COLUMNS).enumerate() {
            let x0 = (column as f64 * cell_width).round() as i32;
            let x1 = ((column + 1) as f64 * cell_width).round() as i32;
            let label: String = weekday.to_string().chars().take(2).collect();
            let x = x0 + ((x1 - x0 - DAY_NUMBER_WIDTH) / 2).max(0);
            put(area, buf, x, 0, &label, style);
        }
    }

    fn render_section(&self, section: usize, area: Rect, buf: &mut Buffer, theme: &ThemeConfig) {
        let layout = self.view.layout();
        let (Ok(month), Ok(header)) = (self.view.grid().month_at(section), self.view.header(section))
        else {
            return;
        };
        let top = layout.section_offset(section) - self.scroll_offset_y;

        let title_style = Style::default()
            .fg(if header.is_current_month {
                theme.today_fg
            } else {
                theme.label_fg
            })
            .add_modifier(Modifier::BOLD);
        let title_x = (header.center_x - header.title.width() as f64 / 2.0).max(0.0);
        put(
            area,
            buf,
            title_x.round() as i32,
            top.round() as i32,
            &header.title,
            title_style,
        );

        for item in 1..=month.day_count as usize {
            if let Ok(CellContent::Day(cell)) = self.view.cell(GridCoordinate::new(section, item)) {
                let frame = layout.frame_for(month, item);
                render_day(&cell, &frame, top, area, buf, theme);
            }
        }
    }

    fn render_overlay(&self, text: &str, area: Rect, buf: &mut Buffer, theme: &ThemeConfig) {
        let label = format!(" {} ", text);
        let x = (area.width as i32 - label.width() as i32) / 2;
        let y = area.height as i32 / 2;
        let style = Style::default()
            .fg(theme.background_fg)
            .bg(theme.label_fg)
            .add_modifier(Modifier::BOLD);
        put(area, buf, x.max(0), y, &label, style);
    }
}

/// Draw one day: the number, its selection circle and its indicator dots
fn render_day(
    cell: &DayCell,
    frame: &CellFrame,
    section_top: f64,
    area: Rect,
    buf: &mut Buffer,
    theme: &ThemeConfig,
) {
    let style = cell.style(theme);
    let x0 = frame.x.round() as i32;
    let x1 = (frame.x + frame.width).round() as i32;
    let y = (section_top + frame.y).round() as i32;
    let number_x = x0 + ((x1 - x0 - DAY_NUMBER_WIDTH) / 2).max(0);

    let mut number_style = Style::default().fg(style.number_fg);
    if style.bold {
        number_style = number_style.add_modifier(Modifier::BOLD);
    }
    if let Some(circle) = style.circle {
        let start = (number_x - 1).max(x0);
        let end = (number_x + DAY_NUMBER_WIDTH + 1).min(x1);
        let padding = " ".repeat((end - start).max(0) as usize);
        put(area, buf, start, y, &padding, Style::default().bg(circle));
        number_style = number_style.bg(circle);
    }
    put(area, buf, number_x, y, &format!("{:>2}", cell.day), number_style);

    if frame.height < 2.0 || cell.indicator_colors.is_empty() {
        return;
    }
    let width = (x1 - x0).max(0) as usize;
    let count = cell.indicator_colors.len().min(width);
    let dots_x = x0 + ((width - count) / 2) as i32;
    for (i, color) in cell.indicator_colors.iter().take(count).enumerate() {
        put(area, buf, dots_x + i as i32, y + 1, "•", Style::default().fg(*color));
    }
}

/// Write `text` at a position relative to `area`, clipped to it
fn put(area: Rect, buf: &mut Buffer, x: i32, y: i32, text: &str, style: Style) {
    if x < 0 || y < 0 || x >= area.width as i32 || y >= area.height as i32 {
        return;
    }
    let max_width = (area.width as i32 - x) as usize;
    buf.set_stringn(area.x + x as u16, area.y + y as u16, text, max_width, style);
}

impl RenderableWidget for CalendarViewport<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &ThemeConfig) {
        if area.width == 0 || area.height < 2 {
            return;
        }

        self.render_weekdays(area, buf, theme);

        let grid_area = Rect {
            y: area.y + 1,
            height: area.height - 1,
            ..area
        };
        for section in self.view.visible_sections_at(self.scroll_offset_y) {
            self.render_section(section, grid_area, buf, theme);
        }

        if let Some(text) = self.overlay {
            self.render_overlay(text, grid_area, buf, theme);
        }
    }
}
