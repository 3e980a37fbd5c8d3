//! Render-ready description of the calendar.
//!
//! [`CalendarView`] combines the month grid, the layout, the selection state and
//! the host's per-day data into plain values a renderer can draw directly.

use chrono::NaiveDate;
use ratatui::style::Color;
use std::ops::Range;

use crate::config::ThemeConfig;
use crate::controller::CalendarState;
use crate::error::GridResult;
use crate::formatting::month_name;
use crate::grid::MonthGrid;
use crate::host::CalendarDataSource;
use crate::layout::{CellSize, GridLayout};
use crate::layout_constants::MAX_INDICATORS;
use crate::types::{CellKind, GridCoordinate};

/// Contents of one grid cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellContent {
    /// Empty, non-interactive spacer
    Placeholder { width: f64 },
    Day(DayCell),
}

/// Data for a day cell
#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub day: u32,
    /// At most [`MAX_INDICATORS`] colors
    pub indicator_colors: Vec<Color>,
    pub is_picked: bool,
    pub is_today: bool,
    pub is_weekend: bool,
}

/// Colors and weight used to draw a day cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub number_fg: Color,
    /// Fill of the selection circle, if the cell is picked
    pub circle: Option<Color>,
    pub bold: bool,
}

impl DayCell {
    /// Map the cell's flags to its style
    ///
    /// Picked cells get a filled circle (today's color when the pick is today).
    /// Unpicked, today is bold in today's color and weekends are dimmed.
    pub fn style(&self, theme: &ThemeConfig) -> CellStyle {
        if self.is_picked {
            let (circle, number_fg) = if self.is_today {
                (theme.today_fg, theme.picked_today_fg)
            } else {
                (theme.label_fg, theme.background_fg)
            };
            return CellStyle {
                number_fg,
                circle: Some(circle),
                bold: true,
            };
        }

        if self.is_today {
            CellStyle {
                number_fg: theme.today_fg,
                circle: None,
                bold: true,
            }
        } else {
            CellStyle {
                number_fg: if self.is_weekend {
                    theme.weekend_fg
                } else {
                    theme.label_fg
                },
                circle: None,
                bold: false,
            }
        }
    }
}

/// Month label above a section
#[derive(Debug, Clone, PartialEq)]
pub struct SectionHeader {
    pub title: String,
    /// The section is today's month (drawn in today's color)
    pub is_current_month: bool,
    /// Horizontal center of the label, aligned with day 1
    pub center_x: f64,
}

/// Read-only view over a calendar for rendering
///
/// A view without selection state marks no cell as picked or today and
/// reports the viewport at offset zero.
pub struct CalendarView<'a> {
    grid: &'a MonthGrid,
    layout: &'a GridLayout,
    state: Option<&'a CalendarState>,
    data_source: &'a dyn CalendarDataSource,
}

impl<'a> CalendarView<'a> {
    pub fn new(
        grid: &'a MonthGrid,
        layout: &'a GridLayout,
        state: &'a CalendarState,
        data_source: &'a dyn CalendarDataSource,
    ) -> Self {
        Self {
            grid,
            layout,
            state: Some(state),
            data_source,
        }
    }

    /// View of the grid alone, for months shown outside a running control
    pub fn without_selection(
        grid: &'a MonthGrid,
        layout: &'a GridLayout,
        data_source: &'a dyn CalendarDataSource,
    ) -> Self {
        Self {
            grid,
            layout,
            state: None,
            data_source,
        }
    }

    pub fn grid(&self) -> &MonthGrid {
        self.grid
    }

    pub fn layout(&self) -> &GridLayout {
        self.layout
    }

    pub fn state(&self) -> Option<&CalendarState> {
        self.state
    }

    pub fn section_count(&self) -> usize {
        self.grid.section_count()
    }

    pub fn item_count(&self, section: usize) -> GridResult<usize> {
        Ok(self.layout.item_count(self.grid.month_at(section)?))
    }

    pub fn size_for(&self, coordinate: GridCoordinate) -> GridResult<CellSize> {
        let month = self.grid.month_at(coordinate.section)?;
        Ok(self.layout.size_for(month, coordinate.item))
    }

    /// Sections at least partly inside the viewport at the current scroll offset
    pub fn visible_sections(&self) -> Range<usize> {
        self.visible_sections_at(self.state.map_or(0.0, |state| state.scroll_offset_y))
    }

    /// Sections at least partly inside the viewport when scrolled to `offset_y`
    ///
    /// Hosts animating a scroll draw at their own offset, ahead of or behind the
    /// last one reported to the controller.
    pub fn visible_sections_at(&self, offset_y: f64) -> Range<usize> {
        let height = self.layout.section_height();
        let top = offset_y.max(0.0);
        let bottom = top + self.layout.viewport_height();

        let first = (top / height).floor() as usize;
        let last = ((bottom / height).ceil() as usize).min(self.grid.section_count());
        first.min(last)..last
    }

    /// Contents of the cell at `coordinate`
    pub fn cell(&self, coordinate: GridCoordinate) -> GridResult<CellContent> {
        let month = self.grid.month_at(coordinate.section)?;
        match month.cell_kind(coordinate.item) {
            CellKind::Day(day) => {
                let date = self.grid.date_for(coordinate)?;
                let mut indicator_colors = self.data_source.indicator_colors(date);
                indicator_colors.truncate(MAX_INDICATORS);

                Ok(CellContent::Day(DayCell {
                    date,
                    day,
                    indicator_colors,
                    is_picked: self.state.is_some_and(|state| state.picked_cell == coordinate),
                    is_today: self.state.is_some_and(|state| state.today_cell == coordinate),
                    is_weekend: self.data_source.is_weekend(date),
                }))
            }
            CellKind::LeadingPlaceholder | CellKind::TrailingPlaceholder => {
                Ok(CellContent::Placeholder {
                    width: self.layout.size_for(month, coordinate.item).width,
                })
            }
        }
    }

    /// Header of `section`
    pub fn header(&self, section: usize) -> GridResult<SectionHeader> {
        let month = self.grid.month_at(section)?;
        Ok(SectionHeader {
            title: month_name(month.first_of_month),
            is_current_month: self
                .state
                .is_some_and(|state| state.today_cell.section == section),
            center_x: self.layout.header_center_offset(month),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::NoDataSource;
    use crate::types::CalendarConfig;
    use chrono::{Datelike, Weekday};

    struct TestData;

    impl CalendarDataSource for TestData {
        fn is_weekend(&self, date: NaiveDate) -> bool {
            matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
        }

        fn indicator_colors(&self, date: NaiveDate) -> Vec<Color> {
            if date.day() == 1 {
                vec![Color::Red; 8]
            } else {
                vec![Color::Blue]
            }
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn setup() -> (MonthGrid, GridLayout, CalendarState) {
        let grid = MonthGrid::build(2018, 10).unwrap();
        let layout = GridLayout::new(350.0, 280.0).unwrap();
        let config = CalendarConfig::new(2018, 10, date(2019, 3, 26));
        let mut state = CalendarState::initial(&grid, &layout, &config).unwrap();
        state.picked_cell = GridCoordinate::new(14, 2);
        (grid, layout, state)
    }

    #[test]
    fn test_day_cell_flags() {
        let (grid, layout, state) = setup();
        let view = CalendarView::new(&grid, &layout, &state, &TestData);

        // March 2 2019 was a Saturday
        match view.cell(GridCoordinate::new(14, 2)).unwrap() {
            CellContent::Day(cell) => {
                assert_eq!(cell.date, date(2019, 3, 2));
                assert_eq!(cell.day, 2);
                assert!(cell.is_picked);
                assert!(!cell.is_today);
                assert!(cell.is_weekend);
                assert_eq!(cell.indicator_colors, vec![Color::Blue]);
            }
            other => panic!("Expected day cell, got {:?}", other),
        }

        match view.cell(GridCoordinate::new(14, 26)).unwrap() {
            CellContent::Day(cell) => {
                assert!(cell.is_today);
                assert!(!cell.is_picked);
                assert!(!cell.is_weekend);
            }
            other => panic!("Expected day cell, got {:?}", other),
        }
    }

    #[test]
    fn test_indicators_are_capped() {
        let (grid, layout, state) = setup();
        let view = CalendarView::new(&grid, &layout, &state, &TestData);

        let CellContent::Day(cell) = view.cell(GridCoordinate::new(14, 1)).unwrap() else {
            panic!("Expected day cell");
        };
        assert_eq!(cell.indicator_colors.len(), MAX_INDICATORS);
    }

    #[test]
    fn test_placeholder_cells() {
        let (grid, layout, state) = setup();
        let view = CalendarView::new(&grid, &layout, &state, &NoDataSource);

        // March 2019 starts on Friday: four cells of leading space
        let leading = view.cell(GridCoordinate::new(14, 0)).unwrap();
        assert_eq!(
            leading,
            CellContent::Placeholder {
                width: layout.cell_size().width * 4.0
            }
        );

        let trailing = view.cell(GridCoordinate::new(14, 32)).unwrap();
        assert!(matches!(trailing, CellContent::Placeholder { .. }));
        assert_eq!(view.item_count(14).unwrap(), 33);
        assert!(view.cell(GridCoordinate::new(121, 1)).is_err());
    }

    #[test]
    fn test_default_data_source() {
        let (grid, layout, state) = setup();
        let view = CalendarView::new(&grid, &layout, &state, &NoDataSource);

        let CellContent::Day(cell) = view.cell(GridCoordinate::new(14, 2)).unwrap() else {
            panic!("Expected day cell");
        };
        assert!(!cell.is_weekend);
        assert!(cell.indicator_colors.is_empty());
    }

    #[test]
    fn test_header() {
        let (grid, layout, state) = setup();
        let view = CalendarView::new(&grid, &layout, &state, &NoDataSource);

        let header = view.header(14).unwrap();
        assert_eq!(header.title, "March");
        assert!(header.is_current_month);
        let width = layout.cell_size().width;
        assert_eq!(header.center_x, 4.0 * width + width / 2.0);

        assert!(!view.header(15).unwrap().is_current_month);
    }

    #[test]
    fn test_visible_sections() {
        let (grid, layout, mut state) = setup();
        {
            let view = CalendarView::new(&grid, &layout, &state, &NoDataSource);
            // Exactly aligned on section 14
            assert_eq!(view.visible_sections(), 14..15);
        }

        state.scroll_offset_y = layout.section_offset(14) + 100.0;
        let view = CalendarView::new(&grid, &layout, &state, &NoDataSource);
        assert_eq!(view.visible_sections(), 14..16);
    }

    #[test]
    fn test_view_without_selection() {
        let (grid, layout, _) = setup();
        let view = CalendarView::without_selection(&grid, &layout, &TestData);

        let CellContent::Day(cell) = view.cell(GridCoordinate::new(14, 26)).unwrap() else {
            panic!("Expected day cell");
        };
        assert_eq!(cell.date, date(2019, 3, 26));
        assert!(!cell.is_today);
        assert!(!cell.is_picked);
        assert!(!view.header(14).unwrap().is_current_month);
        assert_eq!(view.visible_sections().start, 0);
    }

    #[test]
    fn test_cell_style_mapping() {
        let theme = ThemeConfig::default();
        let base = DayCell {
            date: date(2019, 3, 26),
            day: 26,
            indicator_colors: Vec::new(),
            is_picked: false,
            is_today: false,
            is_weekend: false,
        };

        let plain = base.style(&theme);
        assert_eq!(plain.number_fg, theme.label_fg);
        assert_eq!(plain.circle, None);
        assert!(!plain.bold);

        let weekend = DayCell { is_weekend: true, ..base.clone() }.style(&theme);
        assert_eq!(weekend.number_fg, theme.weekend_fg);

        let today = DayCell { is_today: true, ..base.clone() }.style(&theme);
        assert_eq!(today.number_fg, theme.today_fg);
        assert!(today.bold);

        let picked = DayCell { is_picked: true, ..base.clone() }.style(&theme);
        assert_eq!(picked.circle, Some(theme.label_fg));
        assert_eq!(picked.number_fg, theme.background_fg);

        let picked_today = DayCell {
            is_picked: true,
            is_today: true,
            is_weekend: true,
            ..base
        }
        .style(&theme);
        assert_eq!(picked_today.circle, Some(theme.today_fg));
        assert_eq!(picked_today.number_fg, theme.picked_today_fg);
    }
}
