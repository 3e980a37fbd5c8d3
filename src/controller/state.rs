use crate::error::GridResult;
use crate::grid::MonthGrid;
use crate::layout::GridLayout;
use crate::types::{CalendarConfig, GridCoordinate};

/// Scrolling mode of the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMode {
    /// Continuous scrolling; drag ends may flash the month name
    FreeScroll,
    /// Scrolling snaps to whole months and picks a day on every page
    Paging,
}

/// Mutable selection and scroll state of one calendar control
///
/// `picked_cell` always addresses a real day. `today_cell` is fixed at
/// construction. The current section is derived from `scroll_offset_y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarState {
    pub picked_cell: GridCoordinate,
    pub today_cell: GridCoordinate,
    pub is_paging_enabled: bool,
    pub scroll_offset_y: f64,
}

impl CalendarState {
    /// Initial state: today picked and scrolled into view
    pub fn initial(
        grid: &MonthGrid,
        layout: &GridLayout,
        config: &CalendarConfig,
    ) -> GridResult<Self> {
        let today_cell = grid.coordinate_for(config.today)?;
        Ok(Self {
            picked_cell: today_cell,
            today_cell,
            is_paging_enabled: config.paging_enabled,
            scroll_offset_y: layout.section_offset(today_cell.section),
        })
    }

    pub fn mode(&self) -> ScrollMode {
        if self.is_paging_enabled {
            ScrollMode::Paging
        } else {
            ScrollMode::FreeScroll
        }
    }

    /// Section nearest to the scroll offset, clamped into the grid
    pub fn current_section(&self, grid: &MonthGrid, layout: &GridLayout) -> usize {
        let last = grid.section_count().saturating_sub(1);
        layout.section_at_offset(self.scroll_offset_y).min(last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn setup() -> (MonthGrid, GridLayout, CalendarConfig) {
        let grid = MonthGrid::build(2018, 10).unwrap();
        let layout = GridLayout::new(350.0, 280.0).unwrap();
        let today = NaiveDate::from_ymd_opt(2019, 3, 26).unwrap();
        (grid, layout, CalendarConfig::new(2018, 10, today))
    }

    #[test]
    fn test_initial_state_picks_today() {
        let (grid, layout, config) = setup();
        let state = CalendarState::initial(&grid, &layout, &config).unwrap();

        assert_eq!(state.today_cell, GridCoordinate::new(14, 26));
        assert_eq!(state.picked_cell, state.today_cell);
        assert_eq!(state.mode(), ScrollMode::FreeScroll);
        assert_eq!(state.current_section(&grid, &layout), 14);
    }

    #[test]
    fn test_initial_state_rejects_today_outside_grid() {
        let (grid, layout, _) = setup();
        let config = CalendarConfig::new(2018, 10, NaiveDate::from_ymd_opt(2030, 1, 1).unwrap());
        assert!(CalendarState::initial(&grid, &layout, &config).is_err());
    }

    #[test]
    fn test_current_section_clamps_to_grid() {
        let (grid, layout, config) = setup();
        let mut state = CalendarState::initial(&grid, &layout, &config).unwrap();

        state.scroll_offset_y = -400.0;
        assert_eq!(state.current_section(&grid, &layout), 0);

        state.scroll_offset_y = layout.section_offset(500);
        assert_eq!(state.current_section(&grid, &layout), 120);
    }

    #[test]
    fn test_paging_mode() {
        let (grid, layout, config) = setup();
        let state = CalendarState::initial(&grid, &layout, &config.with_paging(true)).unwrap();
        assert_eq!(state.mode(), ScrollMode::Paging);
    }
}
