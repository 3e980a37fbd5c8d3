use tracing::{debug, trace, warn};

use super::action::CalendarAction;
use super::effect::{Effect, ViewEffect};
use super::state::CalendarState;
use crate::grid::MonthGrid;
use crate::layout::GridLayout;
use crate::layout_constants::FLING_VELOCITY_THRESHOLD;
use crate::types::GridCoordinate;

/// Pure state reducer for the calendar
///
/// Takes the current state and an action, returns the new state and the effect
/// describing every notification and view update the transition causes. Nothing
/// is executed here; see [`CalendarRuntime`](super::CalendarRuntime).
///
/// A drag past the last month is clamped. A tap, pick or scroll naming a section
/// outside the grid is a host bug: debug builds assert, release builds log it and
/// ignore the action.
pub fn reduce(
    state: CalendarState,
    action: &CalendarAction,
    grid: &MonthGrid,
    layout: &GridLayout,
) -> (CalendarState, Effect) {
    match action {
        CalendarAction::TapCell(coordinate) => handle_tap(state, *coordinate, grid, layout),
        CalendarAction::Scrolled { offset_y } => handle_scrolled(state, *offset_y, grid, layout),
        CalendarAction::DragEnded {
            target_offset_y,
            velocity_y,
        } => handle_drag_ended(state, *target_offset_y, *velocity_y, grid, layout),
        CalendarAction::SetPagingEnabled(enabled) => {
            handle_set_paging(state, *enabled, grid, layout)
        }
        CalendarAction::ScrollToSection { section, animated } => {
            let mut new_state = state;
            let effect = scroll_to(&mut new_state, *section, *animated, grid, layout);
            (new_state, effect)
        }
        CalendarAction::JumpToToday => handle_jump_to_today(state, grid, layout),
        // Layout changes are owned by the runtime
        CalendarAction::ViewportResized { .. } => (state, Effect::None),
    }
}

fn handle_tap(
    state: CalendarState,
    coordinate: GridCoordinate,
    grid: &MonthGrid,
    layout: &GridLayout,
) -> (CalendarState, Effect) {
    debug_assert!(
        coordinate.section < grid.section_count(),
        "Tap at {} is outside the calendar grid",
        coordinate
    );
    let month = match grid.month_at(coordinate.section) {
        Ok(month) => month,
        Err(e) => {
            warn!("TAP: Ignoring tap at {}: {}", coordinate, e);
            return (state, Effect::None);
        }
    };

    if !month.cell_kind(coordinate.item).is_day() {
        trace!("TAP: Placeholder cell {} is not tappable", coordinate);
        return (state, Effect::None);
    }

    let mut new_state = state;
    let mut effects = vec![pick(&mut new_state, coordinate, grid)];

    if !new_state.is_paging_enabled {
        let (paged_state, paging_effect) = handle_set_paging(new_state, true, grid, layout);
        new_state = paged_state;
        effects.push(paging_effect);
    }

    (new_state, Effect::batch(effects))
}

fn handle_scrolled(
    state: CalendarState,
    offset_y: f64,
    grid: &MonthGrid,
    layout: &GridLayout,
) -> (CalendarState, Effect) {
    let mut new_state = state;
    new_state.scroll_offset_y = offset_y;

    let section = new_state.current_section(grid, layout);
    let effect = match grid.month_at(section) {
        Ok(month) => Effect::View(ViewEffect::MonthNameChanged(month.first_of_month)),
        Err(_) => Effect::None,
    };
    (new_state, effect)
}

fn handle_drag_ended(
    state: CalendarState,
    target_offset_y: f64,
    velocity_y: f64,
    grid: &MonthGrid,
    layout: &GridLayout,
) -> (CalendarState, Effect) {
    let last = grid.section_count().saturating_sub(1);
    let mut target_section = layout.section_at_offset(target_offset_y);
    if target_section > last {
        warn!(
            "DRAG: Target section {} is past the grid, clamping to {}",
            target_section, last
        );
        target_section = last;
    }

    let Ok(target_month) = grid.month_at(target_section).copied() else {
        return (state, Effect::None);
    };

    let mut new_state = state;
    let mut effects = Vec::new();

    if new_state.is_paging_enabled {
        // Settle on day 1, or on today when paging into the current month
        let item = if target_section == new_state.today_cell.section {
            new_state.today_cell.item
        } else {
            1
        };
        effects.push(pick(
            &mut new_state,
            GridCoordinate::new(target_section, item),
            grid,
        ));
        effects.push(Effect::View(ViewEffect::HapticTick));
    } else if velocity_y.abs() > FLING_VELOCITY_THRESHOLD {
        effects.push(Effect::View(ViewEffect::ShowMonthName));
    }

    debug!(
        "DRAG: Settling on section {} ({})",
        target_section, target_month.first_of_month
    );
    effects.push(Effect::SectionChanged {
        date: target_month.first_of_month,
        rows: target_month.row_count,
    });

    (new_state, Effect::batch(effects))
}

fn handle_set_paging(
    state: CalendarState,
    enabled: bool,
    grid: &MonthGrid,
    layout: &GridLayout,
) -> (CalendarState, Effect) {
    debug!("PAGING: Set to {}", enabled);
    let mut new_state = state;
    new_state.is_paging_enabled = enabled;

    let mut effects = Vec::new();
    if enabled {
        let section = new_state.picked_cell.section;
        effects.push(scroll_to(&mut new_state, section, true, grid, layout));
    }
    effects.push(Effect::PagingChanged(enabled));

    (new_state, Effect::batch(effects))
}

fn handle_jump_to_today(
    state: CalendarState,
    grid: &MonthGrid,
    layout: &GridLayout,
) -> (CalendarState, Effect) {
    let today = state.today_cell;
    if today.section == state.current_section(grid, layout) {
        debug!("TODAY: Already showing today's month, bouncing");
        return (state, Effect::View(ViewEffect::Bounce));
    }

    let mut new_state = state;
    let picked = pick(&mut new_state, today, grid);
    let scrolled = scroll_to(&mut new_state, today.section, true, grid, layout);
    (new_state, Effect::batch(vec![picked, scrolled]))
}

/// Move the pick to `cell`, emitting only if it actually changed
fn pick(state: &mut CalendarState, cell: GridCoordinate, grid: &MonthGrid) -> Effect {
    if state.picked_cell == cell {
        return Effect::None;
    }

    debug_assert!(
        cell.section < grid.section_count(),
        "Pick at {} is outside the calendar grid",
        cell
    );
    let date = match grid.date_for(cell) {
        Ok(date) => date,
        Err(e) => {
            warn!("PICK: Cannot pick {}: {}", cell, e);
            return Effect::None;
        }
    };

    let old = std::mem::replace(&mut state.picked_cell, cell);
    debug!("PICK: {} -> {} ({})", old, cell, date);

    Effect::batch(vec![
        Effect::CellPicked(date),
        Effect::View(ViewEffect::ReloadCells { old, new: cell }),
    ])
}

/// Scroll to the start of `section` and announce it
fn scroll_to(
    state: &mut CalendarState,
    section: usize,
    animated: bool,
    grid: &MonthGrid,
    layout: &GridLayout,
) -> Effect {
    debug_assert!(
        section < grid.section_count(),
        "Scroll to section {} is outside the calendar grid",
        section
    );
    let month = match grid.month_at(section) {
        Ok(month) => month,
        Err(e) => {
            warn!("SCROLL: Ignoring scroll request: {}", e);
            return Effect::None;
        }
    };

    let offset_y = layout.section_offset(section);
    state.scroll_offset_y = offset_y;

    Effect::batch(vec![
        Effect::View(ViewEffect::ScrollTo { offset_y, animated }),
        Effect::SectionChanged {
            date: month.first_of_month,
            rows: month.row_count,
        },
    ])
}
