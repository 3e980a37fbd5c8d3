use chrono::{Duration as ChronoDuration, NaiveDate};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{buffer::Buffer, layout::Rect};
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tracing::{debug, info, trace, warn};

use super::keys::AppAction;
use super::widgets::{CalendarViewport, RenderableWidget, StatusBar};
use crate::config::{Config, ThemeConfig};
use crate::controller::{CalendarAction, CalendarRuntime, ViewEffect};
use crate::data_provider::ConfigDataProvider;
use crate::error::GridResult;
use crate::formatting::{format_date, DateStyle};
use crate::host::CalendarDelegate;
use crate::layout::GridLayout;
use crate::types::GridCoordinate;

/// Rows above each month's first week: title plus a blank line
const HEADER_ROWS: f64 = 2.0;

/// Rows outside the grid: weekday labels and the status bar
const CHROME_ROWS: u16 = 2;

/// Frames of an animated scroll
const ANIMATION_FRAMES: usize = 8;

/// Offsets, relative to the resting position, of the "already there" bounce
const BOUNCE_KEYFRAMES: [f64; 4] = [-1.0, -0.6, -0.3, 0.0];

/// How long the month-name overlay stays up after a fling
const OVERLAY_DURATION: Duration = Duration::from_millis(1200);

/// Frames the page tick marker stays lit
const TICK_FRAMES: u8 = 4;

/// Rows scrolled per mouse wheel notch in free scroll
const WHEEL_STEP: f64 = 2.0;

/// Fling velocity reported for keyboard paging
const PAGE_VELOCITY: f64 = 2.0;

/// Logs every calendar notification
struct LoggingDelegate;

impl CalendarDelegate for LoggingDelegate {
    fn on_cell_picked(&mut self, date: NaiveDate) {
        info!("CALENDAR: Picked {}", date);
    }

    fn on_section_changed(&mut self, date: NaiveDate, rows: u32) {
        info!(
            "CALENDAR: Showing {} ({} weeks)",
            format_date(date, DateStyle::MonthAndYear),
            rows
        );
    }

    fn on_paging_changed(&mut self, enabled: bool) {
        info!("CALENDAR: Paging {}", if enabled { "on" } else { "off" });
    }
}

/// Transient month name shown during free scrolling
#[derive(Debug, Default)]
struct MonthOverlay {
    text: String,
    visible_until: Option<Instant>,
}

impl MonthOverlay {
    fn visible_text(&self, now: Instant) -> Option<&str> {
        match self.visible_until {
            Some(until) if now < until => Some(&self.text),
            _ => None,
        }
    }
}

/// Terminal host of the calendar control
///
/// Owns the runtime and performs every view effect it emits: scroll
/// animations (as keyframe queues replayed one per frame through the runtime's
/// action queue), the month-name overlay, the page tick marker and the bounce.
pub struct App {
    runtime: CalendarRuntime,
    data_provider: ConfigDataProvider,
    theme: ThemeConfig,
    /// Offset the grid is drawn at; trails the controller during animations
    display_offset_y: f64,
    animation: VecDeque<f64>,
    overlay: MonthOverlay,
    tick_frames: u8,
    /// Terminal size last reported through `resize`
    area: Rect,
    should_quit: bool,
}

impl App {
    /// Create the app for a terminal of `area` size
    pub fn new(config: &Config, today: NaiveDate, area: Rect) -> GridResult<Self> {
        let (width, height) = grid_viewport(area);
        let layout = GridLayout::with_header_height(width, height, HEADER_ROWS)?;
        let runtime = CalendarRuntime::new(&config.calendar_config(today), layout)?
            .with_delegate(Box::new(LoggingDelegate));

        let display_offset_y = runtime.state().scroll_offset_y;
        let overlay = MonthOverlay {
            text: format_date(runtime.date_for_current_section()?, DateStyle::MonthAndYear),
            visible_until: None,
        };

        Ok(Self {
            runtime,
            data_provider: ConfigDataProvider::new(config),
            theme: config.theme.clone(),
            display_offset_y,
            animation: VecDeque::new(),
            overlay,
            tick_frames: 0,
            area,
            should_quit: false,
        })
    }

    pub fn runtime(&self) -> &CalendarRuntime {
        &self.runtime
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn display_offset_y(&self) -> f64 {
        self.display_offset_y
    }

    /// Something on screen is still changing without input
    pub fn is_animating(&self) -> bool {
        !self.animation.is_empty()
            || self.tick_frames > 0
            || self.overlay.visible_text(Instant::now()).is_some()
    }

    /// Report the terminal size, re-laying out the grid if it changed
    pub fn resize(&mut self, area: Rect) {
        if area == self.area {
            return;
        }
        self.area = area;

        let (width, height) = grid_viewport(area);
        debug!("APP: Terminal resized to {}x{}", area.width, area.height);
        self.dispatch(CalendarAction::ViewportResized { width, height });
    }

    pub fn handle_action(&mut self, action: AppAction) {
        debug!("APP: Handling {:?}", action);
        match action {
            AppAction::Quit => self.should_quit = true,
            AppAction::MovePick(days) => self.move_pick(days),
            AppAction::Page(direction) => self.page(direction),
            AppAction::TogglePaging => {
                let enabled = !self.runtime.state().is_paging_enabled;
                self.dispatch(CalendarAction::SetPagingEnabled(enabled));
            }
            AppAction::JumpToToday => self.dispatch(CalendarAction::JumpToToday),
        }
    }

    /// Handle a mouse event at terminal coordinates; `area` is the full screen
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let grid = grid_area(area);
                if mouse.column < grid.x
                    || mouse.row < grid.y
                    || mouse.column >= grid.right()
                    || mouse.row >= grid.bottom()
                {
                    return;
                }
                if let Some(coordinate) =
                    self.coordinate_at(mouse.column - grid.x, mouse.row - grid.y)
                {
                    self.dispatch(CalendarAction::TapCell(coordinate));
                }
            }
            MouseEventKind::ScrollDown => self.wheel(1.0),
            MouseEventKind::ScrollUp => self.wheel(-1.0),
            _ => {}
        }
    }

    /// Grid cell under a character position relative to the grid's top-left
    pub fn coordinate_at(&self, column: u16, row: u16) -> Option<GridCoordinate> {
        let layout = self.runtime.layout();
        let y = self.display_offset_y + row as f64 + 0.5;
        if y < 0.0 {
            return None;
        }

        let section = (y / layout.section_height()).floor() as usize;
        let month = self.runtime.grid().month_at(section).ok()?;
        let item = layout.hit_test(
            month,
            column as f64 + 0.5,
            y - layout.section_offset(section),
        )?;
        Some(GridCoordinate::new(section, item))
    }

    /// Advance one frame: replay the next keyframe and drain queued actions
    pub fn tick(&mut self) {
        if let Some(offset_y) = self.animation.pop_front() {
            self.display_offset_y = offset_y;
            if let Err(e) = self
                .runtime
                .action_sender()
                .send(CalendarAction::Scrolled { offset_y })
            {
                warn!("APP: Failed to queue scroll frame: {}", e);
            }
        }

        let view_effects = self.runtime.process_actions();
        self.apply(view_effects);
        self.tick_frames = self.tick_frames.saturating_sub(1);
    }

    /// Draw the calendar and the status bar
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.height < CHROME_ROWS + 1 {
            return;
        }
        let calendar_area = Rect {
            height: area.height - 1,
            ..area
        };
        let status_area = Rect {
            y: area.bottom() - 1,
            height: 1,
            ..area
        };

        let now = Instant::now();
        CalendarViewport::new(self.runtime.view(&self.data_provider), self.display_offset_y)
            .with_overlay(self.overlay.visible_text(now))
            .render(calendar_area, buf, &self.theme);

        let picked = self
            .runtime
            .date_for_picked_cell()
            .map(|date| format_date(date, DateStyle::Full))
            .unwrap_or_default();
        StatusBar::new(picked, self.runtime.state().mode())
            .with_tick(self.tick_frames > 0)
            .render(status_area, buf, &self.theme);
    }

    fn dispatch(&mut self, action: CalendarAction) {
        let view_effects = self.runtime.dispatch(action);
        self.apply(view_effects);
    }

    /// Perform view effects in emission order
    fn apply(&mut self, view_effects: Vec<ViewEffect>) {
        for effect in view_effects {
            trace!("APP: Applying {:?}", effect);
            match effect {
                // Every frame is redrawn in full
                ViewEffect::ReloadCells { .. } => {}
                ViewEffect::ScrollTo { offset_y, animated } => {
                    if animated {
                        self.animate_to(offset_y);
                    } else {
                        self.animation.clear();
                        self.display_offset_y = offset_y;
                    }
                }
                ViewEffect::HapticTick => self.tick_frames = TICK_FRAMES,
                ViewEffect::ShowMonthName => {
                    self.overlay.visible_until = Some(Instant::now() + OVERLAY_DURATION);
                }
                ViewEffect::MonthNameChanged(date) => {
                    self.overlay.text = format_date(date, DateStyle::MonthAndYear);
                }
                ViewEffect::Bounce => {
                    let rest = self.display_offset_y;
                    self.animation = BOUNCE_KEYFRAMES.iter().map(|d| rest + d).collect();
                }
            }
        }
    }

    /// Replace any running animation with an ease-out scroll to `target`
    fn animate_to(&mut self, target: f64) {
        let start = self.display_offset_y;
        self.animation = (1..=ANIMATION_FRAMES)
            .map(|frame| {
                let t = frame as f64 / ANIMATION_FRAMES as f64;
                start + (target - start) * (1.0 - (1.0 - t).powi(3))
            })
            .collect();
    }

    fn move_pick(&mut self, days: i64) {
        let Ok(picked) = self.runtime.date_for_picked_cell() else {
            return;
        };
        let target = picked.checked_add_signed(ChronoDuration::days(days));
        let Some(coordinate) = target.and_then(|d| self.runtime.grid().coordinate_for(d).ok())
        else {
            debug!("APP: {:?} is outside the calendar", target);
            return;
        };

        self.dispatch(CalendarAction::TapCell(coordinate));
        if coordinate.section != self.runtime.current_section() {
            self.dispatch(CalendarAction::ScrollToSection {
                section: coordinate.section,
                animated: true,
            });
        }
    }

    /// Fling one page, the way a fast drag would end
    fn page(&mut self, direction: i32) {
        let layout = *self.runtime.layout();
        let last = self.runtime.grid().section_count().saturating_sub(1);

        let target_offset_y = if self.runtime.state().is_paging_enabled {
            let section = self.runtime.current_section() as i64 + direction as i64;
            layout.section_offset(section.clamp(0, last as i64) as usize)
        } else {
            let offset = self.display_offset_y + direction as f64 * layout.section_height();
            offset.clamp(0.0, layout.section_offset(last))
        };

        self.dispatch(CalendarAction::DragEnded {
            target_offset_y,
            velocity_y: direction as f64 * PAGE_VELOCITY,
        });
        self.animate_to(target_offset_y);
    }

    fn wheel(&mut self, direction: f64) {
        if self.runtime.state().is_paging_enabled {
            self.page(direction as i32);
            return;
        }

        let layout = self.runtime.layout();
        let last = self.runtime.grid().section_count().saturating_sub(1);
        let offset_y =
            (self.display_offset_y + direction * WHEEL_STEP).clamp(0.0, layout.section_offset(last));
        self.animation.clear();
        self.display_offset_y = offset_y;
        self.dispatch(CalendarAction::Scrolled { offset_y });
    }
}

/// Grid viewport size for a terminal area
fn grid_viewport(area: Rect) -> (f64, f64) {
    (
        area.width as f64,
        area.height.saturating_sub(CHROME_ROWS) as f64,
    )
}

/// Screen rectangle of the grid, below the weekday row
fn grid_area(area: Rect) -> Rect {
    Rect {
        y: area.y + 1,
        height: area.height.saturating_sub(CHROME_ROWS),
        ..area
    }
}
