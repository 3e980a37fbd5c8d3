use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, trace, warn};

use super::action::CalendarAction;
use super::effect::{Effect, ViewEffect};
use super::reducer::reduce;
use super::state::CalendarState;
use crate::error::GridResult;
use crate::grid::MonthGrid;
use crate::host::{CalendarDataSource, CalendarDelegate};
use crate::layout::GridLayout;
use crate::types::CalendarConfig;
use crate::view::CalendarView;

/// Calendar runtime - owns the control's state and executes effects
///
/// The runtime is responsible for:
/// - Holding the immutable month grid and the current layout
/// - Dispatching actions through the reducer
/// - Delivering notification effects to the host delegate
/// - Handing view effects back to the caller, in emission order
///
/// Everything runs synchronously on the caller's thread. Actions may also be
/// queued through [`action_sender`](Self::action_sender) and drained with
/// [`process_actions`](Self::process_actions).
pub struct CalendarRuntime {
    grid: Arc<MonthGrid>,
    layout: GridLayout,
    state: CalendarState,

    /// Host notification sink
    delegate: Option<Box<dyn CalendarDelegate>>,

    /// Queue for actions from outside the event handler
    action_tx: mpsc::UnboundedSender<CalendarAction>,
    action_rx: mpsc::UnboundedReceiver<CalendarAction>,
}

impl CalendarRuntime {
    /// Build the grid for `config` and start with today picked
    pub fn new(config: &CalendarConfig, layout: GridLayout) -> GridResult<Self> {
        let grid = Arc::new(MonthGrid::build(config.initial_year, config.number_of_years)?);
        Self::with_grid(grid, config, layout)
    }

    /// Start a runtime over an existing, shared grid
    pub fn with_grid(
        grid: Arc<MonthGrid>,
        config: &CalendarConfig,
        layout: GridLayout,
    ) -> GridResult<Self> {
        let state = CalendarState::initial(&grid, &layout, config)?;
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        debug!(
            "RUNTIME: Created with today={} at {}",
            config.today, state.today_cell
        );

        Ok(Self {
            grid,
            layout,
            state,
            delegate: None,
            action_tx,
            action_rx,
        })
    }

    /// Attach the host's notification delegate
    pub fn with_delegate(mut self, delegate: Box<dyn CalendarDelegate>) -> Self {
        self.delegate = Some(delegate);
        self
    }

    pub fn state(&self) -> &CalendarState {
        &self.state
    }

    pub fn grid(&self) -> &Arc<MonthGrid> {
        &self.grid
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn current_section(&self) -> usize {
        self.state.current_section(&self.grid, &self.layout)
    }

    /// First day of the month currently scrolled into view
    pub fn date_for_current_section(&self) -> GridResult<NaiveDate> {
        Ok(self.grid.month_at(self.current_section())?.first_of_month)
    }

    pub fn date_for_picked_cell(&self) -> GridResult<NaiveDate> {
        self.grid.date_for(self.state.picked_cell)
    }

    /// Week rows used by the month currently scrolled into view
    pub fn rows_in_current_section(&self) -> GridResult<u32> {
        Ok(self.grid.month_at(self.current_section())?.row_count)
    }

    /// Render-side view of the calendar for a host data source
    pub fn view<'a>(&'a self, data_source: &'a dyn CalendarDataSource) -> CalendarView<'a> {
        CalendarView::new(&self.grid, &self.layout, &self.state, data_source)
    }

    /// Dispatch an action, returning the view effects it produced
    pub fn dispatch(&mut self, action: CalendarAction) -> Vec<ViewEffect> {
        if action.is_frame_event() {
            trace!("ACTION: Dispatching {:?}", action);
        } else {
            debug!("ACTION: Dispatching {:?}", action);
        }

        let effect = if let CalendarAction::ViewportResized { width, height } = action {
            self.resize(width, height)
        } else {
            let (new_state, effect) = reduce(self.state, &action, &self.grid, &self.layout);
            self.state = new_state;
            effect
        };

        let mut view_effects = Vec::new();
        self.execute_effect(effect, &mut view_effects);
        view_effects
    }

    /// Swap in a layout for the new viewport, keeping the current month in view
    fn resize(&mut self, width: f64, height: f64) -> Effect {
        let layout = match self.layout.resized(width, height) {
            Ok(layout) => layout,
            Err(e) => {
                warn!("RESIZE: Keeping previous layout: {}", e);
                return Effect::None;
            }
        };

        let section = self.current_section();
        self.layout = layout;
        self.state.scroll_offset_y = layout.section_offset(section);

        Effect::View(ViewEffect::ScrollTo {
            offset_y: self.state.scroll_offset_y,
            animated: false,
        })
    }

    /// Deliver notifications to the delegate; collect view effects
    fn execute_effect(&mut self, effect: Effect, view_effects: &mut Vec<ViewEffect>) {
        for effect in effect.into_vec() {
            match effect {
                Effect::CellPicked(date) => {
                    if let Some(delegate) = self.delegate.as_mut() {
                        delegate.on_cell_picked(date);
                    }
                }
                Effect::SectionChanged { date, rows } => {
                    if let Some(delegate) = self.delegate.as_mut() {
                        delegate.on_section_changed(date, rows);
                    }
                }
                Effect::PagingChanged(enabled) => {
                    if let Some(delegate) = self.delegate.as_mut() {
                        delegate.on_paging_changed(enabled);
                    }
                }
                Effect::View(view_effect) => view_effects.push(view_effect),
                // into_vec never yields these
                Effect::None | Effect::Batch(_) => {}
            }
        }
    }

    /// Get a sender for queueing actions from outside the event handler
    pub fn action_sender(&self) -> mpsc::UnboundedSender<CalendarAction> {
        self.action_tx.clone()
    }

    /// Dispatch all queued actions
    ///
    /// Returns the view effects of every processed action, in order.
    pub fn process_actions(&mut self) -> Vec<ViewEffect> {
        let mut view_effects = Vec::new();
        while let Ok(action) = self.action_rx.try_recv() {
            view_effects.extend(self.dispatch(action));
        }
        view_effects
    }
}
