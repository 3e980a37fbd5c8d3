//! Scrollable, paginated month-grid calendar control.
//!
//! The core is UI-agnostic: [`grid::MonthGrid`] maps grid coordinates to dates,
//! [`layout::GridLayout`] maps them to geometry, and the [`controller`] module
//! keeps picked, today and visible-month state consistent as the host reports
//! scrolls, drags and taps. [`view::CalendarView`] turns all of it into
//! render-ready values. The `tui` module is a terminal host built on top.

pub mod commands;
pub mod config;
pub mod controller;
pub mod data_provider;
pub mod error;
pub mod formatting;
pub mod grid;
pub mod host;
pub mod layout;
pub mod layout_constants;
pub mod month;
pub mod tui;
pub mod types;
pub mod view;

pub use controller::{CalendarAction, CalendarRuntime, CalendarState, Effect, ViewEffect};
pub use error::{GridError, GridResult};
pub use grid::MonthGrid;
pub use host::{CalendarDataSource, CalendarDelegate, NoDataSource};
pub use layout::GridLayout;
pub use month::CalendarMonth;
pub use types::{CalendarConfig, CellKind, GridCoordinate};
pub use view::{CalendarView, CellContent, DayCell, SectionHeader};
