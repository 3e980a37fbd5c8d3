/// Widget-based rendering for the terminal calendar
///
/// Widgets render themselves directly into a ratatui Buffer and take the
/// configured theme for colors, which keeps them testable against plain buffers.

#[cfg(test)]
pub mod testing;

pub mod calendar_viewport;
pub use calendar_viewport::CalendarViewport;

pub mod status_bar;
pub use status_bar::StatusBar;

use ratatui::{buffer::Buffer, layout::Rect};
use crate::config::ThemeConfig;

/// Core trait for renderable widgets
pub trait RenderableWidget {
    /// Render this widget into the provided buffer
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &ThemeConfig);

    /// Get the preferred height of this widget
    ///
    /// Returns None if the widget can adapt to any height.
    fn preferred_height(&self) -> Option<u16> {
        None
    }
}
