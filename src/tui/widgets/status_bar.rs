/// StatusBar widget - one line under the calendar
///
/// Left: the picked date (with a dot while a page tick is flashing).
/// Right: keyboard hints followed by the scroll mode. Hints are dropped first
/// when the line gets too narrow.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};
use unicode_width::UnicodeWidthStr;

use crate::config::ThemeConfig;
use crate::controller::state::ScrollMode;
use crate::tui::widgets::RenderableWidget;

/// A keyboard hint displayed in the status bar
#[derive(Debug, Clone, PartialEq)]
pub struct KeyHint {
    /// The keyboard key (e.g., "t", "PgDn")
    pub key: String,
    /// The action description (e.g., "Today")
    pub action: String,
}

impl KeyHint {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Widget for the picked date, key hints and scroll mode
#[derive(Debug, Clone)]
pub struct StatusBar {
    pub picked: String,
    pub mode: ScrollMode,
    /// Flash marker for a page tick
    pub tick: bool,
    pub hints: Vec<KeyHint>,
}

impl StatusBar {
    /// Create a status bar with the default hints
    pub fn new(picked: impl Into<String>, mode: ScrollMode) -> Self {
        Self {
            picked: picked.into(),
            mode,
            tick: false,
            hints: vec![
                KeyHint::new("←↓↑→", "Move"),
                KeyHint::new("PgUp/PgDn", "Page"),
                KeyHint::new("p", "Paging"),
                KeyHint::new("t", "Today"),
                KeyHint::new("q", "Quit"),
            ],
        }
    }

    pub fn with_tick(mut self, tick: bool) -> Self {
        self.tick = tick;
        self
    }

    fn mode_label(&self) -> &'static str {
        match self.mode {
            ScrollMode::FreeScroll => "[FREE]",
            ScrollMode::Paging => "[PAGING]",
        }
    }

    fn hints_width(&self) -> usize {
        self.hints
            .iter()
            .map(|h| h.key.width() + 1 + h.action.width() + 2)
            .sum()
    }
}

impl RenderableWidget for StatusBar {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &ThemeConfig) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let width = area.width as usize;
        let left = format!(" {}{}", if self.tick { "• " } else { "" }, self.picked);
        let mode = self.mode_label();
        let label_style = Style::default().fg(theme.label_fg);

        buf.set_stringn(
            area.x,
            area.y,
            &left,
            width,
            label_style.add_modifier(Modifier::BOLD),
        );

        // Mode tag flush right, hints before it if they fit
        let mode_width = mode.width() + 1;
        let left_width = left.width() + 2;
        if left_width + mode_width > width {
            return;
        }
        let mode_x = area.x + (width - mode_width) as u16;
        let mode_style = match self.mode {
            ScrollMode::Paging => Style::default().fg(theme.today_fg).add_modifier(Modifier::BOLD),
            ScrollMode::FreeScroll => label_style,
        };
        buf.set_string(mode_x, area.y, mode, mode_style);

        let hints_width = self.hints_width();
        if left_width + hints_width + mode_width > width {
            return;
        }
        let mut x = mode_x - hints_width as u16;
        for hint in &self.hints {
            buf.set_string(x, area.y, &hint.key, Style::default().fg(theme.today_fg));
            x += hint.key.width() as u16 + 1;
            buf.set_string(x, area.y, &hint.action, label_style);
            x += hint.action.width() as u16 + 2;
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::testing::*;
    use ratatui::style::Color;

    #[test]
    fn test_status_bar_wide() {
        let widget = StatusBar::new("Tuesday, March 26, 2019", ScrollMode::FreeScroll);
        let buf = render_widget(&widget, 100, 1);
        let line = buffer_line(&buf, 0);

        assert!(line.starts_with(" Tuesday, March 26, 2019"));
        assert!(line.ends_with("[FREE] "));
        assert!(line.contains("t Today"));
        assert!(line.contains("PgUp/PgDn Page"));
    }

    #[test]
    fn test_status_bar_narrow_drops_hints() {
        let widget = StatusBar::new("Tue, March 26", ScrollMode::Paging);
        let buf = render_widget(&widget, 30, 1);
        let line = buffer_line(&buf, 0);

        assert!(line.starts_with(" Tue, March 26"));
        assert!(line.ends_with("[PAGING] "));
        assert!(!line.contains("Today"));

        let (x, _) = find_text(&buf, "[PAGING]").unwrap();
        assert_eq!(buf[(x, 0)].fg, Color::Red);
    }

    #[test]
    fn test_status_bar_tick_marker() {
        let widget = StatusBar::new("Mon, April 1", ScrollMode::Paging).with_tick(true);
        let buf = render_widget(&widget, 60, 1);

        assert!(buffer_line(&buf, 0).starts_with(" • Mon, April 1"));
    }
}
