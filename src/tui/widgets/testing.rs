/// Testing utilities for widget rendering

use ratatui::{buffer::Buffer, layout::Rect};
use crate::config::ThemeConfig;
use super::RenderableWidget;

/// Render a widget to a buffer with the default theme
pub fn render_widget(widget: &impl RenderableWidget, width: u16, height: u16) -> Buffer {
    let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
    widget.render(buf.area, &mut buf, &ThemeConfig::default());
    buf
}

/// Get the text content of a specific line in the buffer
pub fn buffer_line(buf: &Buffer, line: u16) -> String {
    let area = buf.area();
    let mut output = String::new();

    for x in 0..area.width {
        output.push_str(buf[(x, line)].symbol());
    }

    output
}

/// Position of the first occurrence of `text` on any line
pub fn find_text(buf: &Buffer, text: &str) -> Option<(u16, u16)> {
    (0..buf.area().height).find_map(|y| {
        let line = buffer_line(buf, y);
        line.find(text).map(|byte_index| {
            // Convert the byte index into a column
            let column = line[..byte_index].chars().count() as u16;
            (column, y)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Style;

    struct TestWidget {
        text: String,
    }

    impl RenderableWidget for TestWidget {
        fn render(&self, area: Rect, buf: &mut Buffer, _theme: &ThemeConfig) {
            buf.set_string(area.x, area.y + 1, &self.text, Style::default());
        }
    }

    #[test]
    fn test_buffer_line() {
        let widget = TestWidget {
            text: "Test".to_string(),
        };
        let buf = render_widget(&widget, 10, 2);

        assert_eq!(buffer_line(&buf, 0), "          ");
        assert_eq!(buffer_line(&buf, 1), "Test      ");
    }

    #[test]
    fn test_find_text() {
        let widget = TestWidget {
            text: "• 26".to_string(),
        };
        let buf = render_widget(&widget, 10, 2);

        assert_eq!(find_text(&buf, "26"), Some((2, 1)));
        assert_eq!(find_text(&buf, "27"), None);
    }
}
