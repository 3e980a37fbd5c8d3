use crate::types::GridCoordinate;

/// Events driving the calendar state machine
///
/// Actions come from user interaction reported by the host view (taps, scroll
/// frames, drag ends) or from programmatic commands.
#[derive(Debug, Clone, PartialEq)]
pub enum CalendarAction {
    /// A cell was tapped
    TapCell(GridCoordinate),

    /// The view scrolled to a new vertical offset (every frame)
    Scrolled { offset_y: f64 },

    /// A drag ended; deceleration will settle at `target_offset_y`
    DragEnded {
        target_offset_y: f64,
        /// Vertical drag velocity in units per millisecond
        velocity_y: f64,
    },

    /// Enable or disable paging (snap-to-month) mode
    SetPagingEnabled(bool),

    /// Programmatic scroll to the start of a section
    ScrollToSection { section: usize, animated: bool },

    /// Scroll back to today's month, or bounce if it is already shown
    JumpToToday,

    /// The host viewport changed size
    ViewportResized { width: f64, height: f64 },
}

impl CalendarAction {
    /// Per-frame actions, logged at trace level only
    pub fn is_frame_event(&self) -> bool {
        matches!(self, Self::Scrolled { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_frame_event() {
        assert!(CalendarAction::Scrolled { offset_y: 10.0 }.is_frame_event());
        assert!(!CalendarAction::JumpToToday.is_frame_event());
        assert!(!CalendarAction::TapCell(GridCoordinate::new(0, 1)).is_frame_event());
    }
}
