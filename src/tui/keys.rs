/// Keyboard event to action mapping
///
/// Keys map to [`AppAction`]s, which the [`App`](super::app::App) translates into
/// calendar actions using the current state (moving the pick needs to know
/// where it is).
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::trace;

/// Host-level actions produced by input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppAction {
    Quit,
    /// Move the pick by a number of days, as a tap on the target day
    MovePick(i64),
    /// Fling one page forward (+1) or back (-1)
    Page(i32),
    TogglePaging,
    JumpToToday,
}

pub fn key_to_action(key: KeyEvent) -> Option<AppAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(AppAction::Quit);
    }

    let action = match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => AppAction::Quit,
        KeyCode::Left | KeyCode::Char('h') => AppAction::MovePick(-1),
        KeyCode::Right | KeyCode::Char('l') => AppAction::MovePick(1),
        KeyCode::Up | KeyCode::Char('k') => AppAction::MovePick(-7),
        KeyCode::Down | KeyCode::Char('j') => AppAction::MovePick(7),
        KeyCode::PageUp => AppAction::Page(-1),
        KeyCode::PageDown => AppAction::Page(1),
        KeyCode::Char('p') => AppAction::TogglePaging,
        KeyCode::Char('t') => AppAction::JumpToToday,
        _ => {
            trace!("KEY: Unmapped key {:?}", key.code);
            return None;
        }
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(key_to_action(key(KeyCode::Char('q'))), Some(AppAction::Quit));
        assert_eq!(key_to_action(key(KeyCode::Esc)), Some(AppAction::Quit));
        assert_eq!(
            key_to_action(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(AppAction::Quit)
        );
    }

    #[test]
    fn test_arrow_and_vi_keys_move_pick() {
        assert_eq!(key_to_action(key(KeyCode::Left)), Some(AppAction::MovePick(-1)));
        assert_eq!(key_to_action(key(KeyCode::Char('l'))), Some(AppAction::MovePick(1)));
        assert_eq!(key_to_action(key(KeyCode::Up)), Some(AppAction::MovePick(-7)));
        assert_eq!(key_to_action(key(KeyCode::Char('j'))), Some(AppAction::MovePick(7)));
    }

    #[test]
    fn test_paging_keys() {
        assert_eq!(key_to_action(key(KeyCode::PageDown)), Some(AppAction::Page(1)));
        assert_eq!(key_to_action(key(KeyCode::PageUp)), Some(AppAction::Page(-1)));
        assert_eq!(key_to_action(key(KeyCode::Char('p'))), Some(AppAction::TogglePaging));
        assert_eq!(key_to_action(key(KeyCode::Char('t'))), Some(AppAction::JumpToToday));
    }

    #[test]
    fn test_unmapped_key() {
        assert_eq!(key_to_action(key(KeyCode::Char('z'))), None);
    }
}
