//! Keyboard mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use gridwalk::{Direction, InputEvent};

/// Translate a key event into a game input.
///
/// Only presses count; repeats and releases are ignored.
pub(crate) fn map_key(key: &KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(InputEvent::Quit);
    }

    let event = match key.code {
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => InputEvent::Quit,
        KeyCode::Char('e' | 'E') => InputEvent::Interact,
        KeyCode::Char('w' | 'W') | KeyCode::Up => InputEvent::Move(Direction::Up),
        KeyCode::Char('s' | 'S') | KeyCode::Down => InputEvent::Move(Direction::Down),
        KeyCode::Char('a' | 'A') | KeyCode::Left => InputEvent::Move(Direction::Left),
        KeyCode::Char('d' | 'D') | KeyCode::Right => InputEvent::Move(Direction::Right),
        _ => return None,
    };
    Some(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(map_key(&press(KeyCode::Char('w'))), Some(InputEvent::Move(Direction::Up)));
        assert_eq!(map_key(&press(KeyCode::Char('a'))), Some(InputEvent::Move(Direction::Left)));
        assert_eq!(map_key(&press(KeyCode::Down)), Some(InputEvent::Move(Direction::Down)));
        assert_eq!(map_key(&press(KeyCode::Right)), Some(InputEvent::Move(Direction::Right)));
    }

    #[test]
    fn test_quit_and_interact() {
        assert_eq!(map_key(&press(KeyCode::Esc)), Some(InputEvent::Quit));
        assert_eq!(map_key(&press(KeyCode::Char('q'))), Some(InputEvent::Quit));
        assert_eq!(map_key(&press(KeyCode::Char('e'))), Some(InputEvent::Interact));
        assert_eq!(
            map_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(InputEvent::Quit)
        );
        assert_eq!(map_key(&KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL)), None);
    }

    #[test]
    fn test_release_ignored() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('w'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(map_key(&release), None);
        assert_eq!(map_key(&press(KeyCode::Char('x'))), None);
    }
}
