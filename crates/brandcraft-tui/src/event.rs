//! Terminal event polling

use std::time::Duration;

use brandcraft_app::{InputKey, Message};
use brandcraft_core::prelude::*;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Poll interval; a timeout produces a `Tick`
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Convert a crossterm key event to an [`InputKey`]
pub fn key_event_to_input(key: KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Delete => Some(InputKey::Delete),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        _ => None,
    }
}

/// Poll for a terminal event, returning `Tick` when none arrives in time
pub fn poll() -> Result<Option<Message>> {
    if !event::poll(POLL_INTERVAL)? {
        return Ok(Some(Message::Tick));
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            Ok(key_event_to_input(key).map(Message::Key))
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_char_conversion() {
        assert_eq!(key_event_to_input(key(KeyCode::Char('a'))), Some(InputKey::Char('a')));
        assert_eq!(key_event_to_input(key(KeyCode::Char('4'))), Some(InputKey::Char('4')));
    }

    #[test]
    fn test_ctrl_c_conversion() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_event_to_input(event), Some(InputKey::CharCtrl('c')));
    }

    #[test]
    fn test_shifted_char_is_plain_char() {
        let event = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(event), Some(InputKey::Char('A')));
    }

    #[test]
    fn test_editing_keys() {
        assert_eq!(key_event_to_input(key(KeyCode::Backspace)), Some(InputKey::Backspace));
        assert_eq!(key_event_to_input(key(KeyCode::Delete)), Some(InputKey::Delete));
        assert_eq!(key_event_to_input(key(KeyCode::Home)), Some(InputKey::Home));
        assert_eq!(key_event_to_input(key(KeyCode::End)), Some(InputKey::End));
    }

    #[test]
    fn test_backtab_variants() {
        let shift_tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(shift_tab), Some(InputKey::BackTab));
        assert_eq!(key_event_to_input(key(KeyCode::BackTab)), Some(InputKey::BackTab));
    }

    #[test]
    fn test_unsupported_keys_ignored() {
        assert_eq!(key_event_to_input(key(KeyCode::F(5))), None);
        assert_eq!(key_event_to_input(key(KeyCode::PageUp)), None);
        assert_eq!(key_event_to_input(key(KeyCode::Insert)), None);
    }
}
