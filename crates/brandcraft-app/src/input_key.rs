//! Abstract input key event, independent of terminal library.
//!
//! The TUI converts crossterm key events into [`InputKey`] at its boundary
//! so the handler and its tests never depend on crossterm.

/// Keyboard input understood by the update function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (letters, digits, symbols, space)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, ...)
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    Home,
    End,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
    Delete,
}

impl InputKey {
    /// Digit value for `1`..=`9`, used for direct swatch selection
    pub fn digit(&self) -> Option<usize> {
        match self {
            InputKey::Char(c @ '1'..='9') => c.to_digit(10).map(|d| d as usize),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_key_equality() {
        assert_eq!(InputKey::Char('a'), InputKey::Char('a'));
        assert_ne!(InputKey::CharCtrl('c'), InputKey::Char('c'));
    }

    #[test]
    fn test_digit() {
        assert_eq!(InputKey::Char('1').digit(), Some(1));
        assert_eq!(InputKey::Char('4').digit(), Some(4));
        assert_eq!(InputKey::Char('0').digit(), None);
        assert_eq!(InputKey::Char('x').digit(), None);
        assert_eq!(InputKey::Enter.digit(), None);
    }
}
