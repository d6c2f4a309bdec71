//! Test utilities for TUI rendering verification
//!
//! Wraps ratatui's `TestBackend` so widget and full-screen tests can
//! assert on rendered text without a real terminal.

use brandcraft_app::{AppState, FormState, TextInput};
use brandcraft_core::{BrandIdentity, Vibe};
use brandcraft_genai::test_utils::sample_identity;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::{Frame, Terminal};

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 100;
pub const TEST_HEIGHT: u16 = 32;

/// Narrow terminal for stacked layouts
pub const COMPACT_WIDTH: u16 = 50;
pub const COMPACT_HEIGHT: u16 = 40;

pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn compact() -> Self {
        Self::with_size(COMPACT_WIDTH, COMPACT_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame, e.g. `term.draw_with(|f| view(f, &state))`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.buffer()).contains(text)
    }

    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        line_content(self.buffer(), line).contains(text)
    }

    pub fn cell_at(&self, x: u16, y: u16) -> Option<&str> {
        let buffer = self.buffer();
        if x < buffer.area.width && y < buffer.area.height {
            Some(buffer[(x, y)].symbol())
        } else {
            None
        }
    }

    /// Number of non-overlapping occurrences of `text` in the buffer
    pub fn count(&self, text: &str) -> usize {
        buffer_to_string(self.buffer()).matches(text).count()
    }

    /// Row index of the first line containing `text`
    pub fn find_line(&self, text: &str) -> Option<u16> {
        let buffer = self.buffer();
        (0..buffer.area.height).find(|&y| line_content(buffer, y).contains(text))
    }

    /// Content of the whole buffer, one line per row
    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        result.push_str(&line_content(buffer, y));
        result.push('\n');
    }
    result
}

fn line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

/// State with the form filled in and ready to submit
pub fn filled_form_state() -> AppState {
    let mut state = AppState::new();
    state.form = FormState::with_vibe(Vibe::LuxuriousElegant);
    state.form.idea = TextInput::with_value("A privacy-focused smart home hub");
    state.form.industry = TextInput::with_value("IoT");
    state
}

/// State showing the result board for the given identity
pub fn result_state(identity: BrandIdentity) -> AppState {
    let mut state = filled_form_state();
    state.show_result(identity);
    state
}

/// State showing the Nestly sample board
pub fn sample_result_state() -> AppState {
    result_state(sample_identity())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_terminal_sizes() {
        assert_eq!(TestTerminal::new().area(), Rect::new(0, 0, TEST_WIDTH, TEST_HEIGHT));
        assert_eq!(
            TestTerminal::compact().area(),
            Rect::new(0, 0, COMPACT_WIDTH, COMPACT_HEIGHT)
        );
    }

    #[test]
    fn test_buffer_queries() {
        let mut term = TestTerminal::with_size(20, 3);
        term.render_widget(Paragraph::new("Hello World\nHello"), term.area());

        assert!(term.buffer_contains("Hello World"));
        assert!(!term.buffer_contains("Goodbye"));
        assert!(term.line_contains(1, "Hello"));
        assert_eq!(term.count("Hello"), 2);
        assert_eq!(term.find_line("World"), Some(0));
        assert_eq!(term.find_line("Goodbye"), None);
    }
}
