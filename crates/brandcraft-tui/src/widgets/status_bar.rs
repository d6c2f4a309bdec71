//! Footer with key hints and the transient status message

use brandcraft_app::{AppState, StatusLevel, View};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

const FORM_HINTS: &[(&str, &str)] = &[
    ("Tab", "next"),
    ("◀ ▶", "vibe"),
    ("Enter", "craft"),
    ("Esc", "quit"),
];

const RESULT_HINTS: &[(&str, &str)] = &[
    ("1-4", "copy"),
    ("↑↓ Enter", "select/copy"),
    ("e", "export"),
    ("b", "back to lab"),
    ("q", "quit"),
];

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.state.view {
            View::Form => FORM_HINTS,
            View::Result(_) => RESULT_HINTS,
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(palette::CARD_BG));

        let mut spans = Vec::new();
        for (key, action) in self.hints() {
            spans.push(Span::styled(format!(" {}", key), styles::accent()));
            spans.push(Span::styled(format!(" {} ", action), styles::text_muted()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);

        if let Some(status) = &self.state.status {
            let style = match status.level {
                StatusLevel::Info => styles::status_green(),
                StatusLevel::Error => styles::status_red(),
            };
            Paragraph::new(Span::styled(format!("{} ", status.text), style))
                .alignment(Alignment::Right)
                .render(area, buf);
        }
    }
}
