//! Modal alert shown when generation fails

use brandcraft_app::AlertState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

use super::modal_overlay;

const MODAL_WIDTH: u16 = 52;
const MODAL_HEIGHT: u16 = 8;

pub struct AlertDialog<'a> {
    alert: &'a AlertState,
}

impl<'a> AlertDialog<'a> {
    pub fn new(alert: &'a AlertState) -> Self {
        Self { alert }
    }
}

impl Widget for AlertDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        modal_overlay::dim_background(buf, area);

        let modal = modal_overlay::centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
        modal_overlay::clear_area(buf, modal);
        modal_overlay::render_shadow(buf, modal);

        let block = styles::modal_block(&self.alert.title);
        let inner = block.inner(modal);
        block.render(modal, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),    // message
            Constraint::Length(1), // hint
        ])
        .horizontal_margin(1)
        .split(inner);

        Paragraph::new(self.alert.message.as_str())
            .style(styles::text_primary())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(chunks[1], buf);

        let hint = Line::from(vec![
            Span::styled("[Enter]", styles::accent()),
            Span::styled(" Dismiss   ", styles::text_secondary()),
            Span::styled("[q]", styles::accent()),
            Span::styled(" Quit", styles::text_secondary()),
        ]);
        Paragraph::new(hint)
            .alignment(Alignment::Center)
            .render(chunks[2], buf);
    }
}
