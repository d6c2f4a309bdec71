//! Title bar

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub const TITLE: &str = "BrandCraft";
pub const SUBTITLE: &str =
    "Automating the first step of your journey. One prompt, one brand identity, zero friction.";

/// Header with the product name and tagline; the tagline is dropped
/// when the row is too narrow to hold both.
pub struct Header;

impl Widget for Header {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut spans = vec![
            Span::styled("◆ ", styles::accent()),
            Span::styled(TITLE, styles::text_bright()),
        ];

        let used = TITLE.len() + 2;
        let wanted = used + 3 + SUBTITLE.len();
        if (inner.width as usize) >= wanted {
            spans.push(Span::styled(" · ", styles::text_muted()));
            spans.push(Span::styled(SUBTITLE, styles::text_secondary()));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
