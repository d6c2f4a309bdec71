//! Brief form: vision, industry, vibe and the craft button

use brandcraft_app::{FormField, FormState, TextInput};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{palette, styles};

use super::modal_overlay::centered_rect;

pub const IDEA_LABEL: &str = "YOUR VISION";
pub const IDEA_PLACEHOLDER: &str = "What are you building? (e.g. A privacy-focused smart home hub)";
pub const INDUSTRY_LABEL: &str = "INDUSTRY";
pub const INDUSTRY_PLACEHOLDER: &str = "e.g. Fintech, Web3, Health";
pub const VIBE_LABEL: &str = "VIBE";
pub const SUBMIT_LABEL: &str = "CRAFT MY IDENTITY";
pub const LOADING_LABEL: &str = "MANIFESTING...";

const FORM_WIDTH: u16 = 76;
const FORM_HEIGHT: u16 = 18;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner frame for the given UI tick
pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER[(tick / 2) as usize % SPINNER.len()]
}

/// The brief form, centered in its area
pub struct BrandForm<'a> {
    form: &'a FormState,
    loading: bool,
    tick: u64,
}

impl<'a> BrandForm<'a> {
    pub fn new(form: &'a FormState) -> Self {
        Self {
            form,
            loading: false,
            tick: 0,
        }
    }

    /// Show the in-flight state on the button
    pub fn loading(mut self, loading: bool, tick: u64) -> Self {
        self.loading = loading;
        self.tick = tick;
        self
    }

    fn render_input(
        &self,
        input: &TextInput,
        placeholder: &str,
        focused: bool,
        area: Rect,
        buf: &mut Buffer,
    ) {
        let block = styles::glass_block(focused);
        let inner = block.inner(area);
        block.render(area, buf);

        let line = if input.is_empty() && !focused {
            Line::from(Span::styled(placeholder, styles::text_muted()))
        } else if focused {
            let (before, after) = input.split_at_cursor();
            cursor_line(before, after, inner.width as usize)
        } else {
            Line::from(Span::styled(
                tail_fitting(input.value(), inner.width as usize),
                styles::text_primary(),
            ))
        };

        Paragraph::new(line).render(inner, buf);
    }

    fn render_vibe(&self, area: Rect, buf: &mut Buffer) {
        let focused = self.form.focus == FormField::Vibe;
        let block = styles::glass_block(focused);
        let inner = block.inner(area);
        block.render(area, buf);

        let arrow_style = if focused {
            styles::accent_bold()
        } else {
            styles::text_muted()
        };
        let line = Line::from(vec![
            Span::styled("◀  ", arrow_style),
            Span::styled(self.form.vibe.label(), styles::text_primary()),
            Span::styled("  ▶", arrow_style),
        ]);
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }

    fn render_button(&self, area: Rect, buf: &mut Buffer) {
        let focused = self.form.focus == FormField::Submit;
        let enabled = self.form.is_submittable() && !self.loading;

        let label = if self.loading {
            format!(" {} {} ", spinner_frame(self.tick), LOADING_LABEL)
        } else if focused {
            format!(" ▸ {} ◂ ", SUBMIT_LABEL)
        } else {
            format!("   {}   ", SUBMIT_LABEL)
        };

        let style = if enabled {
            styles::button_active()
        } else {
            styles::button_disabled()
        };

        Paragraph::new(Line::from(Span::styled(label, style)))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

impl Widget for BrandForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let card = centered_rect(FORM_WIDTH, FORM_HEIGHT, area);
        let block = styles::glass_block(false);
        let inner = block.inner(card);
        block.render(card, buf);

        if inner.width < 10 || inner.height < 12 {
            Paragraph::new("Terminal too small")
                .style(styles::text_muted())
                .render(inner, buf);
            return;
        }

        let rows = Layout::vertical([
            Constraint::Length(1), // idea label
            Constraint::Length(3), // idea input
            Constraint::Length(1), // industry label
            Constraint::Length(3), // industry input
            Constraint::Length(1), // vibe label
            Constraint::Length(3), // vibe selector
            Constraint::Length(1),
            Constraint::Length(1), // button
            Constraint::Min(0),
        ])
        .horizontal_margin(1)
        .split(inner);

        label(IDEA_LABEL, self.form.focus == FormField::Idea).render(rows[0], buf);
        self.render_input(
            &self.form.idea,
            IDEA_PLACEHOLDER,
            self.form.focus == FormField::Idea,
            rows[1],
            buf,
        );

        label(INDUSTRY_LABEL, self.form.focus == FormField::Industry).render(rows[2], buf);
        self.render_input(
            &self.form.industry,
            INDUSTRY_PLACEHOLDER,
            self.form.focus == FormField::Industry,
            rows[3],
            buf,
        );

        label(VIBE_LABEL, self.form.focus == FormField::Vibe).render(rows[4], buf);
        self.render_vibe(rows[5], buf);

        self.render_button(rows[7], buf);
    }
}

fn label(text: &str, focused: bool) -> Paragraph<'_> {
    let style = if focused {
        styles::accent_bold()
    } else {
        styles::section_label()
    };
    Paragraph::new(Span::styled(text, style))
}

/// Text with a block cursor, scrolled so the cursor stays visible
fn cursor_line(before: &str, after: &str, width: usize) -> Line<'static> {
    let (cursor_char, rest) = match after.chars().next() {
        Some(c) => (c.to_string(), &after[c.len_utf8()..]),
        None => (" ".to_string(), ""),
    };

    let before = tail_fitting(before, width.saturating_sub(cursor_char.width()));
    let cursor_style = Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD);

    Line::from(vec![
        Span::styled(before.to_string(), styles::text_primary()),
        Span::styled(cursor_char, cursor_style),
        Span::styled(rest.to_string(), styles::text_primary()),
    ])
}

/// Longest suffix of `text` that fits in `width` columns
fn tail_fitting(text: &str, width: usize) -> &str {
    if text.width() <= width {
        return text;
    }
    let mut start = text.len();
    let mut used = 0;
    for (idx, c) in text.char_indices().rev() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &text[start..]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use brandcraft_core::Vibe;

    fn render(form: &FormState, loading: bool, tick: u64) -> TestTerminal {
        let mut term = TestTerminal::new();
        term.render_widget(BrandForm::new(form).loading(loading, tick), term.area());
        term
    }

    #[test]
    fn test_empty_form_shows_labels_and_placeholders() {
        let mut form = FormState::new();
        form.focus = FormField::Vibe;
        let term = render(&form, false, 0);

        assert!(term.buffer_contains(IDEA_LABEL));
        assert!(term.buffer_contains(INDUSTRY_LABEL));
        assert!(term.buffer_contains(VIBE_LABEL));
        assert!(term.buffer_contains("What are you building?"));
        assert!(term.buffer_contains(INDUSTRY_PLACEHOLDER));
        assert!(term.buffer_contains(SUBMIT_LABEL));
    }

    #[test]
    fn test_focused_empty_field_hides_placeholder() {
        let form = FormState::new();
        let term = render(&form, false, 0);

        assert!(!term.buffer_contains("What are you building?"));
        assert!(term.buffer_contains(INDUSTRY_PLACEHOLDER));
    }

    #[test]
    fn test_values_and_vibe_render() {
        let mut form = FormState::with_vibe(Vibe::LuxuriousElegant);
        form.idea = TextInput::with_value("A privacy-focused smart home hub");
        form.industry = TextInput::with_value("IoT");
        let term = render(&form, false, 0);

        assert!(term.buffer_contains("A privacy-focused smart home hub"));
        assert!(term.buffer_contains("IoT"));
        assert!(term.buffer_contains("Luxurious & Elegant"));
        assert!(term.buffer_contains("◀"));
    }

    #[test]
    fn test_loading_button_shows_progress_label() {
        let mut form = FormState::new();
        form.idea = TextInput::with_value("x");
        form.industry = TextInput::with_value("y");
        let term = render(&form, true, 4);

        assert!(term.buffer_contains(LOADING_LABEL));
        assert!(!term.buffer_contains(SUBMIT_LABEL));
        assert!(term.buffer_contains(spinner_frame(4)));
    }

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(spinner_frame(0), spinner_frame(1));
        assert_ne!(spinner_frame(0), spinner_frame(2));
        assert_eq!(spinner_frame(0), spinner_frame(20));
    }

    #[test]
    fn test_tail_fitting() {
        assert_eq!(tail_fitting("hello", 10), "hello");
        assert_eq!(tail_fitting("hello world", 5), "world");
        assert_eq!(tail_fitting("", 3), "");
    }

    #[test]
    fn test_tiny_area_shows_notice() {
        let form = FormState::new();
        let mut term = TestTerminal::with_size(30, 8);
        term.render_widget(BrandForm::new(&form), term.area());
        assert!(term.buffer_contains("Terminal too small"));
    }
}
