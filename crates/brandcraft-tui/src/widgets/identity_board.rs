//! Result board: the generated identity, its palette and the export card

use brandcraft_app::ResultBoard;
use brandcraft_core::color::parse_hex;
use brandcraft_core::{BrandIdentity, Swatch};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::layout;
use crate::theme::styles;

pub const MISSION_LABEL: &str = "BRAND MISSION";
pub const VOICE_LABEL: &str = "VOICE & TONE";
pub const PALETTE_TITLE: &str = " VISUAL DNA ";
pub const LAUNCH_TITLE: &str = "Ready to launch?";
pub const LAUNCH_BODY: &str = "Your brand identity is the foundation. Now, go build the future.";
pub const EXPORT_LABEL: &str = " EXPORT BOARD ";

const COPIED_GLYPH: &str = "✓";
const COPY_GLYPH: &str = "⧉";
const SWATCH_CHIP: &str = "██████";
const EXPORT_CARD_HEIGHT: u16 = 6;

/// The result view for one generated identity
pub struct IdentityBoard<'a> {
    board: &'a ResultBoard,
    copied_hex: Option<&'a str>,
}

impl<'a> IdentityBoard<'a> {
    pub fn new(board: &'a ResultBoard) -> Self {
        Self {
            board,
            copied_hex: None,
        }
    }

    /// Mark the swatch whose hex was just copied
    pub fn copied(mut self, hex: Option<&'a str>) -> Self {
        self.copied_hex = hex;
        self
    }

    fn render_story(&self, area: Rect, buf: &mut Buffer) {
        let chunks =
            Layout::vertical([Constraint::Min(4), Constraint::Length(EXPORT_CARD_HEIGHT)])
                .split(area);

        let block = styles::glass_block(false);
        let inner = block.inner(chunks[0]);
        block.render(chunks[0], buf);

        Paragraph::new(story_lines(&self.board.identity))
            .wrap(Wrap { trim: true })
            .render(inner.inner(Margin::new(1, 0)), buf);

        render_export_card(chunks[1], buf);
    }

    fn render_palette(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true)
            .title(PALETTE_TITLE)
            .title_style(styles::section_label());
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = self
            .board
            .identity
            .colors
            .iter()
            .enumerate()
            .flat_map(|(index, swatch)| {
                let copied = self.copied_hex == Some(swatch.hex.as_str());
                swatch_lines(index, swatch, index == self.board.selected, copied)
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

impl Widget for IdentityBoard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let areas = layout::board(area);
        self.render_story(areas.story, buf);
        self.render_palette(areas.palette, buf);
    }
}

fn story_lines(identity: &BrandIdentity) -> Vec<Line<'_>> {
    vec![
        Line::from(Span::styled(
            identity.name.as_str(),
            styles::text_bright().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(Span::styled(
            format!("\u{201C}{}\u{201D}", identity.tagline),
            styles::accent().add_modifier(Modifier::ITALIC),
        )),
        Line::default(),
        Line::from(Span::styled(MISSION_LABEL, styles::section_label())),
        Line::from(Span::styled(
            identity.description.as_str(),
            styles::text_primary(),
        )),
        Line::default(),
        Line::from(Span::styled(VOICE_LABEL, styles::section_label())),
        Line::from(Span::styled(
            identity.voice.as_str(),
            styles::text_secondary().add_modifier(Modifier::ITALIC),
        )),
        Line::default(),
        Line::from(Span::styled(identity.tag_line(), styles::accent())),
    ]
}

/// Two lines per swatch: chip and name, then hex and copy state
fn swatch_lines(index: usize, swatch: &Swatch, selected: bool, copied: bool) -> [Line<'static>; 2] {
    let chip_style = match parse_hex(&swatch.hex) {
        Some(rgb) => Style::default().fg(Color::Rgb(rgb.r, rgb.g, rgb.b)),
        None => styles::text_muted(),
    };
    let row_style = if selected {
        styles::focused_selected()
    } else {
        styles::text_primary()
    };
    let marker = if selected { "▸" } else { " " };

    let (glyph, glyph_style) = if copied {
        (COPIED_GLYPH, styles::status_green().add_modifier(Modifier::BOLD))
    } else {
        (COPY_GLYPH, styles::text_muted())
    };

    [
        Line::from(vec![
            Span::styled(format!("{}{} ", marker, index + 1), row_style),
            Span::styled(SWATCH_CHIP, chip_style),
            Span::styled(" ", row_style),
            Span::styled(
                swatch.name.to_uppercase(),
                row_style.add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("   ", row_style),
            Span::styled(SWATCH_CHIP, chip_style),
            Span::styled(format!(" {} ", swatch.hex), styles::text_secondary()),
            Span::styled(glyph, glyph_style),
        ]),
    ]
}

fn render_export_card(area: Rect, buf: &mut Buffer) {
    let block = styles::glass_block(false);
    let inner = block.inner(area);
    block.render(area, buf);

    let lines = vec![
        Line::from(Span::styled(LAUNCH_TITLE, styles::text_bright())),
        Line::from(Span::styled(LAUNCH_BODY, styles::text_secondary())),
        Line::from(vec![
            Span::styled(EXPORT_LABEL, styles::button_active()),
            Span::styled(" (e)", styles::text_muted()),
        ]),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(inner, buf);
}
