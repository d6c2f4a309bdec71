//! Semantic style builders for the lab theme.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn text_bright() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Small uppercase section headings ("BRAND MISSION", "VISUAL DNA")
pub fn section_label() -> Style {
    Style::default()
        .fg(palette::TEXT_MUTED)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_green() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

// --- Buttons ---

/// Primary call-to-action button
pub fn button_active() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Button that cannot be pressed right now
pub fn button_disabled() -> Style {
    Style::default()
        .fg(palette::TEXT_MUTED)
        .bg(palette::ACCENT_DIM)
}

/// Highlighted row in a list
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .bg(palette::POPUP_BG)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
        .style(Style::default().bg(palette::CARD_BG))
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {} ", title))
        .title_style(status_red().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(status_red())
        .style(Style::default().bg(palette::POPUP_BG))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_styles_have_correct_colors() {
        assert_eq!(text_primary().fg, Some(palette::TEXT_PRIMARY));
        assert_eq!(text_secondary().fg, Some(palette::TEXT_SECONDARY));
        assert_eq!(text_muted().fg, Some(palette::TEXT_MUTED));
        assert_eq!(text_bright().fg, Some(palette::TEXT_BRIGHT));
    }

    #[test]
    fn test_border_styles_have_correct_colors() {
        assert_eq!(border_inactive().fg, Some(palette::BORDER_DIM));
        assert_eq!(border_active().fg, Some(palette::BORDER_ACTIVE));
    }

    #[test]
    fn test_button_styles_differ_by_state() {
        assert_eq!(button_active().bg, Some(palette::ACCENT));
        assert_eq!(button_disabled().bg, Some(palette::ACCENT_DIM));
        assert!(button_active().add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_accent_bold_has_modifier() {
        let style = accent_bold();
        assert_eq!(style.fg, Some(palette::ACCENT));
        assert!(style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(accent().fg, Some(palette::ACCENT));
    }
}
