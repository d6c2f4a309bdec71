//! Color palette for the lab theme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Rgb(9, 9, 11);
pub const CARD_BG: Color = Color::Rgb(18, 18, 23);
pub const POPUP_BG: Color = Color::Rgb(28, 28, 36);

// --- Borders ---
pub const BORDER_DIM: Color = Color::Rgb(48, 48, 60);
pub const BORDER_ACTIVE: Color = Color::Rgb(129, 140, 248);

// --- Accent ---
pub const ACCENT: Color = Color::Rgb(129, 140, 248);
pub const ACCENT_DIM: Color = Color::Rgb(67, 56, 202);

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::Rgb(228, 228, 231);
pub const TEXT_SECONDARY: Color = Color::Rgb(161, 161, 170);
pub const TEXT_MUTED: Color = Color::Rgb(82, 82, 91);
pub const TEXT_BRIGHT: Color = Color::Rgb(250, 250, 250);

/// Dark text drawn on top of accent backgrounds
pub const CONTRAST_FG: Color = Color::Rgb(9, 9, 11);

// --- Status ---
pub const STATUS_GREEN: Color = Color::Rgb(16, 185, 129);
pub const STATUS_RED: Color = Color::Rgb(244, 63, 94);

// --- Effects ---
pub const SHADOW: Color = Color::Rgb(3, 3, 4);
