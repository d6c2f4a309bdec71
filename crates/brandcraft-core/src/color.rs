//! Hex color code parsing for palette swatches

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Accepts `#RGB` and `#RRGGBB`; the leading `#` is optional.
static HEX_COLOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("Invalid hex color regex")
});

/// An 8-bit RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Relative luminance in the 0.0..=1.0 range (ITU-R BT.709 weights).
    pub fn luminance(&self) -> f64 {
        (0.2126 * f64::from(self.r) + 0.7152 * f64::from(self.g) + 0.0722 * f64::from(self.b))
            / 255.0
    }

    /// Whether dark text reads better than light text on this color.
    pub fn is_light(&self) -> bool {
        self.luminance() > 0.55
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Check whether a string is a `#RGB` or `#RRGGBB` color code
pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR_PATTERN.is_match(value.trim())
}

/// Parse a hex color code into an [`Rgb`] triple.
///
/// Returns `None` for anything that is not `#RGB` / `#RRGGBB`
/// (case-insensitive, surrounding whitespace ignored).
pub fn parse_hex(value: &str) -> Option<Rgb> {
    let trimmed = value.trim();
    if !is_hex_color(trimmed) {
        return None;
    }
    let digits = trimmed.trim_start_matches('#');

    if digits.len() == 3 {
        let mut channels = digits.chars().map(|c| {
            let v = c.to_digit(16).unwrap_or(0) as u8;
            v * 17
        });
        let r = channels.next()?;
        let g = channels.next()?;
        let b = channels.next()?;
        return Some(Rgb::new(r, g, b));
    }

    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(Rgb::new(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_six_digit_hex() {
        assert_eq!(parse_hex("#1A1A2E"), Some(Rgb::new(0x1A, 0x1A, 0x2E)));
        assert_eq!(parse_hex("#e94560"), Some(Rgb::new(0xE9, 0x45, 0x60)));
    }

    #[test]
    fn test_parse_three_digit_hex_expands() {
        assert_eq!(parse_hex("#fff"), Some(Rgb::new(255, 255, 255)));
        assert_eq!(parse_hex("#0a0"), Some(Rgb::new(0, 0xAA, 0)));
    }

    #[test]
    fn test_parse_without_hash_and_with_whitespace() {
        assert_eq!(parse_hex("0F3460"), Some(Rgb::new(0x0F, 0x34, 0x60)));
        assert_eq!(parse_hex("  #F1F1F1 "), Some(Rgb::new(0xF1, 0xF1, 0xF1)));
    }

    #[test]
    fn test_parse_rejects_invalid_codes() {
        assert_eq!(parse_hex(""), None);
        assert_eq!(parse_hex("#12345"), None);
        assert_eq!(parse_hex("#GGGGGG"), None);
        assert_eq!(parse_hex("midnight blue"), None);
        assert_eq!(parse_hex("#1A1A2E80"), None);
    }

    #[test]
    fn test_is_hex_color() {
        assert!(is_hex_color("#1A1A2E"));
        assert!(is_hex_color("#abc"));
        assert!(!is_hex_color("rgb(0,0,0)"));
    }

    #[test]
    fn test_display_is_uppercase_hex() {
        assert_eq!(Rgb::new(0xe9, 0x45, 0x60).to_string(), "#E94560");
    }

    #[test]
    fn test_light_and_dark_detection() {
        assert!(Rgb::new(0xF1, 0xF1, 0xF1).is_light());
        assert!(!Rgb::new(0x1A, 0x1A, 0x2E).is_light());
    }
}
