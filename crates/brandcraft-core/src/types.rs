//! Core domain types for brand identity generation

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::is_hex_color;

/// Number of palette colors the generation service is asked for
pub const PALETTE_SIZE: usize = 4;

/// Number of keywords the prompt asks for (not enforced by the schema)
pub const KEYWORD_COUNT: usize = 5;

// ─────────────────────────────────────────────────────────────────────────────
// Vibe
// ─────────────────────────────────────────────────────────────────────────────

/// Stylistic tone constraint inserted into the generation prompt.
///
/// A closed set of five options; the label is what the prompt carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Vibe {
    #[default]
    #[serde(rename = "Modern & Professional", alias = "modern")]
    ModernProfessional,
    #[serde(rename = "Aggressive & Disruptive", alias = "aggressive")]
    AggressiveDisruptive,
    #[serde(rename = "Friendly & Approachable", alias = "friendly")]
    FriendlyApproachable,
    #[serde(rename = "Luxurious & Elegant", alias = "luxurious")]
    LuxuriousElegant,
    #[serde(rename = "Experimental & Funky", alias = "experimental")]
    ExperimentalFunky,
}

impl Vibe {
    /// All vibes in display order
    pub const ALL: [Vibe; 5] = [
        Vibe::ModernProfessional,
        Vibe::AggressiveDisruptive,
        Vibe::FriendlyApproachable,
        Vibe::LuxuriousElegant,
        Vibe::ExperimentalFunky,
    ];

    /// Human-readable label, inserted verbatim into the prompt
    pub fn label(&self) -> &'static str {
        match self {
            Vibe::ModernProfessional => "Modern & Professional",
            Vibe::AggressiveDisruptive => "Aggressive & Disruptive",
            Vibe::FriendlyApproachable => "Friendly & Approachable",
            Vibe::LuxuriousElegant => "Luxurious & Elegant",
            Vibe::ExperimentalFunky => "Experimental & Funky",
        }
    }

    /// Short CLI-friendly name
    pub fn slug(&self) -> &'static str {
        match self {
            Vibe::ModernProfessional => "modern",
            Vibe::AggressiveDisruptive => "aggressive",
            Vibe::FriendlyApproachable => "friendly",
            Vibe::LuxuriousElegant => "luxurious",
            Vibe::ExperimentalFunky => "experimental",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|v| v == self).unwrap_or(0)
    }

    /// Next vibe, wrapping around
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous vibe, wrapping around
    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Vibe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Vibe {
    type Err = String;

    /// Accepts either the full label or the slug, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.label().eq_ignore_ascii_case(needle) || v.slug().eq_ignore_ascii_case(needle))
            .ok_or_else(|| {
                let options: Vec<&str> = Self::ALL.iter().map(|v| v.slug()).collect();
                format!("unknown vibe '{}' (expected one of: {})", s, options.join(", "))
            })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Brief
// ─────────────────────────────────────────────────────────────────────────────

/// Snapshot of the form fields handed to the generation service
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BrandBrief {
    pub idea: String,
    pub industry: String,
    pub vibe: Vibe,
}

impl BrandBrief {
    pub fn new(idea: impl Into<String>, industry: impl Into<String>, vibe: Vibe) -> Self {
        Self {
            idea: idea.into(),
            industry: industry.into(),
            vibe,
        }
    }

    /// A brief can be submitted once both idea and industry are non-empty.
    ///
    /// Whitespace-only values count as non-empty.
    pub fn is_submittable(&self) -> bool {
        !self.idea.is_empty() && !self.industry.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Identity
// ─────────────────────────────────────────────────────────────────────────────

/// A single palette color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swatch {
    /// Color code as returned by the service (not validated)
    pub hex: String,
    /// Human name for the color
    pub name: String,
}

impl Swatch {
    pub fn new(hex: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            hex: hex.into(),
            name: name.into(),
        }
    }
}

/// The generated brand identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandIdentity {
    pub name: String,
    pub tagline: String,
    pub colors: Vec<Swatch>,
    pub description: String,
    pub voice: String,
    pub keywords: Vec<String>,
}

/// A shape problem in a generated identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityIssue {
    EmptyName,
    PaletteSize { expected: usize, actual: usize },
    KeywordCount { expected: usize, actual: usize },
    InvalidHex { hex: String },
}

impl fmt::Display for IdentityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentityIssue::EmptyName => write!(f, "brand name is empty"),
            IdentityIssue::PaletteSize { expected, actual } => {
                write!(f, "expected {} colors, got {}", expected, actual)
            }
            IdentityIssue::KeywordCount { expected, actual } => {
                write!(f, "expected {} keywords, got {}", expected, actual)
            }
            IdentityIssue::InvalidHex { hex } => write!(f, "'{}' is not a hex color", hex),
        }
    }
}

impl BrandIdentity {
    /// Keywords as lower-cased hashtags, in order
    pub fn hashtags(&self) -> Vec<String> {
        self.keywords
            .iter()
            .map(|kw| format!("#{}", kw.to_lowercase()))
            .collect()
    }

    /// Hashtags joined by single spaces
    pub fn tag_line(&self) -> String {
        self.hashtags().join(" ")
    }

    /// Find the swatch with the given hex code
    pub fn swatch(&self, hex: &str) -> Option<&Swatch> {
        self.colors.iter().find(|s| s.hex == hex)
    }

    /// Check the identity against the shape the prompt asked for.
    ///
    /// An empty list means the identity matches the requested shape.
    pub fn audit(&self) -> Vec<IdentityIssue> {
        let mut issues = Vec::new();

        if self.name.trim().is_empty() {
            issues.push(IdentityIssue::EmptyName);
        }
        if self.colors.len() != PALETTE_SIZE {
            issues.push(IdentityIssue::PaletteSize {
                expected: PALETTE_SIZE,
                actual: self.colors.len(),
            });
        }
        if self.keywords.len() != KEYWORD_COUNT {
            issues.push(IdentityIssue::KeywordCount {
                expected: KEYWORD_COUNT,
                actual: self.keywords.len(),
            });
        }
        for swatch in &self.colors {
            if !is_hex_color(&swatch.hex) {
                issues.push(IdentityIssue::InvalidHex {
                    hex: swatch.hex.clone(),
                });
            }
        }

        issues
    }
}
