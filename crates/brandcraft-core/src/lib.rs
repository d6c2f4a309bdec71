//! # brandcraft-core - Core Domain Types
//!
//! Foundation crate for BrandCraft. Provides the brand identity model, the
//! vibe enumeration, hex color parsing, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`BrandIdentity`] - Generated name, tagline, palette, mission, voice and keywords
//! - [`Swatch`] - A single palette entry (hex code + human name)
//! - [`Vibe`] - The closed set of five stylistic tones
//! - [`BrandBrief`] - The submitted form snapshot (idea, industry, vibe)
//! - [`IdentityIssue`] - Shape problems found by [`BrandIdentity::audit`]
//!
//! ### Colors (`color`)
//! - [`parse_hex()`] - Parse `#RGB` / `#RRGGBB` into an RGB triple
//! - [`is_hex_color()`] - Check the hex code format
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use brandcraft_core::prelude::*;
//! ```

pub mod color;
pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all BrandCraft crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use color::{is_hex_color, parse_hex, Rgb};
pub use error::{Error, Result, ResultExt};
pub use types::{BrandBrief, BrandIdentity, IdentityIssue, Swatch, Vibe};
