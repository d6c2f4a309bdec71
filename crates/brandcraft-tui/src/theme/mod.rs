//! Theme for the BrandCraft terminal UI.
//!
//! - `palette` holds raw colors
//! - `styles` builds semantic styles and blocks from them

pub mod palette;
pub mod styles;
