//! Configuration file parsing for BrandCraft
//!
//! Settings live in `<config dir>/brandcraft/config.toml`; CLI flags override
//! individual values after loading.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings};
pub use types::*;
