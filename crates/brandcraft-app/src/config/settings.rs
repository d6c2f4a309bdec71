//! Settings loading from `config.toml`

use std::path::{Path, PathBuf};

use brandcraft_core::prelude::*;

use super::types::Settings;

const CONFIG_DIR: &str = "brandcraft";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_CONFIG: &str = r#"# BrandCraft Configuration

[generation]
model = "gemini-3-flash-preview"
api_base = "https://generativelanguage.googleapis.com"
api_key_env = "GEMINI_API_KEY"   # API_KEY is checked when this is unset
request_timeout_secs = 0         # 0 = no timeout
strict_validation = false        # Reject identities without 4 colors / 5 keywords

[ui]
copy_ack_ms = 2000
default_vibe = "Modern & Professional"

[export]
directory = ""        # Empty = current directory
print_command = ""    # Empty = no printing, "auto" = lp/lpr from PATH
"#;

/// Default config file location: `<config dir>/brandcraft/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `config_path`.
///
/// A missing file yields defaults; an unreadable or invalid file is logged
/// and also yields defaults.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write the commented default config to `config_path` if nothing is there.
///
/// Returns `true` when a file was created.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", config_path, e)))?;
    info!("Created default config at {:?}", config_path);
    Ok(true)
}
