//! Configuration types for BrandCraft
//!
//! Defines `Settings` (the `config.toml` file) and its sections.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use brandcraft_core::Vibe;
use brandcraft_genai::{DEFAULT_API_BASE, DEFAULT_API_KEY_ENV, DEFAULT_MODEL};

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub generation: GenerationSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub export: ExportSettings,
}

/// Generation service settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GenerationSettings {
    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Transport timeout in seconds; 0 disables it
    #[serde(default)]
    pub request_timeout_secs: u64,

    /// Treat identities that differ from the requested shape as failures
    #[serde(default)]
    pub strict_validation: bool,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_base: default_api_base(),
            api_key_env: default_api_key_env(),
            request_timeout_secs: 0,
            strict_validation: false,
        }
    }
}

impl GenerationSettings {
    pub fn timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// How long the "copied" marker stays on a swatch
    #[serde(default = "default_copy_ack_ms")]
    pub copy_ack_ms: u64,

    /// Vibe preselected when the form opens
    #[serde(default)]
    pub default_vibe: Vibe,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            copy_ack_ms: default_copy_ack_ms(),
            default_vibe: Vibe::default(),
        }
    }
}

impl UiSettings {
    pub fn copy_ack_duration(&self) -> Duration {
        Duration::from_millis(self.copy_ack_ms)
    }
}

/// Export / print settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ExportSettings {
    /// Directory for exported boards; empty means the working directory
    #[serde(default)]
    pub directory: String,

    /// Command the exported file is handed to; empty disables printing,
    /// `auto` picks `lp` or `lpr` from PATH
    #[serde(default)]
    pub print_command: String,
}

/// How an exported board gets printed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintCommand {
    Disabled,
    Auto,
    /// Program plus leading arguments; the file path is appended
    Custom(Vec<String>),
}

impl ExportSettings {
    pub fn directory_path(&self) -> PathBuf {
        if self.directory.trim().is_empty() {
            PathBuf::from(".")
        } else {
            PathBuf::from(self.directory.trim())
        }
    }

    pub fn print_command(&self) -> PrintCommand {
        let command = self.print_command.trim();
        if command.is_empty() {
            PrintCommand::Disabled
        } else if command.eq_ignore_ascii_case("auto") {
            PrintCommand::Auto
        } else {
            PrintCommand::Custom(command.split_whitespace().map(String::from).collect())
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

fn default_copy_ack_ms() -> u64 {
    2000
}
