//! BrandCraft - a terminal brand identity generator
//!
//! Binary entry point: parses the CLI, loads configuration, builds the
//! generation client and hands off to the TUI or the headless runner.

mod headless;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use brandcraft_app::config::{self, Settings};
use brandcraft_core::prelude::*;
use brandcraft_core::{logging, BrandBrief, Vibe};
use brandcraft_genai::{resolve_api_key, ClientConfig, GeminiClient};

use headless::{report, run_headless};

/// BrandCraft - one prompt, one brand identity
#[derive(Parser, Debug)]
#[command(name = "brandcraft")]
#[command(about = "Generate a brand identity from a one-line idea", long_about = None)]
struct Args {
    /// Config file (defaults to <config dir>/brandcraft/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Generation model override
    #[arg(long)]
    model: Option<String>,

    /// Environment variable holding the API key
    #[arg(long, value_name = "VAR")]
    api_key_env: Option<String>,

    /// Generate once and print the identity as JSON, no TUI
    #[arg(long)]
    headless: bool,

    /// What you are building (headless mode)
    #[arg(long, requires = "headless")]
    idea: Option<String>,

    /// Industry (headless mode)
    #[arg(long, requires = "headless")]
    industry: Option<String>,

    /// Vibe: modern, aggressive, friendly, luxurious or experimental
    #[arg(long)]
    vibe: Option<Vibe>,
}

impl Args {
    /// Apply CLI overrides on top of the loaded settings
    fn apply(&self, settings: &mut Settings) {
        if let Some(model) = &self.model {
            settings.generation.model = model.clone();
        }
        if let Some(env_var) = &self.api_key_env {
            settings.generation.api_key_env = env_var.clone();
        }
        if let Some(vibe) = self.vibe {
            settings.ui.default_vibe = vibe;
        }
    }

    fn brief(&self, settings: &Settings) -> BrandBrief {
        BrandBrief::new(
            self.idea.clone().unwrap_or_default(),
            self.industry.clone().unwrap_or_default(),
            self.vibe.unwrap_or(settings.ui.default_vibe),
        )
    }
}

fn load_config(path: Option<&PathBuf>) -> Settings {
    match path {
        Some(path) => config::load_settings(path),
        None => match config::default_config_path() {
            Some(path) => {
                if let Err(e) = config::init_config_file(&path) {
                    warn!("Could not write default config {}: {}", path.display(), e);
                }
                config::load_settings(&path)
            }
            None => {
                warn!("No config directory available; using defaults");
                Settings::default()
            }
        },
    }
}

fn build_client(settings: &Settings) -> Result<GeminiClient> {
    let generation = &settings.generation;
    let api_key = resolve_api_key(&generation.api_key_env)?;

    let client_config = ClientConfig::new(api_key)
        .with_api_base(generation.api_base.clone())
        .with_model(generation.model.clone())
        .with_timeout(generation.timeout())
        .with_strict_validation(generation.strict_validation);

    GeminiClient::new(client_config)
}

#[tokio::main]
async fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    let args = Args::parse();

    logging::init()?;

    let mut settings = load_config(args.config.as_ref());
    args.apply(&mut settings);
    info!(
        "Settings: model={}, strict_validation={}",
        settings.generation.model, settings.generation.strict_validation
    );

    let client = build_client(&settings)?;

    if args.headless {
        let brief = args.brief(&settings);
        let outcome = run_headless(settings, client, &brief).await;
        report(&outcome)?;
        return Ok(ExitCode::from(outcome.exit_code()));
    }

    brandcraft_tui::run(settings, client).await?;
    Ok(ExitCode::SUCCESS)
}
