//! Local host for the rural delivery customization engine.
//!
//! Evaluates run input documents the way the function host would, and
//! authors the configuration metafield value from a TOML settings form
//! (and back).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::warn;

use rural_delivery::core::normalize::normalize_postcodes;
use rural_delivery::core::presets::Preset;
use rural_delivery::core::settings::{SettingsForm, config_warnings};
use rural_delivery::core::types::RuralConfig;
use rural_delivery::exit_codes;
use rural_delivery::io::input::read_input;
use rural_delivery::io::settings::{DEFAULT_SETTINGS_PATH, load_settings, write_settings};
use rural_delivery::logging;
use rural_delivery::run::run_json;

#[derive(Parser)]
#[command(
    name = "rural-delivery",
    version,
    about = "Hide delivery options for rural destinations"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate a run input document and print the function result JSON.
    Run {
        /// Input document path (reads stdin when omitted).
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Print the metafield JSON value for a settings file.
    Metafield {
        /// Settings TOML path.
        #[arg(short, long, default_value = DEFAULT_SETTINGS_PATH)]
        settings: PathBuf,
    },
    /// Write a default (disabled) settings file if missing.
    InitSettings {
        /// Settings TOML path.
        #[arg(short, long, default_value = DEFAULT_SETTINGS_PATH)]
        settings: PathBuf,
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
        /// Prefill postcodes from a built-in rural list.
        #[arg(long, value_enum)]
        preset: Option<Preset>,
    },
    /// Rebuild the settings file from a stored metafield value.
    Import {
        /// Metafield JSON text path (reads stdin when omitted).
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Settings TOML path.
        #[arg(short, long, default_value = DEFAULT_SETTINGS_PATH)]
        settings: PathBuf,
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
    /// Print the postcodes of a built-in rural list, one per line.
    Presets {
        #[arg(value_enum)]
        preset: Preset,
    },
    /// Print the normalized postcode tokens for the given entries.
    Tokens {
        /// Raw postcode entries, e.g. "9013. 9012".
        #[arg(required = true)]
        entries: Vec<String>,
    },
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Run { input } => cmd_run(input.as_deref()),
        Command::Metafield { settings } => cmd_metafield(&settings),
        Command::InitSettings {
            settings,
            force,
            preset,
        } => cmd_init_settings(&settings, force, preset),
        Command::Import {
            input,
            settings,
            force,
        } => cmd_import(input.as_deref(), &settings, force),
        Command::Presets { preset } => cmd_presets(preset),
        Command::Tokens { entries } => cmd_tokens(&entries),
    }
}

fn cmd_run(input: Option<&Path>) -> Result<()> {
    let raw = read_input(input)?;
    let result = run_json(&raw);
    let payload = serde_json::to_string(&result).context("serialize function result")?;
    println!("{payload}");
    Ok(())
}

fn cmd_metafield(settings: &Path) -> Result<()> {
    let form = load_settings(settings)?;
    let config = form.to_config();
    config
        .validate()
        .with_context(|| format!("invalid settings {}", settings.display()))?;
    for warning in config_warnings(&config) {
        warn!("{warning}");
    }
    let value = config
        .to_metafield_value()
        .context("serialize metafield value")?;
    println!("{value}");
    Ok(())
}

fn cmd_init_settings(settings: &Path, force: bool, preset: Option<Preset>) -> Result<()> {
    if !force && settings.exists() {
        return Ok(());
    }
    let form = SettingsForm {
        postcodes: preset.map(Preset::settings_text).unwrap_or_default(),
        ..SettingsForm::default()
    };
    write_settings(settings, &form)
}

fn cmd_import(input: Option<&Path>, settings: &Path, force: bool) -> Result<()> {
    if !force && settings.exists() {
        bail!(
            "settings file {} already exists (use --force to overwrite)",
            settings.display()
        );
    }
    let raw = read_input(input)?;
    let config = RuralConfig::from_metafield_value(&raw);
    config.validate().context("stored metafield value")?;
    for warning in config_warnings(&config) {
        warn!("{warning}");
    }
    write_settings(settings, &SettingsForm::from_config(&config))
}

fn cmd_presets(preset: Preset) -> Result<()> {
    for postcode in preset.postcodes() {
        println!("{postcode}");
    }
    Ok(())
}

fn cmd_tokens(entries: &[String]) -> Result<()> {
    for token in normalize_postcodes(entries) {
        println!("{token}");
    }
    Ok(())
}
