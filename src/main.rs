//! Nougat - drawer geometry and preference inspector
//!
//! Converts points between orientation frames, reports screen bounds, and shows
//! the drawer preferences and toggles derived from the persisted settings.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nougat::cli::{BoundsArgs, ConvertArgs, PrefsArgs, TogglesArgs};
use nougat::config::Config;
use nougat::constants::APP_BINARY_NAME;
use nougat::services::PreferenceManager;

/// Nougat - drawer geometry and preference inspector
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Path to config file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a point between orientation frames
    Convert(ConvertArgs),
    /// Show screen bounds for an orientation
    Bounds(BoundsArgs),
    /// Show drawer preferences and theme colors
    Prefs(PrefsArgs),
    /// List enabled and disabled toggles
    Toggles(TogglesArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match &cli.command {
        Command::Convert(args) => args.execute(&config),
        Command::Bounds(args) => args.execute(&config),
        Command::Prefs(args) => {
            let prefs = PreferenceManager::from_config(&config)?;
            args.execute(&prefs)
        }
        Command::Toggles(args) => {
            let prefs = PreferenceManager::from_config(&config)?;
            args.execute(&prefs)
        }
    }
}
