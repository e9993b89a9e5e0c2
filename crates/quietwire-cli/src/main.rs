use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use quietwire_core::{GeneratorConfig, StateStore};

use quietwire_cli::{logging, setup, status};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = logging::init() {
        tracing::debug!("logging to {}", path.display());
    }

    let config = load_config()?;
    let state = StateStore::open(StateStore::default_path()?)?;

    match cli.command {
        Commands::Setup => setup::run(&config, &state),
        Commands::Status => status::run(&config, &state),
    }
}

#[derive(Parser)]
#[command(
    name = "quietwire",
    author,
    version,
    about = "Wires the deep-filter noise suppressor into the PipeWire graph"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Probe the plugin and (re)generate the filter-chain configuration.
    Setup,
    /// Report what the generated configuration currently wires up.
    Status,
}

fn load_config() -> Result<GeneratorConfig> {
    let path = match env::var_os("QUIETWIRE_CONFIG") {
        Some(raw) => Some(PathBuf::from(raw)),
        None => GeneratorConfig::default_path(),
    };
    match path {
        Some(path) => GeneratorConfig::load(&path)
            .with_context(|| format!("failed to load configuration from {}", path.display())),
        None => Ok(GeneratorConfig::default()),
    }
}
