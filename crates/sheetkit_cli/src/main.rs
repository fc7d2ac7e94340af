//! Sheetkit CLI
//!
//! Replays JSON gesture scenarios against a headless bottom sheet and prints
//! the offsets it went through.

mod replay;
mod report;
mod scenario;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sheetkit::SheetConfig;
use tracing_subscriber::EnvFilter;

use crate::replay::Replay;
use crate::scenario::Scenario;

#[derive(Parser)]
#[command(name = "sheetkit", version, about = "Bottom sheet gesture replay tools")]
struct Cli {
    /// Log every drag decision (trace level)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a gesture scenario and report the sheet offset after each step
    Replay {
        /// Scenario JSON file
        scenario: PathBuf,

        /// Sheet configuration (sheet.toml, or a directory containing one)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Frames per second for tick steps
        #[arg(long, default_value_t = 60)]
        fps: u32,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective sheet configuration as TOML
    Config {
        /// Sheet configuration to resolve (defaults are printed when omitted)
        path: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Replay {
            scenario,
            config,
            fps,
            json,
        } => cmd_replay(scenario, config, fps, json),
        Commands::Config { path } => cmd_config(path),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<PathBuf>) -> Result<SheetConfig> {
    match path {
        Some(path) => SheetConfig::load(&path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(SheetConfig::default()),
    }
}

fn cmd_replay(scenario_path: PathBuf, config: Option<PathBuf>, fps: u32, json: bool) -> Result<()> {
    let config = load_config(config)?;
    let scenario = Scenario::from_path(&scenario_path)?;
    let fps = fps.max(1);

    tracing::info!(
        scenario = %scenario_path.display(),
        steps = scenario.steps.len(),
        fps,
        "replaying"
    );

    let report = Replay::new(&scenario, config, fps).run(&scenario);

    if json {
        report.write_json(&mut std::io::stdout().lock())?;
    } else {
        println!("{report}");
    }
    Ok(())
}

fn cmd_config(path: Option<PathBuf>) -> Result<()> {
    let config = load_config(path)?;
    print!("{}", config.to_toml()?);
    Ok(())
}
