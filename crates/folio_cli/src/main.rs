//! Folio CLI
//!
//! Drives the portfolio controllers from the command line:
//! - `check-config` validates a `folio.toml`
//! - `catalog` lists the projects in the strip
//! - `type` prints the typewriter sequence tick by tick
//! - `run` executes a headless scenario and reports the outcome

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_animation::Typewriter;
use folio_app::headless_runner::run_loaded_scenario;
use folio_app::headless_scenario::HeadlessScenario;
use folio_app::{Catalog, FolioConfig, Portfolio};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Portfolio page controllers, headless
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Validate, inspect and script the portfolio page controllers")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a configuration file (or a directory holding folio.toml)
    CheckConfig {
        path: PathBuf,
    },

    /// List the projects shown in the strip
    Catalog {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the typewriter heading for a number of ticks
    Type {
        #[arg(short, long, default_value = "20")]
        ticks: usize,

        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Run a headless scenario file
    Run {
        scenario: PathBuf,

        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write the JSON report to this relative path instead of stdout
        #[arg(short, long)]
        report: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::CheckConfig { path } => cmd_check_config(&path),
        Commands::Catalog { config } => cmd_catalog(config.as_deref()),
        Commands::Type { ticks, config } => cmd_type(ticks, config.as_deref()),
        Commands::Run {
            scenario,
            config,
            report,
        } => {
            let passed = cmd_run(&scenario, config.as_deref(), report.as_deref())?;
            if !passed {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<FolioConfig> {
    match path {
        Some(path) => FolioConfig::load(path),
        None => Ok(FolioConfig::default()),
    }
}

fn load_catalog(config: &FolioConfig) -> Result<Catalog> {
    match &config.catalog {
        Some(path) => Catalog::load(path),
        None => Catalog::builtin().context("Built-in catalog is invalid"),
    }
}

fn cmd_check_config(path: &Path) -> Result<()> {
    let config = FolioConfig::load(path)?;
    let catalog = load_catalog(&config)?;

    let viewport = config.viewport;
    let device = viewport.device_class(config.scroll.compact_breakpoint);
    info!(
        "Configuration OK: {} roles, {} projects, {:?} viewport {}x{}",
        config.typewriter.roles.len(),
        catalog.len(),
        device,
        viewport.width,
        viewport.height
    );
    Ok(())
}

fn cmd_catalog(config: Option<&Path>) -> Result<()> {
    let config = load_config(config)?;
    let catalog = load_catalog(&config)?;

    for project in catalog.projects() {
        println!(
            "{:>3}  {:<28} {} image(s)  [{}]",
            project.id,
            project.title,
            project.gallery().len(),
            project.technologies.join(", ")
        );
    }

    let device = config.viewport.device_class(config.scroll.compact_breakpoint);
    info!(
        "{} projects, {}px per item on a {:?} viewport",
        catalog.len(),
        config.scroll.item_width(device),
        device
    );
    Ok(())
}

fn cmd_type(ticks: usize, config: Option<&Path>) -> Result<()> {
    let config = load_config(config)?;
    let mut typewriter =
        Typewriter::new(config.typewriter.roles.clone(), config.typewriter.delays())?;

    let mut elapsed_ms = 0;
    for tick in 1..=ticks {
        elapsed_ms += typewriter.state().tick_delay_ms;
        let state = typewriter.tick();
        println!(
            "{:>4} {:>7}ms  {:<20} {:?} next in {}ms",
            tick, elapsed_ms, state.visible_text, state.mode, state.tick_delay_ms
        );
    }
    Ok(())
}

fn cmd_run(scenario_path: &Path, config: Option<&Path>, report: Option<&Path>) -> Result<bool> {
    let config = load_config(config)?;
    let catalog = load_catalog(&config)?;
    let scenario = HeadlessScenario::from_path(scenario_path)?;

    info!(
        "Running {} ({} steps)",
        scenario_path.display(),
        scenario.steps.len()
    );

    let mut portfolio = Portfolio::new(config, catalog)?;
    let outcome = run_loaded_scenario(&scenario, &mut portfolio);

    match report {
        Some(path) => {
            outcome.report().write_to_path(path)?;
            info!("Report written to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            outcome.report().write_to_writer(&mut stdout.lock())?;
        }
    }

    if outcome.is_failed() {
        let report = outcome.report();
        tracing::error!(
            "Scenario failed at step {}: {}",
            report.failed_step_index().unwrap_or_default(),
            report.message().unwrap_or("unknown failure")
        );
        return Ok(false);
    }

    info!("Scenario passed");
    Ok(true)
}
