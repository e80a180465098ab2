//! Space Creatures headless runner
//!
//! Plays the simulation without a renderer and reports the outcome.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use space_creatures::RunSettings;
use space_creatures::driver;

#[derive(Debug, Parser)]
#[command(name = "space-creatures", about = "Run the alien formation simulation headless")]
struct Args {
    /// JSON settings file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,
    /// Shooter RNG seed
    #[arg(long)]
    seed: Option<u64>,
    /// Level to start from
    #[arg(long)]
    level: Option<u32>,
    /// Tick limit for the whole run
    #[arg(long)]
    max_ticks: Option<u64>,
    /// Levels to clear before stopping (0 = no limit)
    #[arg(long)]
    max_levels: Option<u32>,
    /// Log the playfield every N ticks at debug level
    #[arg(long)]
    render_every: Option<u64>,
    /// Leave the defender idle instead of using the autopilot
    #[arg(long)]
    no_autopilot: bool,
    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,
}

fn load_settings(args: &Args) -> Result<RunSettings> {
    let mut settings = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read settings from {}", path.display()))?;
            let settings = RunSettings::from_json(&json)
                .with_context(|| format!("invalid settings in {}", path.display()))?;
            log::info!("Loaded settings from {}", path.display());
            settings
        }
        None => RunSettings::default(),
    };

    if let Some(seed) = args.seed {
        settings.seed = seed;
    }
    if let Some(level) = args.level {
        settings.start_level = level;
    }
    if let Some(max_ticks) = args.max_ticks {
        settings.max_ticks = max_ticks;
    }
    if let Some(max_levels) = args.max_levels {
        settings.max_levels = max_levels;
    }
    if let Some(every) = args.render_every {
        settings.debug_render_every = every;
    }
    if args.no_autopilot {
        settings.autopilot = false;
    }

    Ok(settings.sanitized())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let settings = load_settings(&args)?;

    let summary = driver::run(&settings);

    if args.json {
        let json = serde_json::to_string_pretty(&summary).context("failed to encode summary")?;
        println!("{}", json);
    } else {
        println!(
            "{:?}: level {} reached, {} cleared, score {} in {} ticks (seed {})",
            summary.outcome,
            summary.final_level,
            summary.levels_cleared,
            summary.score,
            summary.ticks,
            summary.seed
        );
    }
    Ok(())
}
