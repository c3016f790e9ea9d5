use std::path::PathBuf;

use anyhow::{Context, Result};
use cave_core::{GeneratorConfig, MAX_FILL_PROBABILITY, generate_cave, generate_runtime_seed};
use clap::{ArgAction, Parser};
use env_logger::{Builder, Env};
use log::info;

mod seed;

use seed::SeedChoice;

/// Generate a cellular-automata cave map and print it as text.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML file with generator parameters; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Map width in cells
    #[arg(long)]
    width: Option<usize>,
    /// Map height in cells
    #[arg(long)]
    height: Option<usize>,
    /// Percentage of interior cells seeded as walls
    #[arg(
        short,
        long,
        value_parser = clap::value_parser!(u8).range(0..=i64::from(MAX_FILL_PROBABILITY))
    )]
    fill: Option<u8>,
    /// Number of conservative (cave carving) steps
    #[arg(long)]
    conservative_steps: Option<u32>,
    /// Number of smooth (cleanup) steps run after the conservative ones
    #[arg(long)]
    smooth_steps: Option<u32>,
    /// Seed for the random source; a fresh one is derived per run when absent
    #[arg(short, long)]
    seed: Option<u64>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = resolve_config(&args)?;
    let seed = SeedChoice::resolve(args.seed, generate_runtime_seed);
    info!("using seed {} from {}", seed.value(), seed.source());

    let cave = generate_cave(&config, seed.value())
        .with_context(|| format!("Failed to generate cave with {config:?}"))?;
    info!("cave fingerprint {:016x}", cave.fingerprint());

    print!("{}", cave.render());
    Ok(())
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    Builder::from_env(Env::default().default_filter_or(default_filter)).init();
}

fn resolve_config(args: &Args) -> Result<GeneratorConfig> {
    let mut config = match &args.config {
        Some(path) => GeneratorConfig::load(path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => GeneratorConfig::default(),
    };

    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(fill) = args.fill {
        config.fill_probability = fill;
    }
    if let Some(steps) = args.conservative_steps {
        config.conservative_steps = steps;
    }
    if let Some(steps) = args.smooth_steps {
        config.smooth_steps = steps;
    }

    config.validate().context("Invalid generator parameters")?;
    Ok(config)
}
