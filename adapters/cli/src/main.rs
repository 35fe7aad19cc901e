#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that generates a room layout and prints it as text.

mod config;
mod logger;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use roomgen_core::{BoundsPolicy, GenerationParams};
use roomgen_system_generation::RoomGenerator;

use crate::{config::ConfigFile, render::OutputFormat};

/// Generates connected rectangular rooms and prints their outer walls.
#[derive(Debug, Parser)]
#[command(name = "roomgen")]
#[command(version, about = "Generate connected room layouts on a tile grid", long_about = None)]
struct CliArgs {
    /// TOML file providing the seed and generation parameters
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Number of grid columns
    #[arg(long)]
    columns: Option<u32>,

    /// Number of grid rows
    #[arg(long)]
    rows: Option<u32>,

    /// Number of rooms to attempt
    #[arg(long = "rooms")]
    room_count: Option<u32>,

    /// Smallest room side length
    #[arg(long)]
    min_size: Option<u32>,

    /// Largest room side length
    #[arg(long)]
    max_size: Option<u32>,

    /// Free placement attempts per room before anchoring to existing rooms
    #[arg(long)]
    retry_budget: Option<u32>,

    /// Free placement attempts spent on the first room
    #[arg(long)]
    bootstrap_budget: Option<u32>,

    /// Keep rooms one tile away from the last column and row
    #[arg(long)]
    strict_bounds: bool,

    /// Seed for the random source; drawn from entropy when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Text encoding of the printed grid
    #[arg(long, value_enum, default_value_t = OutputFormat::Ascii)]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Silence all log output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl CliArgs {
    /// Resolves the run settings: defaults, then the config file, then flags.
    fn resolve(&self) -> Result<(GenerationParams, Option<u64>)> {
        let config = match &self.config {
            Some(path) => ConfigFile::load(path)?,
            None => ConfigFile::default(),
        };

        let mut params = config.generation;
        self.overlay(&mut params);
        params
            .validate()
            .context("invalid generation parameters")?;

        Ok((params, self.seed.or(config.seed)))
    }

    fn overlay(&self, params: &mut GenerationParams) {
        let overrides = [
            (self.columns, &mut params.columns),
            (self.rows, &mut params.rows),
            (self.room_count, &mut params.room_count),
            (self.min_size, &mut params.min_size),
            (self.max_size, &mut params.max_size),
            (self.retry_budget, &mut params.retry_budget),
            (self.bootstrap_budget, &mut params.bootstrap_budget),
        ];
        for (value, field) in overrides {
            if let Some(value) = value {
                *field = value;
            }
        }
        if self.strict_bounds {
            params.bounds = BoundsPolicy::ExcludeFarEdge;
        }
    }
}

/// Entry point for the room generator command-line interface.
fn main() -> Result<()> {
    let args = CliArgs::parse();
    logger::init(logger::level_filter(args.verbose, args.quiet))?;

    let (params, seed) = args.resolve()?;
    let seed = seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut generator = RoomGenerator::new();
    let grid = generator.generate(&params, &mut rng);
    print!("{}", render::render(grid, args.format));

    let stats = generator.stats();
    println!(
        "rooms: {}/{}, overlapping pairs: {}, connected: {}",
        stats.total_rooms, params.room_count, stats.overlapping_pair_count, stats.all_connected
    );
    println!("seed: {seed}");
    Ok(())
}
