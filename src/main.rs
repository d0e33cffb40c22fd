// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line driver: list the tile types with a given number of arms.

use std::collections::HashSet;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use tile_symmetry::diagnostics::TracingSink;
use tile_symmetry::{generate, Enumerator, Placement, Reduction, Settings, TileError};

#[derive(Parser, Debug)]
#[command(name = "tiles")]
#[command(about = "List cuboctahedral tile types up to rotation")]
#[command(version)]
struct Args {
    /// Number of arms (0 to 12)
    arms: usize,

    /// JSON settings file; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Only use the 24 proper rotations
    #[arg(long)]
    no_extended: bool,

    /// Drop the half turn about a1 (diagnostic only)
    #[arg(long)]
    no_half_turn: bool,

    /// Do not skip tiles without an arm at a1
    #[arg(long)]
    no_pruning: bool,

    /// Reduce signature groups concurrently
    #[arg(short, long)]
    parallel: bool,

    /// Report orbit and stabilizer sizes for each tile type
    #[arg(short, long)]
    orbits: bool,

    /// Find the tile type of these arms, e.g. "a1, b3" (repeatable)
    #[arg(short, long)]
    lookup: Vec<String>,

    /// Increase log detail (-v debug, -vv trace with every comparison)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "tile_symmetry=debug,tiles=debug",
        _ => "tile_symmetry=trace,tiles=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn settings(args: &Args) -> Result<Settings, TileError> {
    let mut settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if args.no_extended {
        settings.symmetry.extended_rotations = false;
    }
    if args.no_half_turn {
        settings.symmetry.half_turn = false;
    }
    if args.no_pruning {
        settings.reduce.anchor_pruning = false;
    }
    if args.parallel {
        settings.reduce.parallel = true;
    }
    Ok(settings)
}

fn print_orbits(enumerator: &Enumerator, reduction: &Reduction, arms: usize) {
    let engine = enumerator.engine();
    let mut covered: HashSet<Placement> = HashSet::new();
    let mut total = 0;
    for &tile in &reduction.representatives {
        let tracker = engine.orbit_stabilizer(tile);
        println!();
        println!("{}", tile);
        println!("Orbit:\t{}", tracker.orbit_size());
        println!("Stabilizers:\t{}", tracker.stabilizer_count());
        total += tracker.orbit_size();
        covered.extend(tracker.orbit());
    }
    println!("Total orbit size:\t{}", total);

    let missed: Vec<Placement> = generate(arms)
        .into_iter()
        .filter(|p| !covered.contains(p))
        .collect();
    println!("Tiles not reached by rotation:");
    if missed.is_empty() {
        println!("None");
    }
    for tile in missed {
        println!("{}", tile);
    }
}

fn lookup(enumerator: &Enumerator, reduction: &Reduction, arms: usize, text: &str) -> Result<(), TileError> {
    let tile: Placement = text.parse()?;
    if tile.len() != arms {
        warn!(tile = %tile, arms, "tile does not have the requested number of arms");
        return Ok(());
    }
    match reduction.representative_of(enumerator.engine(), tile) {
        Some(representative) => println!("{} is equivalent to the tile {}", tile, representative),
        None => error!(tile = %tile, "no representative found"),
    }
    Ok(())
}

fn run(args: &Args) -> Result<(), TileError> {
    let settings = settings(args)?;
    let enumerator = Enumerator::new(&settings);

    let reduction = if args.verbose >= 2 {
        enumerator.unique_tiles_with(args.arms, &mut TracingSink::default())
    } else {
        enumerator.unique_tiles(args.arms)
    };

    println!("Tile types:");
    for tile in &reduction.representatives {
        println!("{}", tile);
    }
    println!(
        "There are {} unique tile types with {} arms",
        reduction.len(),
        args.arms
    );
    info!(statistics = %reduction.statistics, "done");

    if args.orbits {
        print_orbits(&enumerator, &reduction, args.arms);
    }
    for text in &args.lookup {
        if let Err(e) = lookup(&enumerator, &reduction, args.arms, text) {
            if e.is_fatal() {
                return Err(e);
            }
            error!("{}: {}", text, e);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
