/*
cli_options.rs

Copyright 2025 Hervé Quatremain

This file is part of Trisplit.

Trisplit is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Trisplit is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Trisplit. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options.
//!
//! In command-line mode, Trisplit generates random levels and prints them, so that developers
//! can review the generated pieces or store them for the game.
//!
//! # Examples
//!
//! Generate a level with eight pieces on a 3x3 grid:
//!
//! ```text
//! $ trisplit -g 3 -s 8 --seed 42
//! Level 1: 8 pieces, sizes [5, 4, 5, 4, 4, 5, 4, 5]
//! 0000 0011 1122
//! ...
//! ```
//!
//! Run the level progression for seven levels and save the levels in a file:
//!
//! ```text
//! $ trisplit -l 7 -o levels.json
//! ```
//!
//! Verify the levels stored in a file:
//!
//! ```text
//! $ trisplit --check levels.json
//! ```

use clap::Parser;
use log::{debug, error};
use std::env;
use std::path::PathBuf;

use trisplit::config::{COPYRIGHT_NOTICE, DEFAULT_GRID_SIZE, GeneratorConfig, MIN_SHAPE_COUNT};
use trisplit::saver::SaverPartitions;
use trisplit::{GenerateError, LevelGenerator, LevelProgression, Partition};

/// Generate random Trisplit levels.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Number of cells on each side of the grid
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE)]
    grid_size: u32,

    /// Number of pieces (clamped between the minimum and maximum shape counts)
    #[arg(short, long, default_value_t = MIN_SHAPE_COUNT)]
    shapes: u32,

    /// Seed for the random generator, to reproduce the same levels
    #[arg(long)]
    seed: Option<u64>,

    /// Number of levels to generate with the same number of pieces
    #[arg(short, long, default_value_t = 1, conflicts_with = "levels")]
    count: usize,

    /// Run the level progression for this number of levels, adding one piece after each level
    #[arg(short, long)]
    levels: Option<usize>,

    /// Print the levels in JSON format
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Save the generated levels in this JSON file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verify the levels saved in this JSON file instead of generating new levels
    #[arg(long, conflicts_with_all = ["output", "levels"])]
    check: Option<PathBuf>,

    /// JSON file with the generator configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print some statistics after generating the levels
    #[arg(short = 'S', long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options. Return the process exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let config: GeneratorConfig = match &args.config {
        Some(path) => match GeneratorConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Cannot load the configuration from {}: {e}", path.display());
                return 1;
            }
        },
        None => GeneratorConfig::default(),
    };
    debug!("Configuration: {config:?}");

    //
    // Verify saved levels
    //
    if let Some(path) = args.check {
        return check(path);
    }

    //
    // Generate the levels
    //
    let mut rng = trisplit::new_rng(args.seed);
    let mut generator: LevelGenerator = LevelGenerator::new(config.clone());
    let mut partitions: Vec<Partition> = Vec::new();
    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;
    let mut visits: usize = 0;
    let mut backtracks: usize = 0;

    let mut progression: LevelProgression =
        LevelProgression::new(args.grid_size, args.shapes, &config);
    let count: usize = args.levels.unwrap_or(args.count);
    for i in 0..count {
        debug!("Iteration {i}");

        let ret: Result<Partition, GenerateError> = progression.generate(&mut generator, &mut rng);
        match ret {
            Ok(partition) => {
                total += generator.duration;
                if generator.duration > max {
                    max = generator.duration;
                }
                visits += generator.visits;
                backtracks += generator.backtracks;
                partitions.push(partition);
            }
            Err(e) => {
                error!("Generation of level {} failed", progression.level);
                eprintln!("Error: {e}");
                return 1;
            }
        }

        if args.levels.is_some() {
            progression.level_completed(&config);
        }
    }

    //
    // Print the levels
    //
    if args.json {
        match serde_json::to_string_pretty(&partitions) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Cannot serialize the levels: {e}");
                return 1;
            }
        }
    } else {
        for (i, partition) in partitions.iter().enumerate() {
            print_partition(i + 1, partition);
        }
    }

    if let Some(path) = args.output {
        let saver: SaverPartitions = SaverPartitions::new(path);
        if let Err(e) = saver.save_partitions(&partitions) {
            eprintln!("Cannot save the levels: {e}");
            return 1;
        }
    }

    // Print some stats
    if args.summary && count > 0 {
        println!(
            "
        total time = {}s
      average time = {}s
          max time = {}s
    average visits = {}
average backtracks = {}",
            total,
            total / count as f32,
            max,
            visits / count,
            backtracks / count
        );
    }
    0
}

/// Print a level as text.
fn print_partition(number: usize, partition: &Partition) {
    println!(
        "Level {number}: {} pieces, sizes {:?}",
        partition.piece_count(),
        partition.sizes()
    );
    for row in partition.rows_text() {
        println!("{row}");
    }
    println!();
}

/// Verify the levels saved in the given file.
fn check(path: PathBuf) -> u8 {
    let saver: SaverPartitions = SaverPartitions::new(path.clone());
    let partitions: Vec<Partition> = match saver.get_partitions() {
        Ok(Some(p)) => p,
        Ok(None) => {
            eprintln!("File {} does not exist", path.display());
            return 1;
        }
        Err(e) => {
            eprintln!("Cannot read {}: {e}", path.display());
            return 1;
        }
    };

    let mut errors: usize = 0;
    for (i, partition) in partitions.iter().enumerate() {
        match partition.verify() {
            Ok(()) => println!("Level {}: OK ({} pieces)", i + 1, partition.piece_count()),
            Err(e) => {
                println!("Level {}: {e}", i + 1);
                errors += 1;
            }
        }
    }
    if errors > 0 { 1 } else { 0 }
}
