/*
lib.rs

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

//! Cut a triangulated square grid into random connected pieces.
//!
//! Trisplit generates the levels of a shape-fitting puzzle: the grid is cut into a number of
//! irregular pieces that the player must put back together.
//!
//! ```
//! let partition = trisplit::generate(3, 6, Some(42)).unwrap();
//! assert_eq!(partition.piece_count(), 6);
//! assert_eq!(partition.sizes().iter().sum::<usize>(), 36);
//! ```

pub mod config;
pub mod generator;
pub mod level;
pub mod saver;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub use config::GeneratorConfig;
pub use generator::errors::GenerateError;
pub use generator::grid::{Grid, Orientation};
pub use generator::level_generator::LevelGenerator;
pub use generator::partition::{Partition, Piece};
pub use level::LevelProgression;

/// Return a random number generator.
///
/// With a seed, the generator always produces the same sequence, and therefore the same levels.
pub fn new_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::seed_from_u64(rand::rng().random()),
    }
}

/// Generate a level with the default configuration.
///
/// `shape_count` is clamped between 6 and 12.
///
/// # Errors
///
/// The function returns an error if the grid is empty or has fewer triangles than pieces.
pub fn generate(
    grid_size: u32,
    shape_count: u32,
    seed: Option<u64>,
) -> Result<Partition, GenerateError> {
    let mut rng: ChaCha8Rng = new_rng(seed);
    LevelGenerator::default().generate(grid_size, shape_count, &mut rng)
}
