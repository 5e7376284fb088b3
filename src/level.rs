/*
level.rs

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

//! Level progression.
//!
//! Each time the player completes a level, the next level is generated with one more piece,
//! until the maximum number of pieces is reached.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::GeneratorConfig;
use crate::generator::errors::GenerateError;
use crate::generator::level_generator::LevelGenerator;
use crate::generator::partition::Partition;

/// Level progression object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LevelProgression {
    /// Number of cells on each side of the grid.
    pub grid_size: u32,

    /// Number of pieces for the current level.
    pub shape_count: u32,

    /// Current level, starting at 1.
    pub level: usize,
}

impl LevelProgression {
    /// Create a [`LevelProgression`] object.
    ///
    /// The starting shape count is clamped between the bounds of the configuration.
    pub fn new(grid_size: u32, shape_count: u32, config: &GeneratorConfig) -> Self {
        Self {
            grid_size,
            shape_count: config.clamp_shape_count(shape_count),
            level: 1,
        }
    }

    /// Generate the partition for the current level.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        generator: &mut LevelGenerator,
        rng: &mut R,
    ) -> Result<Partition, GenerateError> {
        debug!(
            "Level {}: {} pieces on a {}x{} grid",
            self.level, self.shape_count, self.grid_size, self.grid_size
        );
        generator.generate(self.grid_size, self.shape_count, rng)
    }

    /// Move to the next level.
    ///
    /// The next level has one more piece, up to the maximum shape count of the configuration.
    pub fn level_completed(&mut self, config: &GeneratorConfig) {
        self.level += 1;
        self.shape_count = config.clamp_shape_count(self.shape_count.saturating_add(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn shape_count_grows_and_stops() {
        let config = GeneratorConfig::default();
        let mut progression = LevelProgression::new(3, 10, &config);
        progression.level_completed(&config);
        assert_eq!(progression.shape_count, 11);
        progression.level_completed(&config);
        progression.level_completed(&config);
        assert_eq!(progression.shape_count, 12);
        assert_eq!(progression.level, 4);
    }

    #[test]
    fn starting_count_is_clamped() {
        let config = GeneratorConfig::default();
        assert_eq!(LevelProgression::new(3, 1, &config).shape_count, 6);
        assert_eq!(LevelProgression::new(3, 99, &config).shape_count, 12);
    }

    #[test]
    fn generates_each_level() {
        let config = GeneratorConfig::default();
        let mut generator = LevelGenerator::new(config.clone());
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let mut progression = LevelProgression::new(3, 6, &config);

        for expected in 6..=12 {
            let partition: Partition = progression.generate(&mut generator, &mut rng).unwrap();
            assert_eq!(partition.piece_count(), expected);
            progression.level_completed(&config);
        }
    }
}
