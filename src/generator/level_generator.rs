/*
level_generator.rs

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

//! Generate a random level.

use log::{Level, debug, info, log_enabled};
use rand::Rng;
use std::time::Instant;

use super::assembler;
use super::board::Board;
use super::errors::GenerateError;
use super::gap_filler;
use super::grid::Grid;
use super::partition::{Partition, Piece};
use super::region_grower::RegionGrower;
use crate::config::GeneratorConfig;

/// [`LevelGenerator`] object.
pub struct LevelGenerator {
    /// Generator parameters.
    pub config: GeneratorConfig,

    /// Number of triangles visited by the region growing during the last run.
    pub visits: usize,

    /// Number of times the region growing restarted from the frontier during the last run.
    pub backtracks: usize,

    /// Duration in seconds it took to generate the last level.
    pub duration: f32,
}

impl Default for LevelGenerator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl LevelGenerator {
    /// Create the object.
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            visits: 0,
            backtracks: 0,
            duration: 0.0,
        }
    }

    /// Generate and return a random level.
    ///
    /// `shape_count` is clamped between the minimum and maximum shape counts of the
    /// configuration.
    ///
    /// # Errors
    ///
    /// The method returns an error if the configuration is invalid, if the grid is empty, or if
    /// the grid has fewer triangles than pieces.
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        grid_size: u32,
        shape_count: u32,
        rng: &mut R,
    ) -> Result<Partition, GenerateError> {
        let start: Instant = Instant::now();
        self.visits = 0;
        self.backtracks = 0;
        self.duration = 0.0;

        self.config.validate()?;
        let grid: Grid = Grid::build(grid_size)?;
        let shape_count: usize = self.config.clamp_shape_count(shape_count) as usize;
        if grid.triangle_count < shape_count {
            return Err(GenerateError::Configuration(format!(
                "a {grid_size}x{grid_size} grid has {} triangles, which is not enough for {shape_count} pieces",
                grid.triangle_count
            )));
        }

        debug!(
            "Grid size = {grid_size}  Triangles = {}  Line triangles = {}  Pieces = {shape_count}",
            grid.triangle_count, grid.line_triangle_count
        );

        let mut board: Board = Board::new(grid);
        let mut grower: RegionGrower =
            RegionGrower::new(shape_count, self.config.fill_between_pieces);
        let res: Result<(), GenerateError> = grower.grow(&mut board, rng);
        self.visits = grower.visits;
        self.backtracks = grower.backtracks;
        res?;

        gap_filler::fill(&mut board)?;
        let pieces: Vec<Piece> = assembler::assemble(&board, shape_count)?;
        let partition: Partition = Partition {
            grid_size,
            line_triangle_count: grid.line_triangle_count,
            pieces,
        };
        partition.verify()?;

        self.duration = start.elapsed().as_secs_f32();
        info!(
            "Level generated: {shape_count} pieces on a {grid_size}x{grid_size} grid in {}s ({} visits, {} backtracks)",
            self.duration, self.visits, self.backtracks
        );
        if log_enabled!(Level::Debug) {
            partition.debug();
        }
        Ok(partition)
    }
}
