/*
grid.rs

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

//! Triangle indexing of the square grid.
//!
//! Each square cell of the grid is cut along its two diagonals into four triangles.
//! The triangles are numbered row by row, starting with the top row, and cell by cell from left
//! to right inside a row.
//! Inside a cell, the triangles always come in the same order (left, up, right, down) so that
//! the orientation of a triangle is its index modulo 4.
//!
//! ```text
//!  +-------+
//!  |\  1  /|
//!  | \   / |
//!  |0  X  2|
//!  | /   \ |
//!  |/  3  \|
//!  +-------+
//! ```

use serde::{Deserialize, Serialize};
use strum_macros::FromRepr;

use super::errors::GenerateError;

/// Orientation of a triangle inside its cell.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr)]
#[repr(usize)]
pub enum Orientation {
    Left,
    Up,
    Right,
    Down,
}

impl Orientation {
    /// Return the orientation of the triangle with the given index.
    pub fn from_index(index: usize) -> Self {
        // `index % 4` is always a valid discriminant
        Self::from_repr(index % 4).unwrap_or(Orientation::Left)
    }

    /// Vertexes of the triangle on a cell of side 2, with the y axis pointing up and the origin
    /// at the bottom-left corner of the cell.
    pub fn vertices(&self) -> [(f32, f32); 3] {
        match self {
            Orientation::Left => [(0.0, 0.0), (0.0, 2.0), (1.0, 1.0)],
            Orientation::Up => [(0.0, 2.0), (2.0, 2.0), (1.0, 1.0)],
            Orientation::Right => [(1.0, 1.0), (2.0, 2.0), (2.0, 0.0)],
            Orientation::Down => [(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)],
        }
    }
}

/// Triangle layout of a square grid.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Number of cells on each side of the grid.
    pub grid_size: u32,

    /// Total number of triangles (four per cell).
    pub triangle_count: usize,

    /// Number of triangles in a row of cells.
    pub line_triangle_count: usize,
}

impl Grid {
    /// Build the triangle layout for a grid of `grid_size` x `grid_size` cells.
    ///
    /// # Errors
    ///
    /// The method returns an error if the grid has no cell.
    pub fn build(grid_size: u32) -> Result<Self, GenerateError> {
        if grid_size < 1 {
            return Err(GenerateError::Configuration(format!(
                "grid size must be at least 1 (got {grid_size})"
            )));
        }
        let size: usize = grid_size as usize;
        let triangle_count: usize = size
            .checked_mul(size)
            .and_then(|cells| cells.checked_mul(4))
            .ok_or_else(|| {
                GenerateError::Configuration(format!(
                    "grid size {grid_size} has too many triangles"
                ))
            })?;
        Ok(Self {
            grid_size,
            triangle_count,
            line_triangle_count: triangle_count / size,
        })
    }

    /// Row of the given triangle. Row 0 is the top row.
    pub fn row(&self, index: usize) -> usize {
        index / self.line_triangle_count
    }

    /// Column of the cell that contains the given triangle.
    pub fn column(&self, index: usize) -> usize {
        (index % self.line_triangle_count) / 4
    }

    /// Orientation of the given triangle.
    pub fn orientation(&self, index: usize) -> Orientation {
        Orientation::from_index(index)
    }

    /// Position of the triangle vertexes in the grid.
    ///
    /// The x axis points to the right and the y axis points up, with the origin at the
    /// bottom-left corner of the grid. `cell_size` is the length of a cell side.
    pub fn triangle_vertices(&self, index: usize, cell_size: f32) -> [(f32, f32); 3] {
        let scale: f32 = cell_size / 2.0;
        let x: f32 = self.column(index) as f32 * cell_size;
        let y: f32 = (self.grid_size as usize - 1 - self.row(index)) as f32 * cell_size;
        self.orientation(index)
            .vertices()
            .map(|(vx, vy)| (x + vx * scale, y + vy * scale))
    }
}
