/*
board.rs

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

//! Piece ownership of the grid triangles during generation.

use super::grid::Grid;

/// Piece identifier, from 0 to the number of pieces minus one.
pub type PieceId = usize;

/// Board object.
///
/// The board stores, for each triangle index, the piece that owns the triangle.
/// A board is built for a single generation run and then dropped.
#[derive(Debug, Clone)]
pub struct Board {
    /// Triangle layout.
    grid: Grid,

    /// Owner of each triangle, indexed by the triangle index.
    owners: Vec<Option<PieceId>>,

    /// Triangle indexes in the order they have been assigned to a piece.
    order: Vec<usize>,
}

impl Board {
    /// Create a [`Board`] object where no triangle is assigned yet.
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            owners: vec![None; grid.triangle_count],
            order: Vec::with_capacity(grid.triangle_count),
        }
    }

    /// Return the triangle layout.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of triangles in the board.
    pub fn triangle_count(&self) -> usize {
        self.owners.len()
    }

    /// Return the piece that owns the given triangle.
    pub fn owner(&self, index: usize) -> Option<PieceId> {
        self.owners[index]
    }

    /// Whether the triangle belongs to a piece.
    pub fn is_assigned(&self, index: usize) -> bool {
        self.owners[index].is_some()
    }

    /// Give the triangle to the piece.
    ///
    /// A triangle never changes piece once assigned.
    pub fn assign(&mut self, index: usize, piece: PieceId) {
        debug_assert!(
            self.owners[index].is_none(),
            "triangle {index} is already assigned"
        );
        if self.owners[index].is_none() {
            self.owners[index] = Some(piece);
            self.order.push(index);
        }
    }

    /// Number of triangles not yet assigned.
    pub fn unassigned_count(&self) -> usize {
        self.owners.len() - self.order.len()
    }

    /// Return the first triangle, in index order, that is not assigned.
    pub fn first_unassigned(&self) -> Option<usize> {
        self.owners.iter().position(|o| o.is_none())
    }

    /// Return the triangle indexes in the order they have been assigned.
    pub fn assignment_order(&self) -> &[usize] {
        &self.order
    }
}
