/*
adjacency.rs

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

//! Edge adjacency between the triangles of the grid.
//!
//! The adjacency graph is never stored. Each triangle shares an edge with at most three other
//! triangles, and their indexes are computed from the orientation of the triangle:
//!
//! - a left triangle touches the up and down triangles of its cell, and the right triangle of
//!   the cell on its left.
//! - an up triangle touches the left and right triangles of its cell, and the down triangle of
//!   the cell above.
//! - a right triangle touches the up and down triangles of its cell, and the left triangle of
//!   the cell on its right.
//! - a down triangle touches the left and right triangles of its cell, and the up triangle of
//!   the cell below.
//!
//! Because the index is linear, the offset to the cell on the left of the first cell of a row
//! lands on the last cell of the previous row. [`is_connected`] rejects these false neighbors.

use super::grid::Grid;

/// Return the offsets from the given triangle to its three candidate neighbors.
pub fn neighbor_offsets(index: usize, line_triangle_count: usize) -> [isize; 3] {
    let vertical: isize = line_triangle_count as isize - 2;
    match index % 4 {
        0 => [1, 3, -2],
        1 => [-1, 1, -vertical],
        2 => [-1, 1, 2],
        _ => [-3, -1, vertical],
    }
}

/// Whether the candidate triangle is really adjacent to the given triangle.
///
/// Both triangles must be in the same row, unless the candidate is the triangle directly above
/// or below.
pub fn is_connected(index: usize, candidate: usize, line_triangle_count: usize) -> bool {
    index / line_triangle_count == candidate / line_triangle_count
        || index.abs_diff(candidate) == line_triangle_count - 2
}

/// Return the neighbor at the given offset, if it exists in the grid.
pub fn neighbor(index: usize, offset: isize, grid: &Grid) -> Option<usize> {
    let candidate: usize = index.checked_add_signed(offset)?;
    if candidate < grid.triangle_count
        && is_connected(index, candidate, grid.line_triangle_count)
    {
        Some(candidate)
    } else {
        None
    }
}

/// Return all the neighbors of the given triangle, in offset order.
pub fn neighbors(index: usize, grid: &Grid) -> impl Iterator<Item = usize> + '_ {
    neighbor_offsets(index, grid.line_triangle_count)
        .into_iter()
        .filter_map(move |offset| neighbor(index, offset, grid))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_neighbors(index: usize, grid: &Grid) -> Vec<usize> {
        let mut n: Vec<usize> = neighbors(index, grid).collect();
        n.sort_unstable();
        n
    }

    #[test]
    fn offsets_by_orientation() {
        assert_eq!(neighbor_offsets(0, 12), [1, 3, -2]);
        assert_eq!(neighbor_offsets(5, 12), [-1, 1, -10]);
        assert_eq!(neighbor_offsets(6, 12), [-1, 1, 2]);
        assert_eq!(neighbor_offsets(7, 12), [-3, -1, 10]);
    }

    #[test]
    fn inner_cell() {
        // Center cell of a 3x3 grid: row 1, column 1, triangles 16 to 19
        let grid = Grid::build(3).unwrap();
        assert_eq!(sorted_neighbors(16, &grid), vec![14, 17, 19]);
        assert_eq!(sorted_neighbors(17, &grid), vec![7, 16, 18]);
        assert_eq!(sorted_neighbors(18, &grid), vec![17, 19, 20]);
        assert_eq!(sorted_neighbors(19, &grid), vec![16, 18, 29]);
    }

    #[test]
    fn borders() {
        let grid = Grid::build(3).unwrap();

        // Top-left cell: no cell above or on the left
        assert_eq!(sorted_neighbors(0, &grid), vec![1, 3]);
        assert_eq!(sorted_neighbors(1, &grid), vec![0, 2]);

        // First cell of the second row: the right triangle of the previous row is not a
        // neighbor
        assert_eq!(sorted_neighbors(12, &grid), vec![13, 15]);

        // Last cell of the first row: the left triangle of the next row is not a neighbor
        assert_eq!(sorted_neighbors(10, &grid), vec![9, 11]);

        // Bottom-right cell: no cell below
        assert_eq!(sorted_neighbors(35, &grid), vec![32, 34]);
    }

    #[test]
    fn symmetric() {
        let grid = Grid::build(4).unwrap();
        for i in 0..grid.triangle_count {
            for n in neighbors(i, &grid) {
                assert!(
                    neighbors(n, &grid).any(|m| m == i),
                    "{i} -> {n} is not symmetric"
                );
            }
        }
    }

    #[test]
    fn single_cell() {
        let grid = Grid::build(1).unwrap();
        assert_eq!(sorted_neighbors(0, &grid), vec![1, 3]);
        assert_eq!(sorted_neighbors(2, &grid), vec![1, 3]);
    }
}
