/*
partition.rs

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

//! Generated level: the grid cut into pieces.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::adjacency;
use super::board::PieceId;
use super::errors::GenerateError;
use super::grid::Grid;

/// Piece object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    /// Piece ID.
    pub id: PieceId,

    /// Triangle indexes of the piece, in the order they have been added to the piece.
    pub triangles: Vec<usize>,
}

impl Piece {
    /// Number of triangles in the piece.
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Whether the piece has no triangle.
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

/// Partition object.
///
/// The triangle lists are consumed by the code that builds the piece meshes. That code maps a
/// triangle index to its vertexes with [`Grid::triangle_vertices`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    /// Number of cells on each side of the grid.
    pub grid_size: u32,

    /// Number of triangles in a row of cells.
    pub line_triangle_count: usize,

    /// Pieces, ordered by ID.
    pub pieces: Vec<Piece>,
}

impl Partition {
    /// Triangle layout of the partitioned grid.
    pub fn grid(&self) -> Result<Grid, GenerateError> {
        Grid::build(self.grid_size)
    }

    /// Total number of triangles in the grid, or 0 if the grid size is not usable.
    pub fn triangle_count(&self) -> usize {
        self.grid().map_or(0, |g| g.triangle_count)
    }

    /// Number of pieces.
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// Size of each piece, ordered by piece ID.
    pub fn sizes(&self) -> Vec<usize> {
        self.pieces.iter().map(|p| p.len()).collect()
    }

    /// Return the piece that owns the given triangle.
    pub fn piece_of(&self, index: usize) -> Option<PieceId> {
        self.pieces
            .iter()
            .find(|p| p.triangles.contains(&index))
            .map(|p| p.id)
    }

    /// Return, for each triangle index, the piece that owns the triangle.
    fn owners(&self) -> Result<Vec<Option<PieceId>>, GenerateError> {
        let mut owners: Vec<Option<PieceId>> = vec![None; self.triangle_count()];
        for piece in &self.pieces {
            for t in &piece.triangles {
                match owners.get_mut(*t) {
                    None => {
                        return Err(GenerateError::InvariantViolation(format!(
                            "piece {} has triangle {t} outside the grid",
                            piece.id
                        )));
                    }
                    Some(Some(other)) => {
                        return Err(GenerateError::InvariantViolation(format!(
                            "triangle {t} belongs to pieces {other} and {}",
                            piece.id
                        )));
                    }
                    Some(slot) => *slot = Some(piece.id),
                }
            }
        }
        Ok(owners)
    }

    /// Verify that the partition is usable as a level.
    ///
    /// Every triangle must belong to exactly one piece, and every piece must be non-empty and
    /// connected.
    ///
    /// # Errors
    ///
    /// The method returns the first problem detected.
    pub fn verify(&self) -> Result<(), GenerateError> {
        let grid: Grid = self.grid()?;
        if grid.line_triangle_count != self.line_triangle_count {
            return Err(GenerateError::InvariantViolation(format!(
                "line triangle count is {} instead of {}",
                self.line_triangle_count, grid.line_triangle_count
            )));
        }

        let owners: Vec<Option<PieceId>> = self.owners()?;
        if let Some(t) = owners.iter().position(|o| o.is_none()) {
            return Err(GenerateError::InvariantViolation(format!(
                "triangle {t} does not belong to any piece"
            )));
        }

        for (i, piece) in self.pieces.iter().enumerate() {
            if piece.id != i {
                return Err(GenerateError::InvariantViolation(format!(
                    "piece at position {i} has ID {}",
                    piece.id
                )));
            }
            let Some(start) = piece.triangles.first() else {
                return Err(GenerateError::InvariantViolation(format!(
                    "piece {i} is empty"
                )));
            };

            // Breadth-first walk inside the piece
            let mut reached: Vec<bool> = vec![false; owners.len()];
            let mut queue: VecDeque<usize> = VecDeque::from([*start]);
            reached[*start] = true;
            let mut count: usize = 1;
            while let Some(t) = queue.pop_front() {
                for n in adjacency::neighbors(t, &grid) {
                    if !reached[n] && owners[n] == Some(piece.id) {
                        reached[n] = true;
                        count += 1;
                        queue.push_back(n);
                    }
                }
            }
            if count != piece.len() {
                return Err(GenerateError::InvariantViolation(format!(
                    "piece {i} is not connected ({count} of {} triangles reachable)",
                    piece.len()
                )));
            }
        }
        Ok(())
    }

    /// Return a text representation of the partition, one line per row of cells.
    ///
    /// Each triangle is represented by its piece ID in base 36, in the left, up, right, down
    /// order. Cells are separated by a space. Triangles without a piece are shown as `.`.
    pub fn rows_text(&self) -> Vec<String> {
        let mut owners: Vec<Option<PieceId>> = vec![None; self.triangle_count()];
        for piece in &self.pieces {
            for t in &piece.triangles {
                if let Some(slot) = owners.get_mut(*t) {
                    *slot = Some(piece.id);
                }
            }
        }

        owners
            .chunks(self.line_triangle_count.max(1))
            .map(|row| {
                row.chunks(4)
                    .map(|cell| {
                        cell.iter()
                            .map(|o| match o {
                                Some(p) => char::from_digit(*p as u32 % 36, 36).unwrap_or('?'),
                                None => '.',
                            })
                            .collect::<String>()
                    })
                    .collect::<Vec<String>>()
                    .join(" ")
            })
            .collect()
    }

    /// Print the partition.
    pub fn debug(&self) {
        debug!(
            "Partition: grid {0}x{0}, {1} pieces, sizes {2:?}",
            self.grid_size,
            self.piece_count(),
            self.sizes()
        );
        for row in self.rows_text() {
            debug!("{row}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2x2 grid cut into the top row (piece 0) and the bottom row (piece 1).
    fn two_rows() -> Partition {
        Partition {
            grid_size: 2,
            line_triangle_count: 8,
            pieces: vec![
                Piece {
                    id: 0,
                    triangles: (0..8).collect(),
                },
                Piece {
                    id: 1,
                    triangles: (8..16).collect(),
                },
            ],
        }
    }

    #[test]
    fn valid_partition() {
        let p = two_rows();
        assert!(p.verify().is_ok());
        assert_eq!(p.triangle_count(), 16);
        assert_eq!(p.sizes(), vec![8, 8]);
        assert_eq!(p.piece_of(9), Some(1));
        assert_eq!(p.piece_of(16), None);
    }

    #[test]
    fn missing_triangle() {
        let mut p = two_rows();
        p.pieces[1].triangles.pop();
        assert!(matches!(
            p.verify(),
            Err(GenerateError::InvariantViolation(_))
        ));
    }

    #[test]
    fn duplicated_triangle() {
        let mut p = two_rows();
        p.pieces[1].triangles.push(3);
        assert!(p.verify().is_err());
    }

    #[test]
    fn empty_piece() {
        let mut p = two_rows();
        p.pieces.push(Piece {
            id: 2,
            triangles: Vec::new(),
        });
        assert!(p.verify().is_err());
    }

    #[test]
    fn disconnected_piece() {
        // Piece 0 owns the top-left and the bottom-right cells, which only touch at a corner
        let p = Partition {
            grid_size: 2,
            line_triangle_count: 8,
            pieces: vec![
                Piece {
                    id: 0,
                    triangles: vec![0, 1, 2, 3, 12, 13, 14, 15],
                },
                Piece {
                    id: 1,
                    triangles: vec![4, 5, 6, 7, 8, 9, 10, 11],
                },
            ],
        };
        assert!(p.verify().is_err());
    }

    #[test]
    fn oversized_grid_in_saved_partition() {
        let mut p = two_rows();
        p.grid_size = u32::MAX;
        assert_eq!(p.triangle_count(), 0);
        assert!(p.rows_text().is_empty());
        assert!(matches!(
            p.verify(),
            Err(GenerateError::Configuration(_))
        ));
    }

    #[test]
    fn text_rows() {
        let p = two_rows();
        assert_eq!(p.rows_text(), vec!["0000 0000", "1111 1111"]);
    }
}
