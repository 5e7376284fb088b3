/*
region_grower.rs

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

//! Grow the pieces one after the other with a random walk.
//!
//! A piece starts from a seed triangle and follows a random adjacent triangle that is still free.
//! When the walk is stuck, it restarts from a random triangle of the piece that might still have
//! a free neighbor (the frontier).
//! A piece is complete when it reaches its size target, or when the frontier is empty because
//! the piece is enclosed by other pieces or by the grid borders.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use super::adjacency;
use super::board::{Board, PieceId};
use super::errors::GenerateError;
use super::gap_filler;

/// [`RegionGrower`] object.
pub struct RegionGrower {
    /// Number of pieces to grow.
    pub shape_count: usize,

    /// Merge the pockets left behind a piece before growing the next one.
    pub fill_between_pieces: bool,

    /// Number of triangles visited during the last run.
    pub visits: usize,

    /// Number of times the walk was stuck and had to restart from the frontier during the last
    /// run.
    pub backtracks: usize,
}

impl RegionGrower {
    /// Create the object.
    pub fn new(shape_count: usize, fill_between_pieces: bool) -> Self {
        Self {
            shape_count,
            fill_between_pieces,
            visits: 0,
            backtracks: 0,
        }
    }

    /// Grow all the pieces on the board.
    ///
    /// Some triangles might stay unassigned at the end. Use [`gap_filler::fill`] to merge them.
    ///
    /// # Errors
    ///
    /// The method returns an error if a piece cannot be seeded because no triangle is left.
    pub fn grow<R: Rng + ?Sized>(
        &mut self,
        board: &mut Board,
        rng: &mut R,
    ) -> Result<(), GenerateError> {
        self.visits = 0;
        self.backtracks = 0;

        if board.triangle_count() < self.shape_count {
            return Err(GenerateError::Configuration(format!(
                "{} triangles cannot make {} pieces",
                board.triangle_count(),
                self.shape_count
            )));
        }

        for piece in 0..self.shape_count {
            // The first piece starts anywhere, the next ones from the first free triangle
            let seed: usize = if piece == 0 {
                rng.random_range(0..board.triangle_count())
            } else {
                board.first_unassigned().ok_or_else(|| {
                    GenerateError::InvariantViolation(format!(
                        "no triangle left to start piece {piece}"
                    ))
                })?
            };

            let target: usize = self.size_target(board, piece, rng);
            let size: usize = self.grow_piece(board, piece, seed, target, rng);
            debug!("Piece {piece}: seed = {seed}  target = {target}  size = {size}");

            let still_to_grow: usize = self.shape_count - piece - 1;
            if self.fill_between_pieces && still_to_grow > 0 {
                gap_filler::merge_pockets(board, still_to_grow);
            }
        }
        Ok(())
    }

    /// Compute a random size target for the piece.
    ///
    /// The target is the average piece size, shifted by a random value that depends on the row
    /// length. It is at least one triangle, and it leaves at least one triangle for each piece
    /// that is not grown yet.
    fn size_target<R: Rng + ?Sized>(&self, board: &Board, piece: PieceId, rng: &mut R) -> usize {
        let base: isize = (board.triangle_count() / self.shape_count) as isize;
        let spread: i64 = (board.grid().line_triangle_count / 4) as i64;
        let offset: isize = if spread > 0 {
            (rng.random_range(-spread..spread) / 2) as isize
        } else {
            0
        };

        let still_to_grow: usize = self.shape_count - piece - 1;
        let available: usize = board
            .unassigned_count()
            .saturating_sub(still_to_grow)
            .max(1);
        ((base - offset).max(1) as usize).min(available)
    }

    /// Grow a piece from its seed triangle and return its size.
    fn grow_piece<R: Rng + ?Sized>(
        &mut self,
        board: &mut Board,
        piece: PieceId,
        seed: usize,
        target: usize,
        rng: &mut R,
    ) -> usize {
        let mut frontier: Vec<usize> = Vec::with_capacity(target);

        board.assign(seed, piece);
        frontier.push(seed);
        self.visits += 1;
        let mut size: usize = 1;
        let mut current: usize = seed;

        while size < target {
            match Self::next_triangle(board, current, rng) {
                Some(next) => {
                    board.assign(next, piece);
                    frontier.push(next);
                    self.visits += 1;
                    size += 1;
                    current = next;
                }
                None => {
                    // The triangle has no free neighbor anymore
                    if let Some(pos) = frontier.iter().position(|t| *t == current) {
                        frontier.swap_remove(pos);
                    }
                    self.backtracks += 1;
                    if frontier.is_empty() {
                        debug!("    Piece {piece} enclosed at size {size}");
                        break;
                    }
                    current = frontier[rng.random_range(0..frontier.len())];
                }
            }
        }
        size
    }

    /// Return a random free neighbor of the triangle.
    fn next_triangle<R: Rng + ?Sized>(board: &Board, current: usize, rng: &mut R) -> Option<usize> {
        let mut offsets: [isize; 3] =
            adjacency::neighbor_offsets(current, board.grid().line_triangle_count);
        offsets.shuffle(rng);
        offsets
            .into_iter()
            .filter_map(|offset| adjacency::neighbor(current, offset, board.grid()))
            .find(|n| !board.is_assigned(*n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::grid::Grid;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn grows_requested_pieces() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut board = Board::new(Grid::build(3).unwrap());
        let mut grower = RegionGrower::new(6, false);
        grower.grow(&mut board, &mut rng).unwrap();

        let mut seen: Vec<PieceId> = (0..board.triangle_count())
            .filter_map(|i| board.owner(i))
            .collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen, (0..6).collect::<Vec<PieceId>>());
        assert_eq!(grower.visits, board.assignment_order().len());
    }

    #[test]
    fn every_piece_gets_a_seed() {
        // Pieces of about 2 triangles on a 2x2 grid: the later pieces must still find a seed
        for s in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(s);
            let mut board = Board::new(Grid::build(2).unwrap());
            let mut grower = RegionGrower::new(8, true);
            grower.grow(&mut board, &mut rng).unwrap();
            for piece in 0..8 {
                assert!(
                    (0..board.triangle_count()).any(|i| board.owner(i) == Some(piece)),
                    "piece {piece} is empty with seed {s}"
                );
            }
        }
    }

    #[test]
    fn size_target_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let board = Board::new(Grid::build(3).unwrap());
        let grower = RegionGrower::new(6, true);
        for _ in 0..100 {
            // base = 6, spread = 3, offset in -1..=1
            let target: usize = grower.size_target(&board, 0, &mut rng);
            assert!((5..=7).contains(&target), "target = {target}");
        }
    }

    #[test]
    fn size_target_is_never_zero() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut board = Board::new(Grid::build(1).unwrap());
        for i in 0..3 {
            board.assign(i, 0);
        }
        let grower = RegionGrower::new(4, true);
        assert_eq!(grower.size_target(&board, 3, &mut rng), 1);
    }

    #[test]
    fn too_many_pieces() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut board = Board::new(Grid::build(1).unwrap());
        let mut grower = RegionGrower::new(6, true);
        assert!(matches!(
            grower.grow(&mut board, &mut rng),
            Err(GenerateError::Configuration(_))
        ));
    }
}
