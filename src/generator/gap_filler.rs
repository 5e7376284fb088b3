/*
gap_filler.rs

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

//! Give the triangles left over by the region growing to the adjacent pieces.
//!
//! Two kinds of triangles can stay without a piece:
//!
//! * Pockets: small spaces enclosed by the pieces already grown. A pocket is too small to
//!   become a piece of its own, so [`merge_pockets`] gives it to an adjacent piece.
//! * Leftovers: when the requested number of pieces is reached, the remaining triangles are
//!   given to the adjacent pieces by [`merge_remaining`].
//!
//! A triangle is always merged into a piece that owns one of its neighbors, so the pieces stay
//! connected.

use log::{debug, warn};

use super::adjacency;
use super::board::{Board, PieceId};
use super::errors::GenerateError;

/// Merge all the unassigned triangles into the pieces.
///
/// # Errors
///
/// The function returns an error if some triangles cannot reach any piece. This can only happen
/// if the board has no assigned triangle.
pub fn fill(board: &mut Board) -> Result<(), GenerateError> {
    let pockets: usize = merge_pockets(board, 0);
    let leftovers: usize = merge_remaining(board)?;
    debug!("Gap filling: {pockets} pocket triangle(s), {leftovers} leftover triangle(s)");

    if board.unassigned_count() > 0 {
        return Err(GenerateError::InvariantViolation(format!(
            "{} triangle(s) still unassigned after gap filling",
            board.unassigned_count()
        )));
    }
    Ok(())
}

/// Merge the pockets into an adjacent piece.
///
/// A pocket starts at an unassigned triangle that has at most one unassigned neighbor, and
/// follows the chain of unassigned triangles as long as each one leads to a single other
/// unassigned triangle.
///
/// The merge is skipped if it would leave fewer than `reserve` unassigned triangles. This keeps
/// triangles available for the pieces that are not grown yet.
///
/// Return the number of triangles that have been merged.
pub fn merge_pockets(board: &mut Board, reserve: usize) -> usize {
    let mut merged: usize = 0;

    for i in 0..board.triangle_count() {
        if board.is_assigned(i) {
            continue;
        }

        // Only one unassigned neighbor is allowed, otherwise the space is not a pocket
        if free_neighbors(board, i, &[]).len() > 1 {
            continue;
        }

        let Some(piece) = adjacent_piece(board, i) else {
            continue;
        };

        let chain: Vec<usize> = pocket_chain(board, i);
        if chain.len() + reserve > board.unassigned_count() {
            debug!(
                "Pocket at triangle {i} ({} triangle(s)) kept for the next pieces",
                chain.len()
            );
            continue;
        }

        debug!("Pocket {chain:?} merged into piece {piece}");
        for t in &chain {
            board.assign(*t, piece);
        }
        merged += chain.len();
    }
    merged
}

/// Merge every remaining unassigned triangle into a piece that owns one of its neighbors.
///
/// The board is scanned again and again until no unassigned triangle remains. A triangle
/// surrounded by unassigned triangles only is merged in a later pass, once one of its neighbors
/// has been merged.
///
/// Return the number of triangles that have been merged.
///
/// # Errors
///
/// The function returns an error if a full pass does not merge anything while unassigned
/// triangles remain.
pub fn merge_remaining(board: &mut Board) -> Result<usize, GenerateError> {
    let mut merged: usize = 0;
    let mut passes: usize = 0;

    while board.unassigned_count() > 0 {
        passes += 1;
        let mut merged_in_pass: usize = 0;

        for i in 0..board.triangle_count() {
            if board.is_assigned(i) {
                continue;
            }
            if let Some(piece) = adjacent_piece(board, i) {
                board.assign(i, piece);
                merged_in_pass += 1;
            }
        }

        if merged_in_pass == 0 {
            warn!(
                "No progress during pass {passes}: {} triangle(s) cannot reach a piece",
                board.unassigned_count()
            );
            return Err(GenerateError::InvariantViolation(format!(
                "{} triangle(s) have no assigned neighbor",
                board.unassigned_count()
            )));
        }
        merged += merged_in_pass;
    }

    debug!("Leftovers merged in {passes} pass(es)");
    Ok(merged)
}

/// Return the piece of the first assigned neighbor of the triangle.
fn adjacent_piece(board: &Board, index: usize) -> Option<PieceId> {
    adjacency::neighbors(index, board.grid()).find_map(|n| board.owner(n))
}

/// Return the unassigned neighbors of the triangle, ignoring the triangles in `exclude`.
fn free_neighbors(board: &Board, index: usize, exclude: &[usize]) -> Vec<usize> {
    adjacency::neighbors(index, board.grid())
        .filter(|n| !board.is_assigned(*n) && !exclude.contains(n))
        .collect()
}

/// Collect the chain of unassigned triangles that starts at the given triangle.
fn pocket_chain(board: &Board, start: usize) -> Vec<usize> {
    let mut chain: Vec<usize> = vec![start];
    let mut current: usize = start;

    while let [next] = free_neighbors(board, current, &chain).as_slice() {
        chain.push(*next);
        current = *next;
    }
    chain
}
