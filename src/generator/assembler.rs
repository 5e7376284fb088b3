/*
assembler.rs

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

//! Group the triangles of the board by piece.

use super::board::Board;
use super::errors::GenerateError;
use super::partition::Piece;

/// Return the pieces of the board.
///
/// The triangles of a piece are listed in the order they have been assigned.
///
/// # Errors
///
/// The function returns an error if a triangle is not assigned, if a triangle belongs to an
/// unknown piece, or if a piece is empty.
pub fn assemble(board: &Board, shape_count: usize) -> Result<Vec<Piece>, GenerateError> {
    if let Some(t) = board.first_unassigned() {
        return Err(GenerateError::InvariantViolation(format!(
            "triangle {t} does not belong to any piece"
        )));
    }

    let mut pieces: Vec<Piece> = (0..shape_count)
        .map(|id| Piece {
            id,
            triangles: Vec::with_capacity(board.triangle_count() / shape_count.max(1)),
        })
        .collect();

    for t in board.assignment_order() {
        let piece: usize = board.owner(*t).unwrap_or(shape_count);
        match pieces.get_mut(piece) {
            Some(p) => p.triangles.push(*t),
            None => {
                return Err(GenerateError::InvariantViolation(format!(
                    "triangle {t} belongs to unknown piece {piece}"
                )));
            }
        }
    }

    if let Some(p) = pieces.iter().find(|p| p.is_empty()) {
        return Err(GenerateError::InvariantViolation(format!(
            "piece {} is empty",
            p.id
        )));
    }
    Ok(pieces)
}
