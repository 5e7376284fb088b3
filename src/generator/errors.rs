/*
errors.rs

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

//! Errors raised while generating a level.

use thiserror::Error;

/// Type of errors.
///
/// Generation is a fast in-memory computation, so errors are never retried: the same inputs
/// always produce the same error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The grid or the shape count cannot be used, for example a grid with no cell or a grid
    /// with fewer triangles than requested pieces.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The generated partition breaks one of its guarantees (a triangle without a piece, an
    /// empty or a disconnected piece). This is a bug in the generator.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}
