/*
generator.rs

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

//! Cut a square grid into random pieces.
//!
//! The grid is made of square cells, and each cell is cut into four triangles.
//! [`grid::Grid`] numbers these triangles so that the orientation of a triangle (left, up, right,
//! or down) is its index modulo 4.
//! The [`adjacency`] functions compute the neighbors of a triangle from its index.
//!
//! A level is generated in several steps that work on a [`board::Board`] object, which stores the
//! piece that owns each triangle:
//!
//! * The [`region_grower::RegionGrower`] object grows the pieces one after the other from a seed
//!   triangle, with a random walk that backtracks when it gets stuck.
//!
//! * The [`gap_filler`] functions give the triangles left over by the region growing to the
//!   adjacent pieces, so that the pieces cover the whole grid.
//!
//! * The [`assembler::assemble`] function groups the triangles by piece, and returns a list of
//!   [`partition::Piece`] objects.
//!
//! The [`level_generator::LevelGenerator`] object runs all these steps and returns a
//! [`partition::Partition`] object.

pub mod adjacency;
pub mod assembler;
pub mod board;
pub mod errors;
pub mod gap_filler;
pub mod grid;
pub mod level_generator;
pub mod partition;
pub mod region_grower;
