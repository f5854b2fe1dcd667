/*
escape.rs

Copyright 2025 Hervé Quatremain

This file is part of Circle the Dot.

Circle the Dot is free software: you can redistribute it and/or modify it under
the terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Circle the Dot is distributed in the hope that it will be useful, but WITHOUT
ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Circle the Dot. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Find the next step of the blue dot.
//!
//! A breadth-first search starts from the neighbors of the blue dot and stops at the first cell
//! on the border of the board.
//! Each queued cell carries the neighbor of the dot it was reached from, so that the first step
//! of the path is known as soon as the border is reached, without rebuilding the path.
//!
//! The neighbors of the dot are shuffled before the search starts. When several shortest paths
//! exist, the one that is followed is therefore chosen randomly.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::VecDeque;

use crate::grid::{Grid, Point};
use crate::neighbors::open_neighbors;

/// Result of the search.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Escape {
    /// The blue dot must move to that cell, which is one of its neighbors.
    Step(Point),

    /// The blue dot is encircled.
    NoEscape,
}

/// Search from the given first steps.
///
/// `blocked` must already mark the selected cells and the blue dot.
fn search(grid: &Grid, first_steps: Vec<Point>, mut blocked: Vec<Vec<bool>>) -> Escape {
    let mut queue: VecDeque<(Point, Point)> = VecDeque::with_capacity(grid.size() * grid.size());

    // A first step on the border beats any longer path
    for p in first_steps {
        if grid.is_on_border(p) {
            return Escape::Step(p);
        }
        queue.push_back((p, p));
        blocked[p.y][p.x] = true;
    }

    while let Some((current, first)) = queue.pop_front() {
        for p in open_neighbors(current, &blocked) {
            if grid.is_on_border(p) {
                return Escape::Step(first);
            }
            queue.push_back((p, first));
            blocked[p.y][p.x] = true;
        }
    }
    Escape::NoEscape
}

/// Return the next step of the blue dot toward the closest border cell.
///
/// Ties between shortest paths are broken by shuffling the neighbors of the dot with `rng`.
pub fn find_escape<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Escape {
    let Some(dot) = grid.dot() else {
        return Escape::NoEscape;
    };
    let blocked: Vec<Vec<bool>> = grid.blocked();
    let mut first_steps: Vec<Point> = open_neighbors(dot, &blocked);
    first_steps.shuffle(rng);

    let escape: Escape = search(grid, first_steps, blocked);
    debug!("Escape search from {dot}: {escape:?}");
    escape
}

/// Whether the blue dot cannot reach the border anymore.
///
/// The result does not depend on any random choice.
pub fn is_trapped(grid: &Grid) -> bool {
    let Some(dot) = grid.dot() else {
        return false;
    };
    let blocked: Vec<Vec<bool>> = grid.blocked();
    let first_steps: Vec<Point> = open_neighbors(dot, &blocked);
    search(grid, first_steps, blocked) == Escape::NoEscape
}
