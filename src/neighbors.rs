/*
neighbors.rs

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

//! Cells adjacent to a given cell.
//!
//! The board is a square matrix, but rows are staggered like bricks in a wall so that each cell
//! has six neighbors:
//!
//! ```text
//! o o o o o
//!  o o o o o
//! o o o o o
//! ```
//!
//! On an even row, the neighbors above and below are at columns `x - 1` and `x`.
//! On an odd row, they are at columns `x` and `x + 1`.

use crate::grid::Point;

/// Cells adjacent to a given cell. Neighbors outside the board are None.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Adjacent {
    pub nw: Option<Point>,
    pub ne: Option<Point>,
    pub w: Option<Point>,
    pub e: Option<Point>,
    pub sw: Option<Point>,
    pub se: Option<Point>,
}

impl Adjacent {
    /// Return the cells adjacent to `point` on a board of `size` rows and columns.
    pub fn new(point: Point, size: usize) -> Self {
        let Point { x, y } = point;
        // Columns of the cells in the rows above and below
        let (left, right): (Option<usize>, Option<usize>) = if y % 2 == 0 {
            (x.checked_sub(1), Some(x))
        } else {
            (Some(x), Some(x + 1))
        };
        let up: Option<usize> = y.checked_sub(1);
        let down: Option<usize> = Some(y + 1);

        let at = |col: Option<usize>, row: Option<usize>| -> Option<Point> {
            match (col, row) {
                (Some(c), Some(r)) if c < size && r < size => Some(Point::new(c, r)),
                _ => None,
            }
        };

        Self {
            nw: at(left, up),
            ne: at(right, up),
            w: at(x.checked_sub(1), Some(y)),
            e: at(Some(x + 1), Some(y)),
            sw: at(left, down),
            se: at(right, down),
        }
    }

    /// Iterate over the neighbors that are inside the board.
    pub fn iter(&self) -> impl Iterator<Item = Point> + use<> {
        [self.nw, self.ne, self.w, self.e, self.sw, self.se]
            .into_iter()
            .flatten()
    }

    /// Whether `point` is one of the neighbors.
    pub fn contains(&self, point: Point) -> bool {
        self.iter().any(|p| p == point)
    }
}

/// Return the neighbors of `point` that are not blocked.
///
/// `blocked` is a square matrix indexed by row and then by column.
pub fn open_neighbors(point: Point, blocked: &[Vec<bool>]) -> Vec<Point> {
    Adjacent::new(point, blocked.len())
        .iter()
        .filter(|p| !blocked[p.y][p.x])
        .collect()
}
