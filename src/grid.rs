/*
grid.rs

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

//! Board of the game.
//!
//! The [`Grid`] object stores the state of every cell, the location of the blue dot, and the
//! number of steps played since the last reset.
//! Cells are stored by value, so cloning a [`Grid`] produces an independent copy that shares
//! nothing with its source. The undo and redo stacks rely on that.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{GameError, Result};

/// Smallest board that can be played.
pub const MIN_SIZE: usize = 4;

/// Cell coordinates. `x` is the column and `y` the row.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// State of a cell.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum CellState {
    #[default]
    Available,
    Selected,
    Dot,
}

impl CellState {
    /// Character used when the board is printed.
    pub const fn symbol(self) -> char {
        match self {
            CellState::Available => 'o',
            CellState::Selected => '#',
            CellState::Dot => '@',
        }
    }
}

/// Square board with the blue dot.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Number of rows and columns.
    size: usize,

    /// Cell states, indexed by row and then by column.
    cells: Vec<Vec<CellState>>,

    /// Location of the blue dot, or None once the dot has left the board.
    dot: Option<Point>,

    /// Number of steps played since the last reset.
    steps: u32,
}

impl Grid {
    /// Create a board where all the cells are available, except the cell holding the blue dot.
    pub fn new(size: usize, dot: Point) -> Result<Self> {
        if size < MIN_SIZE {
            return Err(GameError::InvalidSize(size));
        }
        if dot.x >= size || dot.y >= size {
            return Err(GameError::InvalidSelection(dot));
        }
        let mut cells: Vec<Vec<CellState>> = vec![vec![CellState::Available; size]; size];
        cells[dot.y][dot.x] = CellState::Dot;
        Ok(Self {
            size,
            cells,
            dot: Some(dot),
            steps: 0,
        })
    }

    /// Return the number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Return the location of the blue dot.
    pub fn dot(&self) -> Option<Point> {
        self.dot
    }

    /// Return the number of steps since the last reset.
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Whether the point is inside the board.
    pub fn contains(&self, point: Point) -> bool {
        point.x < self.size && point.y < self.size
    }

    /// Whether the point is on the first or last row or column.
    pub fn is_on_border(&self, point: Point) -> bool {
        point.x == 0 || point.y == 0 || point.x == self.size - 1 || point.y == self.size - 1
    }

    /// Return the state of a cell.
    ///
    /// # Panics
    ///
    /// The point must be inside the board.
    pub fn cell(&self, point: Point) -> CellState {
        self.cells[point.y][point.x]
    }

    /// Return the state of a cell, or None if the point is outside the board.
    pub fn get(&self, point: Point) -> Option<CellState> {
        self.cells.get(point.y)?.get(point.x).copied()
    }

    pub(crate) fn set_cell(&mut self, point: Point, state: CellState) {
        self.cells[point.y][point.x] = state;
    }

    /// Iterate over all the cells, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Point, CellState)> + '_ {
        self.cells.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, state)| (Point::new(x, y), *state))
        })
    }

    /// Return a matrix where every cell that is not available is marked as blocked.
    pub fn blocked(&self) -> Vec<Vec<bool>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|s| *s != CellState::Available).collect())
            .collect()
    }

    /// Mark the cell as selected and increase the number of steps by one.
    pub fn select(&mut self, point: Point) {
        self.set_cell(point, CellState::Selected);
        self.steps += 1;
    }

    /// Move the blue dot and clear its previous location.
    ///
    /// With None, the dot leaves the board: the player lost.
    pub fn move_dot(&mut self, to: Option<Point>) {
        if let Some(current) = self.dot {
            self.set_cell(current, CellState::Available);
        }
        if let Some(p) = to {
            self.set_cell(p, CellState::Dot);
        }
        self.dot = to;
    }

    /// Copy the cells and the blue dot location from another board.
    ///
    /// The number of steps is not copied.
    pub fn restore_board(&mut self, other: &Grid) {
        self.size = other.size;
        self.cells.clone_from(&other.cells);
        self.dot = other.dot;
    }

    pub fn increment_steps(&mut self) {
        self.steps += 1;
    }

    pub fn decrement_steps(&mut self) {
        self.steps = self.steps.saturating_sub(1);
    }

    /// Verify that the board is consistent, typically after loading it from a file.
    pub fn validate(&self) -> Result<()> {
        if self.size < MIN_SIZE {
            return Err(GameError::CorruptSave(format!(
                "board size {} is too small",
                self.size
            )));
        }
        if self.cells.len() != self.size || self.cells.iter().any(|r| r.len() != self.size) {
            return Err(GameError::CorruptSave(format!(
                "board is not a {0}x{0} square",
                self.size
            )));
        }

        let dots: Vec<Point> = self
            .iter()
            .filter(|(_, s)| *s == CellState::Dot)
            .map(|(p, _)| p)
            .collect();
        match self.dot {
            Some(dot) => {
                if dots != [dot] {
                    return Err(GameError::CorruptSave(format!(
                        "blue dot at {dot} does not match the board"
                    )));
                }
            }
            None => {
                if !dots.is_empty() {
                    return Err(GameError::CorruptSave(
                        "blue dot on the board but no dot location".to_string(),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Print the board.
///
/// Odd rows are indented by one character so that the staggered layout shows: an even row sits
/// half a cell to the left of the odd rows around it.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (y, row) in self.cells.iter().enumerate() {
            if y % 2 == 1 {
                write!(f, " ")?;
            }
            let line: Vec<String> = row.iter().map(|s| s.symbol().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
