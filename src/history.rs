/*
history.rs

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

//! Manage the undo and redo lists.
//!
//! Both lists store full copies of the board. Undo and redo restore the cells and the blue dot
//! exactly, but only move the step counter of the live board by one instead of copying the
//! counter stored in the snapshot.

use log::debug;

use crate::error::{GameError, Result};
use crate::grid::Grid;

#[derive(Debug, Clone, Default)]
pub struct History {
    /// Boards before each move, the most recent last.
    undo_list: Vec<Grid>,

    /// Boards that were undone, the most recent last.
    redo_list: Vec<Grid>,
}

impl History {
    /// Create a [`History`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty both lists.
    pub fn clear(&mut self) {
        self.undo_list.clear();
        self.redo_list.clear();
    }

    /// Store a copy of the board before a move is applied.
    ///
    /// A new move invalidates the moves that were undone, so the redo list is cleared.
    pub fn record_for_undo(&mut self, grid: &Grid) {
        self.undo_list.push(grid.clone());
        self.redo_list.clear();
    }

    /// Revert the board to its state before the last move.
    ///
    /// # Errors
    ///
    /// Return [`GameError::EmptyHistory`] if there is nothing to undo. The board is not modified.
    pub fn undo(&mut self, grid: &mut Grid) -> Result<()> {
        let previous: Grid = self.undo_list.pop().ok_or(GameError::EmptyHistory)?;
        self.redo_list.push(grid.clone());
        grid.restore_board(&previous);
        grid.decrement_steps();
        debug!(
            "Undo: {} undo and {} redo boards left",
            self.undo_list.len(),
            self.redo_list.len()
        );
        Ok(())
    }

    /// Reapply the last undone move.
    ///
    /// # Errors
    ///
    /// Return [`GameError::EmptyHistory`] if there is nothing to redo. The board is not modified.
    pub fn redo(&mut self, grid: &mut Grid) -> Result<()> {
        let next: Grid = self.redo_list.pop().ok_or(GameError::EmptyHistory)?;
        self.undo_list.push(grid.clone());
        grid.restore_board(&next);
        grid.increment_steps();
        debug!(
            "Redo: {} undo and {} redo boards left",
            self.undo_list.len(),
            self.redo_list.len()
        );
        Ok(())
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_list.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_list.is_empty()
    }

    /// Return the length of the undo list.
    pub fn undo_len(&self) -> usize {
        self.undo_list.len()
    }

    /// Return the length of the redo list.
    pub fn redo_len(&self) -> usize {
        self.redo_list.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{CellState, Point};

    fn board() -> Grid {
        Grid::new(6, Point::new(3, 3)).unwrap()
    }

    /// Select a cell and move the dot, as a turn does.
    fn play(history: &mut History, grid: &mut Grid, selected: Point, dot: Point) {
        history.record_for_undo(grid);
        grid.select(selected);
        grid.move_dot(Some(dot));
    }

    #[test]
    fn empty_history_fails_without_touching_the_board() {
        let mut history = History::new();
        let mut grid = board();
        let before = grid.clone();

        assert_eq!(history.undo(&mut grid), Err(GameError::EmptyHistory));
        assert_eq!(history.redo(&mut grid), Err(GameError::EmptyHistory));
        assert_eq!(grid, before);
    }

    #[test]
    fn undo_restores_board_and_decrements_steps() {
        let mut history = History::new();
        let mut grid = board();
        let before = grid.clone();

        play(&mut history, &mut grid, Point::new(0, 0), Point::new(4, 3));
        history.undo(&mut grid).unwrap();

        assert_eq!(grid, before);
        assert!(!history.can_undo());
        assert!(history.can_redo());
    }

    #[test]
    fn undo_then_redo_is_identity() {
        let mut history = History::new();
        let mut grid = board();
        play(&mut history, &mut grid, Point::new(0, 0), Point::new(4, 3));
        play(&mut history, &mut grid, Point::new(5, 5), Point::new(4, 2));
        let after = grid.clone();

        history.undo(&mut grid).unwrap();
        history.undo(&mut grid).unwrap();
        history.redo(&mut grid).unwrap();
        history.redo(&mut grid).unwrap();

        assert_eq!(grid, after);
        assert_eq!(grid.steps(), 2);
        assert_eq!(history.undo_len(), 2);
        assert_eq!(history.redo_len(), 0);
    }

    #[test]
    fn new_move_clears_redo_list() {
        let mut history = History::new();
        let mut grid = board();
        play(&mut history, &mut grid, Point::new(0, 0), Point::new(4, 3));
        play(&mut history, &mut grid, Point::new(5, 5), Point::new(4, 2));
        history.undo(&mut grid).unwrap();
        history.undo(&mut grid).unwrap();
        assert_eq!(history.redo_len(), 2);

        play(&mut history, &mut grid, Point::new(1, 0), Point::new(2, 3));

        assert!(!history.can_redo());
        assert_eq!(history.undo_len(), 1);
        assert_eq!(grid.steps(), 1);
    }

    #[test]
    fn snapshots_are_not_affected_by_later_moves() {
        let mut history = History::new();
        let mut grid = board();
        play(&mut history, &mut grid, Point::new(0, 0), Point::new(4, 3));
        grid.set_cell(Point::new(1, 1), CellState::Selected);

        history.undo(&mut grid).unwrap();

        assert_eq!(grid.cell(Point::new(1, 1)), CellState::Available);
        assert_eq!(grid.cell(Point::new(0, 0)), CellState::Available);
    }

    #[test]
    fn clear_empties_both_lists() {
        let mut history = History::new();
        let mut grid = board();
        play(&mut history, &mut grid, Point::new(0, 0), Point::new(4, 3));
        play(&mut history, &mut grid, Point::new(5, 5), Point::new(4, 2));
        history.undo(&mut grid).unwrap();

        history.clear();

        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
