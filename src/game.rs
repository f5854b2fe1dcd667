/*
game.rs

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

//! Manage the game in progress.
//!
//! Each turn, the player selects an available cell, and then the blue dot moves one step along
//! one of its shortest paths to the border.
//! The player wins when the dot cannot reach the border anymore, and loses when the dot reaches
//! it.

use log::{Level, debug, info, log_enabled};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};
use crate::escape::{self, Escape};
use crate::generator;
use crate::grid::{CellState, Grid, Point};
use crate::history::History;

/// Status of the game.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum GameStatus {
    #[default]
    AwaitingSelection,

    /// The blue dot is encircled.
    Won,

    /// The blue dot left the board.
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Result of a player selection.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    Continuing,

    /// The player won. The number of steps is the score.
    Won(u32),

    Lost,
}

/// Copy of the game that the callers can display or save.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Cells, blue dot, and number of steps.
    pub grid: Grid,

    pub status: GameStatus,

    /// Whether [`Game::undo`] would succeed. Not saved: a restored game has no history.
    #[serde(skip)]
    pub can_undo: bool,

    /// Whether [`Game::redo`] would succeed. Not saved.
    #[serde(skip)]
    pub can_redo: bool,
}

impl GameState {
    /// Verify that the board is consistent and that the status is the one the board implies.
    ///
    /// # Errors
    ///
    /// Return [`GameError::CorruptSave`] otherwise.
    pub fn check(&self) -> Result<()> {
        self.grid.validate()?;
        let expected: GameStatus = status_of(&self.grid);
        if self.status != expected {
            return Err(GameError::CorruptSave(format!(
                "status {:?} does not match the board, expected {:?}",
                self.status, expected
            )));
        }
        Ok(())
    }
}

/// Deduce the status from the board.
///
/// A dot on the border is not trapped: it leaves at the next turn.
fn status_of(grid: &Grid) -> GameStatus {
    match grid.dot() {
        None => GameStatus::Lost,
        Some(dot) if grid.is_on_border(dot) => GameStatus::AwaitingSelection,
        Some(_) if escape::is_trapped(grid) => GameStatus::Won,
        Some(_) => GameStatus::AwaitingSelection,
    }
}

/// Game engine.
///
/// The engine owns the board, the undo and redo lists, and the random generator used for the
/// initial layout and for choosing between equally short escape paths.
#[derive(Debug)]
pub struct Game<R: Rng> {
    grid: Grid,
    history: History,
    status: GameStatus,
    rng: R,

    /// Whether the win of the current game was already handed out by [`Game::take_score`].
    /// Undoing a win and playing the same move again must not produce a second score.
    scored: bool,
}

impl<R: Rng> Game<R> {
    /// Start a new game on a random board.
    ///
    /// # Errors
    ///
    /// Return [`GameError::InvalidSize`] if `size` is smaller than [`crate::grid::MIN_SIZE`].
    /// Callers are expected to replace invalid sizes with a default value.
    pub fn new(size: usize, mut rng: R) -> Result<Self> {
        let grid: Grid = generator::random_grid(size, &mut rng)?;
        Ok(Self::from_grid(grid, rng))
    }

    /// Start a game on the given board.
    pub fn from_grid(grid: Grid, rng: R) -> Self {
        let status: GameStatus = status_of(&grid);
        Self {
            grid,
            history: History::new(),
            status,
            rng,
            scored: false,
        }
    }

    /// Rebuild a game from a saved state. The undo and redo lists are empty.
    ///
    /// # Errors
    ///
    /// Return [`GameError::CorruptSave`] if the board is inconsistent or does not match the saved
    /// status.
    pub fn restore(state: GameState, rng: R) -> Result<Self> {
        state.check()?;
        debug!("Restoring game: {:?}", state.status);
        Ok(Self {
            // A saved win was already scored before it was saved
            scored: state.status == GameStatus::Won,
            grid: state.grid,
            history: History::new(),
            status: state.status,
            rng,
        })
    }

    /// Return the board.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Return a copy of the current state.
    pub fn state(&self) -> GameState {
        GameState {
            grid: self.grid.clone(),
            status: self.status,
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
        }
    }

    /// Select a cell, and then move the blue dot.
    ///
    /// # Errors
    ///
    /// Return [`GameError::GameOver`] if the game is finished, and
    /// [`GameError::InvalidSelection`] if the cell is outside the board, already selected, or
    /// holds the blue dot. In both cases nothing changes.
    pub fn select(&mut self, x: usize, y: usize) -> Result<TurnOutcome> {
        if self.status.is_finished() {
            return Err(GameError::GameOver);
        }
        let point = Point::new(x, y);
        if self.grid.get(point) != Some(CellState::Available) {
            debug!("Selection of {point} ignored");
            return Err(GameError::InvalidSelection(point));
        }

        self.history.record_for_undo(&self.grid);
        self.grid.select(point);
        debug!("Cell {point} selected, step {}", self.grid.steps());
        Ok(self.one_step())
    }

    /// Move the blue dot one step toward the border and update the game status.
    fn one_step(&mut self) -> TurnOutcome {
        let outcome: TurnOutcome = match self.grid.dot() {
            // The dot left the board on a previous turn
            None => TurnOutcome::Lost,
            // Only possible with a saved board: the dot is already at the border
            Some(dot) if self.grid.is_on_border(dot) => {
                self.grid.move_dot(None);
                TurnOutcome::Lost
            }
            Some(dot) => match escape::find_escape(&self.grid, &mut self.rng) {
                Escape::NoEscape => TurnOutcome::Won(self.grid.steps()),
                Escape::Step(p) if self.grid.is_on_border(p) => {
                    debug!("Blue dot leaves the board through {p}");
                    self.grid.move_dot(None);
                    TurnOutcome::Lost
                }
                Escape::Step(p) => {
                    debug!("Blue dot moves from {dot} to {p}");
                    self.grid.move_dot(Some(p));
                    TurnOutcome::Continuing
                }
            },
        };

        self.status = match outcome {
            TurnOutcome::Continuing => GameStatus::AwaitingSelection,
            TurnOutcome::Won(steps) => {
                info!("Won in {steps} steps");
                GameStatus::Won
            }
            TurnOutcome::Lost => {
                info!("Lost after {} steps", self.grid.steps());
                GameStatus::Lost
            }
        };
        self.log_board();
        outcome
    }

    /// Revert the last move.
    ///
    /// Undo is also available after the game is finished: the game then resumes.
    ///
    /// # Errors
    ///
    /// Return [`GameError::EmptyHistory`] if there is nothing to undo.
    pub fn undo(&mut self) -> Result<GameState> {
        self.history.undo(&mut self.grid)?;
        self.status = status_of(&self.grid);
        self.log_board();
        Ok(self.state())
    }

    /// Reapply the last undone move.
    ///
    /// # Errors
    ///
    /// Return [`GameError::EmptyHistory`] if there is nothing to redo.
    pub fn redo(&mut self) -> Result<GameState> {
        self.history.redo(&mut self.grid)?;
        self.status = status_of(&self.grid);
        self.log_board();
        Ok(self.state())
    }

    /// Start a new game on a random board of the same size.
    ///
    /// # Errors
    ///
    /// Return the error of the board generator. The current game is then left untouched.
    pub fn reset(&mut self) -> Result<GameState> {
        let size: usize = self.grid.size();
        let grid: Grid = generator::random_grid(size, &mut self.rng)?;
        self.grid = grid;
        self.history.clear();
        self.status = status_of(&self.grid);
        self.scored = false;
        info!("New {size}x{size} game");
        Ok(self.state())
    }

    /// Return the score of the current game if it is won and was not returned before.
    ///
    /// A game is scored at most once, even when the winning move is undone and played again.
    pub fn take_score(&mut self) -> Option<u32> {
        if self.status != GameStatus::Won || self.scored {
            return None;
        }
        self.scored = true;
        Some(self.grid.steps())
    }

    fn log_board(&self) {
        if log_enabled!(Level::Debug) {
            for line in self.grid.to_string().lines() {
                debug!("{line}");
            }
        }
    }
}
