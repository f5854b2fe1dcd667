/*
lib.rs

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

//! Circle the Dot: trap the blue dot before it escapes the board.
//!
//! The board is a square of staggered cells. On each turn the player selects a cell, and then
//! the blue dot moves one step along a shortest path toward the border.
//!
//! * [`game::Game`] is the engine that callers drive: select, undo, redo, and reset.
//! * [`escape`] finds the next step of the blue dot.
//! * [`saver`] saves and restores the game in progress and the high scores.

pub mod error;
pub mod escape;
pub mod game;
pub mod generator;
pub mod grid;
pub mod highscores;
pub mod history;
pub mod neighbors;
pub mod saver;

pub use error::{GameError, Result};
pub use game::{Game, GameState, GameStatus, TurnOutcome};
pub use grid::{CellState, Grid, MIN_SIZE, Point};
