/*
error.rs

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

//! Errors returned by the game engine and the savers.
//!
//! None of these errors is fatal: after a rejected operation the engine is left exactly as it
//! was before the call.

use thiserror::Error;

use crate::grid::Point;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The requested board is smaller than [`crate::grid::MIN_SIZE`].
    #[error("Invalid board size {0}: the board must be at least 4 cells wide")]
    InvalidSize(usize),

    /// The cell is outside the board, already selected, or holds the blue dot.
    #[error("Cell {0} cannot be selected")]
    InvalidSelection(Point),

    #[error("Game already ended, no new moves are accepted")]
    GameOver,

    #[error("Nothing to undo or redo")]
    EmptyHistory,

    #[error("Corrupted saved game: {0}")]
    CorruptSave(String),

    #[error("No saved game")]
    SaveNotFound,

    #[error("I/O error: {0}")]
    Io(String),
}

pub type Result<T> = std::result::Result<T, GameError>;

impl From<serde_json::Error> for GameError {
    fn from(error: serde_json::Error) -> Self {
        GameError::CorruptSave(error.to_string())
    }
}

impl From<std::io::Error> for GameError {
    fn from(error: std::io::Error) -> Self {
        match error.kind() {
            std::io::ErrorKind::NotFound => GameError::SaveNotFound,
            _ => GameError::Io(error.to_string()),
        }
    }
}
