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

//! Save and restore the game in progress when quitting or starting the game.
//!
//! When a game is in progress and the player quits, the game state is saved in the
//! `savegame.json` file. When the game is restarted, the saved game is loaded, and the player
//! can continue.
//!
//! The saved object is a serialization of the [`GameState`] object in JSON format by using
//! [`serde`]. The undo and redo lists are not saved.

use log::debug;
use std::fs::{self, remove_file};
use std::path::PathBuf;

use crate::error::Result;
use crate::game::GameState;

/// Serialize a game state.
pub fn to_blob(state: &GameState) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(state)?)
}

/// Deserialize and verify a game state.
///
/// # Errors
///
/// Return [`crate::error::GameError::CorruptSave`] if the data is not a valid game, if the
/// board is not consistent, or if the status is not the one the board implies.
pub fn from_blob(blob: &[u8]) -> Result<GameState> {
    let state: GameState = serde_json::from_slice(blob)?;
    state.check()?;
    Ok(state)
}

/// Object to save and restore a game in progress.
pub struct SaverGame {
    /// Absolute path to the save file.
    save_file: PathBuf,
}

impl SaverGame {
    /// Create a [`SaverGame`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the game must be saved.
    pub fn new(mut data_dir: PathBuf) -> Self {
        data_dir.push("savegame.json");
        debug!("Save game file: {data_dir:?}");
        SaverGame {
            save_file: data_dir,
        }
    }

    /// Retrieve the saved game.
    ///
    /// # Errors
    ///
    /// Return [`crate::error::GameError::SaveNotFound`] if there is no saved game, and
    /// [`crate::error::GameError::CorruptSave`] if the file cannot be parsed.
    pub fn get_game(&self) -> Result<GameState> {
        let blob: Vec<u8> = fs::read(&self.save_file)?;
        from_blob(&blob)
    }

    /// Save the provided game.
    pub fn save_game(&self, state: &GameState) -> Result<()> {
        let blob: Vec<u8> = to_blob(state)?;
        fs::write(&self.save_file, blob)?;
        debug!("Game saved in {:?}", self.save_file);
        Ok(())
    }

    /// Delete the saved game.
    pub fn delete_save(&self) {
        let _ = remove_file(&self.save_file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;
    use crate::game::{Game, GameStatus};
    use crate::grid::{Grid, Point};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn temp_dir(name: &str) -> PathBuf {
        let mut dir = std::env::temp_dir();
        dir.push(format!("circle-the-dot-{name}-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn played_game() -> Game<StdRng> {
        let grid = Grid::new(9, Point::new(4, 4)).unwrap();
        let mut game = Game::from_grid(grid, StdRng::seed_from_u64(1));
        game.select(0, 0).unwrap();
        game.select(8, 8).unwrap();
        game
    }

    #[test]
    fn blob_restores_board_and_status() {
        let game = played_game();
        let state = game.state();

        let restored = from_blob(&to_blob(&state).unwrap()).unwrap();

        assert_eq!(restored.grid, state.grid);
        assert_eq!(restored.status, state.status);
        // History is not part of the save
        assert!(state.can_undo);
        assert!(!restored.can_undo);
    }

    #[test]
    fn garbage_is_corrupt() {
        assert!(matches!(
            from_blob(b"not a game"),
            Err(GameError::CorruptSave(_))
        ));
    }

    #[test]
    fn inconsistent_board_is_corrupt() {
        let state = played_game().state();
        let mut json: serde_json::Value = serde_json::from_slice(&to_blob(&state).unwrap()).unwrap();
        json["grid"]["dot"] = serde_json::json!({"x": 0, "y": 0});

        let blob = serde_json::to_vec(&json).unwrap();

        assert!(matches!(from_blob(&blob), Err(GameError::CorruptSave(_))));
    }

    #[test]
    fn win_on_open_board_is_corrupt() {
        let mut state = played_game().state();
        state.status = GameStatus::Won;

        assert!(matches!(
            from_blob(&to_blob(&state).unwrap()),
            Err(GameError::CorruptSave(_))
        ));
    }

    #[test]
    fn missing_file_is_reported() {
        let saver = SaverGame::new(temp_dir("missing"));
        saver.delete_save();

        assert_eq!(saver.get_game().map(|_| ()), Err(GameError::SaveNotFound));
    }

    #[test]
    fn save_then_load_then_continue() {
        let dir = temp_dir("roundtrip");
        let saver = SaverGame::new(dir.clone());
        let state = played_game().state();

        saver.save_game(&state).unwrap();
        let loaded = saver.get_game().unwrap();
        let mut game = Game::restore(loaded, StdRng::seed_from_u64(2)).unwrap();

        assert_eq!(game.grid(), &state.grid);
        assert!(!game.can_undo());
        game.select(1, 0).unwrap();
        assert_eq!(game.grid().steps(), 3);

        saver.delete_save();
        let _ = fs::remove_dir_all(dir);
    }
}
