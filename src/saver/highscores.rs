/*
highscores.rs

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

//! Keep the high scores between sessions.
//!
//! The [`HighScores`] object is stored as JSON in the `highscores.json` file of the data
//! directory. The file is rewritten after every new high score.

use log::debug;
use std::fs::{self, remove_file};
use std::path::PathBuf;

use crate::error::{GameError, Result};
use crate::highscores::HighScores;

/// Location of the high scores file.
pub struct SaverHighScores {
    save_file: PathBuf,
}

impl SaverHighScores {
    /// Store the high scores in the `data_dir` directory.
    pub fn new(mut data_dir: PathBuf) -> Self {
        data_dir.push("highscores.json");
        debug!("High scores file: {data_dir:?}");
        Self {
            save_file: data_dir,
        }
    }

    /// Load the high scores.
    ///
    /// A missing file is not an error: nobody has won yet, so the board is empty.
    pub fn get_highscores(&self) -> Result<HighScores> {
        match fs::read(&self.save_file) {
            Ok(blob) => Ok(serde_json::from_slice(&blob)?),
            Err(error) => match GameError::from(error) {
                GameError::SaveNotFound => Ok(HighScores::new()),
                e => Err(e),
            },
        }
    }

    /// Write the high scores.
    pub fn save_highscores(&self, highscores: &HighScores) -> Result<()> {
        let blob: Vec<u8> = serde_json::to_vec(highscores)?;
        fs::write(&self.save_file, blob)?;
        debug!("High scores saved in {:?}", self.save_file);
        Ok(())
    }

    pub fn delete_save(&self) {
        let _ = remove_file(&self.save_file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn missing_file_gives_empty_scores() {
        let mut dir = std::env::temp_dir();
        dir.push(format!("circle-the-dot-noscores-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let saver = SaverHighScores::new(dir.clone());
        saver.delete_save();

        assert!(saver.get_highscores().unwrap().is_empty());
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn scores_survive_a_round_trip() {
        let mut dir = std::env::temp_dir();
        dir.push(format!("circle-the-dot-scores-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let saver = SaverHighScores::new(dir.clone());
        let mut scores = HighScores::new();
        scores.add_score(9, 14);
        scores.add_score(9, 6);

        saver.save_highscores(&scores).unwrap();
        let loaded = saver.get_highscores().unwrap();

        let steps: Vec<u32> = loaded
            .get_scores(9)
            .unwrap()
            .iter()
            .map(|s| s.steps)
            .collect();
        assert_eq!(steps, vec![6, 14]);
        saver.delete_save();
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn unreadable_scores_are_reported() {
        let mut dir = std::env::temp_dir();
        dir.push(format!("circle-the-dot-badscores-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("highscores.json"), b"[1, 2").unwrap();
        let saver = SaverHighScores::new(dir.clone());

        assert!(matches!(
            saver.get_highscores(),
            Err(GameError::CorruptSave(_))
        ));
        saver.delete_save();
        let _ = fs::remove_dir_all(dir);
    }
}
