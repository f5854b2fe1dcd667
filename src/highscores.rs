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

//! Manage high scores.
//!
//! The main object, [`HighScores`], maintains a list of high scores for each board size.
//! A score is the number of steps it took to encircle the blue dot: the fewer, the better.
//! See the [`crate::saver::highscores`] module that saves and restores the [`HighScores`] object.

use std::collections::HashMap;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

/// Number of entries per scoreboard (number of top scores to keep).
const BOARD_SIZE: usize = 10;

/// Object that represent a score.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Score {
    /// Number of steps to win.
    pub steps: u32,

    /// Completion timestamp, which is used to display the date and time in the scoreboard.
    pub when: SystemTime,
}

/// Sorted list of the top scores for a board size.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
struct ScoreBoard {
    /// Sorted list of the top scores.
    /// The number of scores in this list is controlled by the [`BOARD_SIZE`] constant.
    top: Vec<Score>,
}

impl ScoreBoard {
    /// Add a score to the scoreboard and return the position in the board, or None if the
    /// score does not make it to the board.
    ///
    /// The returned position starts at 1 (top score). A score equal to an existing one is
    /// ranked after it.
    fn add_score(&mut self, steps: u32) -> Option<usize> {
        let position: usize = self.top.partition_point(|s| s.steps <= steps);
        if position >= BOARD_SIZE {
            return None;
        }
        self.top.insert(
            position,
            Score {
                steps,
                when: SystemTime::now(),
            },
        );
        self.top.truncate(BOARD_SIZE);
        Some(position + 1)
    }
}

/// List of the scoreboards for each board size.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct HighScores {
    /// Map of the [`ScoreBoard`] scoreboards indexed by the board size.
    ///
    /// The index is a string in the format "<size>x<size>".
    board: HashMap<String, ScoreBoard>,
}

impl HighScores {
    /// Create a [`HighScores`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the string that is used as an index for the list of scoreboards.
    fn build_key(size: usize) -> String {
        format!("{size}x{size}")
    }

    /// Add a score to the scoreboard of the given board size and return the position in the
    /// scoreboard, or None if the score does not make it to the board.
    pub fn add_score(&mut self, size: usize, steps: u32) -> Option<usize> {
        self.board
            .entry(Self::build_key(size))
            .or_default()
            .add_score(steps)
    }

    /// Return the list of [`Score`] for the given board size.
    ///
    /// Return None when the scoreboard is empty.
    pub fn get_scores(&self, size: usize) -> Option<&[Score]> {
        self.board
            .get(&Self::build_key(size))
            .map(|b| &b.top[..])
            .filter(|top| !top.is_empty())
    }

    /// Return the board sizes that have a scoreboard, smallest first.
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes: Vec<usize> = self
            .board
            .iter()
            .filter(|(_, b)| !b.top.is_empty())
            .filter_map(|(k, _)| k.split('x').next()?.parse().ok())
            .collect();
        sizes.sort_unstable();
        sizes
    }

    /// Return whether the list of scoreboard is empty (no scoreboard for any board size)
    pub fn is_empty(&self) -> bool {
        self.board.values().all(|b| b.top.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(scores: &HighScores, size: usize) -> Vec<u32> {
        scores
            .get_scores(size)
            .unwrap_or_default()
            .iter()
            .map(|s| s.steps)
            .collect()
    }

    #[test]
    fn scores_are_sorted_by_steps() {
        let mut scores = HighScores::new();
        assert!(scores.is_empty());

        assert_eq!(scores.add_score(9, 12), Some(1));
        assert_eq!(scores.add_score(9, 8), Some(1));
        assert_eq!(scores.add_score(9, 10), Some(2));
        assert_eq!(scores.add_score(9, 10), Some(3));

        assert_eq!(steps(&scores, 9), vec![8, 10, 10, 12]);
        assert!(!scores.is_empty());
    }

    #[test]
    fn boards_are_kept_per_size() {
        let mut scores = HighScores::new();
        scores.add_score(9, 5);
        scores.add_score(11, 7);

        assert_eq!(steps(&scores, 9), vec![5]);
        assert_eq!(steps(&scores, 11), vec![7]);
        assert!(scores.get_scores(5).is_none());
        assert_eq!(scores.sizes(), vec![9, 11]);
    }

    #[test]
    fn board_keeps_the_best_ten() {
        let mut scores = HighScores::new();
        for s in 1..=BOARD_SIZE as u32 {
            scores.add_score(9, s * 2);
        }

        assert_eq!(scores.add_score(9, 100), None);
        assert_eq!(scores.add_score(9, 3), Some(2));

        let top = steps(&scores, 9);
        assert_eq!(top.len(), BOARD_SIZE);
        assert_eq!(top[..3], [2, 3, 4]);
        assert_eq!(*top.last().unwrap(), 18);
    }
}
