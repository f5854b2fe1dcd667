/*
generator.rs

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

//! Generate the random board of a new game.
//!
//! The blue dot is placed on a small window at the center of the board: a 2x2 window on even
//! boards and a 3x3 window on odd boards.
//! Every other cell is then selected with a probability of 1/[`INITIAL_PROBA`].

use log::{Level, debug, log_enabled};
use rand::Rng;

use crate::error::{GameError, Result};
use crate::grid::{CellState, Grid, MIN_SIZE, Point};

/// The probability that an available cell is initially selected is 1/INITIAL_PROBA.
const INITIAL_PROBA: u32 = 10;

/// Return the initial position of the blue dot.
fn starting_dot<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Point {
    if size % 2 == 0 {
        let x: usize = size / 2 - rng.random_range(0..2);
        let y: usize = size / 2 - rng.random_range(0..2);
        Point::new(x, y)
    } else {
        let x: usize = size / 2 + 1 - rng.random_range(0..3);
        let y: usize = size / 2 + 1 - rng.random_range(0..3);
        Point::new(x, y)
    }
}

/// Generate a random board.
///
/// # Errors
///
/// Return [`crate::error::GameError::InvalidSize`] if `size` is smaller than
/// [`crate::grid::MIN_SIZE`].
pub fn random_grid<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Grid> {
    if size < MIN_SIZE {
        return Err(GameError::InvalidSize(size));
    }
    let dot: Point = starting_dot(size, rng);
    let mut grid: Grid = Grid::new(size, dot)?;

    for x in 0..size {
        for y in 0..size {
            let p = Point::new(x, y);
            if p != dot && rng.random_range(0..INITIAL_PROBA) == 0 {
                grid.set_cell(p, CellState::Selected);
            }
        }
    }

    debug!("New {size}x{size} board, blue dot at {dot}");
    if log_enabled!(Level::Debug) {
        for line in grid.to_string().lines() {
            debug!("{line}");
        }
    }
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn rejects_small_boards() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            random_grid(3, &mut rng),
            Err(GameError::InvalidSize(3))
        );
    }

    #[test]
    fn even_board_dot_in_center_window() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let grid = random_grid(8, &mut rng).unwrap();
            let dot = grid.dot().unwrap();

            assert!((3..=4).contains(&dot.x), "{dot}");
            assert!((3..=4).contains(&dot.y), "{dot}");
            assert_eq!(grid.cell(dot), CellState::Dot);
            assert_eq!(grid.steps(), 0);
        }
    }

    #[test]
    fn odd_board_dot_in_center_window() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let grid = random_grid(9, &mut rng).unwrap();
            let dot = grid.dot().unwrap();

            assert!((3..=5).contains(&dot.x), "{dot}");
            assert!((3..=5).contains(&dot.y), "{dot}");
        }
    }

    #[test]
    fn only_one_dot_and_some_selected_cells() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = random_grid(30, &mut rng).unwrap();

        assert_eq!(grid.validate(), Ok(()));
        let selected = grid
            .iter()
            .filter(|(_, s)| *s == CellState::Selected)
            .count();
        // About 90 cells out of 900 are expected
        assert!((30..200).contains(&selected), "{selected}");
    }

    #[test]
    fn same_seed_same_board() {
        let a = random_grid(11, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = random_grid(11, &mut StdRng::seed_from_u64(42)).unwrap();

        assert_eq!(a, b);
    }
}
