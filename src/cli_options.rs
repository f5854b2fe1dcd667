/*
cli_options.rs

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

//! Process command-line options.
//!
//! # Examples
//!
//! Play on an 11x11 board, with a reproducible game:
//!
//! ```text
//! $ circle-the-dot 11 --seed 42
//! ```
//!
//! Display the high scores:
//!
//! ```text
//! $ circle-the-dot --scores
//! ```

use clap::Parser;
use log::debug;
use std::env;
use std::path::PathBuf;

use circle_the_dot::MIN_SIZE;

/// Size of the board when none, or an invalid one, is provided.
pub const DEFAULT_SIZE: usize = 9;

/// Trap the blue dot before it escapes the board.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
pub struct Args {
    /// Number of rows and columns of the board
    #[arg(default_value_t = DEFAULT_SIZE.to_string())]
    pub size: String,

    /// Board size deduced from `size`
    #[arg(skip)]
    pub board_size: usize,

    /// Seed for the random generator, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory where the game in progress and the high scores are saved
    #[arg(long, default_value = ".")]
    pub data_dir: PathBuf,

    /// Ignore and delete the saved game
    #[arg(short, long, default_value_t = false)]
    pub new: bool,

    /// Print the high scores and exit
    #[arg(short, long, default_value_t = false)]
    pub scores: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,
}

/// Convert the size argument.
///
/// A value that is not a number, or a board smaller than [`MIN_SIZE`], is replaced by
/// [`DEFAULT_SIZE`].
pub fn board_size(value: &str) -> usize {
    match value.trim().parse::<usize>() {
        Ok(size) if size >= MIN_SIZE => size,
        _ => {
            println!("Invalid size {value}, using default size {DEFAULT_SIZE}");
            DEFAULT_SIZE
        }
    }
}

/// Parse the command-line options and initialize the logger.
pub fn parse() -> Args {
    let mut args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    args.board_size = board_size(&args.size);
    debug!("Options: {args:?}");
    args
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["circle-the-dot"]).unwrap();

        assert_eq!(board_size(&args.size), DEFAULT_SIZE);
        assert_eq!(args.seed, None);
        assert_eq!(args.data_dir, PathBuf::from("."));
        assert!(!args.new && !args.scores && !args.debug);
    }

    #[test]
    fn size_and_seed() {
        let args =
            Args::try_parse_from(["circle-the-dot", "13", "--seed", "7", "--new"]).unwrap();

        assert_eq!(board_size(&args.size), 13);
        assert_eq!(args.seed, Some(7));
        assert!(args.new);
    }

    #[test]
    fn invalid_sizes_fall_back_to_default() {
        let args = Args::try_parse_from(["circle-the-dot", "big"]).unwrap();

        assert_eq!(board_size(&args.size), DEFAULT_SIZE);
        assert_eq!(board_size("3"), DEFAULT_SIZE);
        assert_eq!(board_size("-5"), DEFAULT_SIZE);
        assert_eq!(board_size("4"), 4);
    }
}
