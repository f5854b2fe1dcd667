/*
main.rs

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

mod cli_options;

use chrono::{DateTime, Local};
use log::{debug, warn};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use circle_the_dot::highscores::HighScores;
use circle_the_dot::saver::game::SaverGame;
use circle_the_dot::saver::highscores::SaverHighScores;
use circle_the_dot::{Game, GameError, GameState, GameStatus, TurnOutcome};

const HELP: &str = "Commands:
  <x> <y>  select the cell at column x and row y
  u        undo
  r        redo
  n        new game
  q        save and quit";

/// Player commands read from the terminal.
#[derive(Debug, PartialEq)]
enum Command {
    Select(usize, usize),
    Undo,
    Redo,
    New,
    Quit,
    Help,
}

fn parse_command(line: &str) -> Option<Command> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words[..] {
        ["u"] | ["undo"] => Some(Command::Undo),
        ["r"] | ["redo"] => Some(Command::Redo),
        ["n"] | ["new"] => Some(Command::New),
        ["q"] | ["quit"] => Some(Command::Quit),
        ["h"] | ["help"] | ["?"] => Some(Command::Help),
        [x, y] => Some(Command::Select(x.parse().ok()?, y.parse().ok()?)),
        _ => None,
    }
}

/// Print the board with the column and row numbers.
fn print_state(state: &GameState) {
    let size: usize = state.grid.size();
    let header: Vec<String> = (0..size).map(|x| (x % 10).to_string()).collect();
    println!();
    println!("    {}", header.join(" "));
    for (y, line) in state.grid.to_string().lines().enumerate() {
        println!("{y:>3} {line}");
    }
    println!(
        "Steps: {}{}{}",
        state.grid.steps(),
        if state.can_undo { "  [u]ndo" } else { "" },
        if state.can_redo { "  [r]edo" } else { "" }
    );
}

fn print_scores(highscores: &HighScores) {
    if highscores.is_empty() {
        println!("No high scores yet");
        return;
    }
    for size in highscores.sizes() {
        println!("{size}x{size} board");
        for (i, score) in highscores.get_scores(size).unwrap_or_default().iter().enumerate() {
            let when: DateTime<Local> = DateTime::from(score.when);
            println!(
                "  {:>2}. {:>4} steps  {}",
                i + 1,
                score.steps,
                when.format("%Y-%m-%d %H:%M")
            );
        }
    }
}

/// Retrieve the saved game, if any, and delete it.
fn load_saved_game(saver: &SaverGame, new: bool) -> Option<GameState> {
    if new {
        saver.delete_save();
        return None;
    }
    let saved: Option<GameState> = match saver.get_game() {
        Ok(state) => {
            debug!("Saved game found: {:?}", state.status);
            Some(state)
        }
        Err(GameError::SaveNotFound) => {
            debug!("No saved game");
            None
        }
        Err(error) => {
            warn!("Error getting the saved game: {error}");
            None
        }
    };
    // Delete the file, also when in error, so that the next start is clean
    saver.delete_save();
    saved
}

/// Add the win of the current game to the high scores, unless it was already recorded.
fn record_score<R: Rng>(game: &mut Game<R>, highscores: &mut HighScores, saver: &SaverHighScores) {
    let Some(steps) = game.take_score() else {
        debug!("Win already recorded");
        return;
    };
    let size: usize = game.grid().size();
    if let Some(position) = highscores.add_score(size, steps) {
        println!("New high score for the {size}x{size} board: #{position}");
        if let Err(error) = saver.save_highscores(highscores) {
            warn!("Error saving the high scores: {error}");
        }
    }
}

fn main() -> ExitCode {
    let args = cli_options::parse();

    let saver_scores = SaverHighScores::new(args.data_dir.clone());
    let mut highscores: HighScores = saver_scores.get_highscores().unwrap_or_else(|error| {
        warn!("Error getting the high scores: {error}");
        HighScores::new()
    });
    if args.scores {
        print_scores(&highscores);
        return ExitCode::SUCCESS;
    }

    let rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let saver = SaverGame::new(args.data_dir.clone());
    let restored = load_saved_game(&saver, args.new).map(|s| Game::restore(s, rng.clone()));
    let mut game: Game<StdRng> = match restored {
        Some(Ok(game)) => game,
        other => {
            if let Some(Err(error)) = other {
                warn!("Cannot restore the saved game: {error}");
            }
            match Game::new(args.board_size, rng) {
                Ok(game) => game,
                Err(error) => {
                    eprintln!("{error}");
                    return ExitCode::FAILURE;
                }
            }
        }
    };

    println!("{HELP}");
    print_state(&game.state());

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => (),
            Err(error) => {
                eprintln!("{error}");
                break;
            }
        }

        let Some(command) = parse_command(&line) else {
            if !line.trim().is_empty() {
                println!("Unknown command, type h for help");
            }
            continue;
        };
        match command {
            Command::Select(x, y) => match game.select(x, y) {
                Ok(TurnOutcome::Continuing) => (),
                Ok(TurnOutcome::Won(steps)) => {
                    println!("Congratulations, you won in {steps} steps!");
                    record_score(&mut game, &mut highscores, &saver_scores);
                    println!("Type n to play again, or q to quit.");
                }
                Ok(TurnOutcome::Lost) => {
                    println!("You lost! Type n to play again, or q to quit.");
                }
                Err(error) => {
                    println!("{error}");
                    continue;
                }
            },
            Command::Undo => {
                if let Err(error) = game.undo() {
                    println!("{error}");
                    continue;
                }
            }
            Command::Redo => {
                if let Err(error) = game.redo() {
                    println!("{error}");
                    continue;
                }
            }
            Command::New => {
                if let Err(error) = game.reset() {
                    println!("{error}");
                    continue;
                }
            }
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            Command::Quit => break,
        }
        print_state(&game.state());
    }

    // Only an unfinished game is worth restoring
    if game.status() == GameStatus::AwaitingSelection {
        debug!("Saving the game");
        if let Err(error) = saver.save_game(&game.state()) {
            warn!("Error saving the game: {error}");
        }
    } else {
        saver.delete_save();
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use circle_the_dot::neighbors::Adjacent;
    use circle_the_dot::{Grid, Point};
    use std::fs;

    #[test]
    fn commands() {
        assert_eq!(parse_command("3 4\n"), Some(Command::Select(3, 4)));
        assert_eq!(parse_command(" u "), Some(Command::Undo));
        assert_eq!(parse_command("redo"), Some(Command::Redo));
        assert_eq!(parse_command("n"), Some(Command::New));
        assert_eq!(parse_command("q"), Some(Command::Quit));
        assert_eq!(parse_command("3 x"), None);
        assert_eq!(parse_command("1 2 3"), None);
        assert_eq!(parse_command(""), None);
    }

    #[test]
    fn replayed_win_is_recorded_once() {
        let mut dir = std::env::temp_dir();
        dir.push(format!("circle-the-dot-replay-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let saver = SaverHighScores::new(dir.clone());
        let mut highscores = HighScores::new();

        let dot = Point::new(3, 3);
        let mut grid = Grid::new(7, dot).unwrap();
        let neighbors: Vec<Point> = Adjacent::new(dot, 7).iter().collect();
        for p in &neighbors[1..] {
            grid.select(*p);
        }
        assert_eq!(grid.steps(), 5);
        let mut game = Game::from_grid(grid, StdRng::seed_from_u64(1));
        let last = neighbors[0];

        for _ in 0..3 {
            assert_eq!(game.select(last.x, last.y), Ok(TurnOutcome::Won(6)));
            record_score(&mut game, &mut highscores, &saver);
            game.undo().unwrap();
        }

        assert_eq!(highscores.get_scores(7).map(|s| s.len()), Some(1));
        saver.delete_save();
        let _ = fs::remove_dir_all(dir);
    }
}
