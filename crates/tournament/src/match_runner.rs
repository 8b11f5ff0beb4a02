//! Match runner for playing games between engines

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use ttt_core::{Engine, Grid, Mark, SearchError};

use crate::config::TournamentConfig;
use crate::results::{GameResult, MatchResult};

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Whether to alternate who moves first each game (otherwise random)
    pub alternate_first: bool,
    /// Seed for random first-mover assignment
    pub seed: Option<u64>,
    /// Print progress during match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            alternate_first: true,
            seed: None,
            verbose: true,
        }
    }
}

impl From<&TournamentConfig> for MatchConfig {
    fn from(config: &TournamentConfig) -> Self {
        Self {
            num_games: config.games,
            alternate_first: config.alternate_first,
            seed: config.seed,
            verbose: config.verbose,
        }
    }
}

/// One finished game, seen from the side that played X.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRecord {
    pub result: GameResult,
    pub final_grid: Grid,
    pub x_nodes: u64,
    pub o_nodes: u64,
    pub x_moves: u32,
    pub o_moves: u32,
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(
        &self,
        engine1: &mut dyn Engine,
        engine2: &mut dyn Engine,
    ) -> Result<MatchResult, SearchError> {
        let mut result = MatchResult::new();
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        for game_num in 0..self.config.num_games {
            let engine1_first = if self.config.alternate_first {
                game_num % 2 == 0
            } else {
                rng.gen_bool(0.5)
            };

            let (game_result, record) = if engine1_first {
                let record = self.play_game(engine1, engine2)?;
                result.engine1_nodes += record.x_nodes;
                result.engine2_nodes += record.o_nodes;
                result.engine1_moves += record.x_moves;
                result.engine2_moves += record.o_moves;
                (record.result, record)
            } else {
                // Flip result since engine1 plays O
                let record = self.play_game(engine2, engine1)?;
                result.engine1_nodes += record.o_nodes;
                result.engine2_nodes += record.x_nodes;
                result.engine1_moves += record.o_moves;
                result.engine2_moves += record.x_moves;
                (record.result.flip(), record)
            };

            result.record(game_result);

            if self.config.verbose {
                let mark = if engine1_first { "X" } else { "O" };
                let outcome = match game_result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                println!(
                    "Game {}/{}: {} ({}) {} - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    mark,
                    record.final_grid.to_compact(),
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
        }

        info!(
            engine1 = engine1.name(),
            engine2 = engine2.name(),
            wins = result.wins,
            losses = result.losses,
            draws = result.draws,
            "match finished"
        );
        Ok(result)
    }

    /// Play a single game, result from X's perspective
    pub fn play_game(
        &self,
        x: &mut dyn Engine,
        o: &mut dyn Engine,
    ) -> Result<GameRecord, SearchError> {
        let mut grid = Grid::empty();
        let mut record = GameRecord {
            result: GameResult::Draw,
            final_grid: grid,
            x_nodes: 0,
            o_nodes: 0,
            x_moves: 0,
            o_moves: 0,
        };
        x.new_game();
        o.new_game();

        while !grid.is_terminal() {
            let mover = grid.side_to_move();
            let search = match mover {
                Mark::X => x.search(&grid, true)?,
                Mark::O => o.search(&grid, false)?,
            };
            if !grid.is_empty_cell(search.best_move) {
                return Err(SearchError::IllegalMove {
                    cell: search.best_move,
                });
            }
            grid.set(search.best_move, mover);

            match mover {
                Mark::X => {
                    record.x_nodes += search.nodes;
                    record.x_moves += 1;
                }
                Mark::O => {
                    record.o_nodes += search.nodes;
                    record.o_moves += 1;
                }
            }
        }

        record.final_grid = grid;
        record.result = match grid.winner() {
            Some(Mark::X) => GameResult::Win,
            Some(Mark::O) => GameResult::Loss,
            None => GameResult::Draw,
        };
        Ok(record)
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
    seed: Option<u64>,
) -> Result<MatchResult, SearchError> {
    let config = MatchConfig {
        num_games,
        seed,
        verbose: false,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(engine1, engine2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
