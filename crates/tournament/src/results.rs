//! Match results and reporting

use serde::{Deserialize, Serialize};

/// Result of a single game from one engine's perspective
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// The same game seen from the other side.
    pub fn flip(self) -> GameResult {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }
}

/// Result of a match (multiple games), from engine1's perspective
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    /// Nodes searched by engine1 over the whole match
    pub engine1_nodes: u64,
    /// Nodes searched by engine2 over the whole match
    pub engine2_nodes: u64,
    /// Moves played by engine1
    pub engine1_moves: u32,
    /// Moves played by engine2
    pub engine2_moves: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }

    /// Average nodes per move for engine1 and engine2.
    pub fn nodes_per_move(&self) -> (f64, f64) {
        fn avg(nodes: u64, moves: u32) -> f64 {
            if moves == 0 {
                0.0
            } else {
                nodes as f64 / moves as f64
            }
        }
        (
            avg(self.engine1_nodes, self.engine1_moves),
            avg(self.engine2_nodes, self.engine2_moves),
        )
    }
}

/// A finished match with the names of both sides
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub engine1: String,
    pub engine2: String,
    pub result: MatchResult,
}

impl MatchReport {
    pub fn new(engine1: &str, engine2: &str, result: MatchResult) -> Self {
        Self {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            result,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let r = &self.result;
        let (n1, n2) = r.nodes_per_move();
        let mut report = String::new();
        report.push_str(&format!("=== Match: {} vs {} ===\n\n", self.engine1, self.engine2));
        report.push_str(&format!(
            "{:<20} {:>5} {:>5} {:>5} {:>14} {:>12}\n",
            "Engine", "W", "L", "D", "Nodes", "Nodes/move"
        ));
        report.push_str(&"-".repeat(66));
        report.push('\n');
        report.push_str(&format!(
            "{:<20} {:>5} {:>5} {:>5} {:>14} {:>12.1}\n",
            self.engine1, r.wins, r.losses, r.draws, r.engine1_nodes, n1
        ));
        report.push_str(&format!(
            "{:<20} {:>5} {:>5} {:>5} {:>14} {:>12.1}\n",
            self.engine2, r.losses, r.wins, r.draws, r.engine2_nodes, n2
        ));
        report.push_str(&format!("\nScore: {:.1}%\n", r.score() * 100.0));
        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

/// Node counts of both searches on one grid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchComparison {
    pub minimax_move: usize,
    pub minimax_nodes: u64,
    pub alphabeta_move: usize,
    pub alphabeta_nodes: u64,
}

impl SearchComparison {
    /// Fraction of minimax nodes alpha-beta skipped.
    pub fn pruned_fraction(&self) -> f64 {
        if self.minimax_nodes == 0 {
            return 0.0;
        }
        1.0 - self.alphabeta_nodes as f64 / self.minimax_nodes as f64
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
