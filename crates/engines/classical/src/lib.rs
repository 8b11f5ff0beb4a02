//! Classical Tic-Tac-Toe Engines
//!
//! Depth-bounded minimax and alpha-beta search over private grid copies,
//! with a static evaluator for positions cut off at the depth bound.
//! Both report the number of positions they examined so the two
//! algorithms can be compared move by move.

mod eval;
mod search;

use ttt_core::{Engine, Grid, SearchError, SearchResult};

/// Engine wrapping one of the two tree searches.
///
/// This engine uses:
/// - Minimax or alpha-beta search to `DEPTH_BOUND` plies
/// - An `Evaluator` for cut-off positions (open-line potential by default)
/// - Node counting for every search
#[derive(Debug, Clone)]
pub struct ClassicalEngine<E: Evaluator = OpenLines> {
    algorithm: Algorithm,
    evaluator: E,
    name: String,
    /// Node counter for statistics
    nodes: u64,
}

impl ClassicalEngine<OpenLines> {
    pub fn new(algorithm: Algorithm) -> Self {
        Self::with_evaluator(algorithm, OpenLines)
    }

    pub fn minimax() -> Self {
        Self::new(Algorithm::Minimax)
    }

    pub fn alphabeta() -> Self {
        Self::new(Algorithm::AlphaBeta)
    }
}

impl<E: Evaluator> ClassicalEngine<E> {
    pub fn with_evaluator(algorithm: Algorithm, evaluator: E) -> Self {
        let name = match algorithm {
            Algorithm::Minimax => "Minimax",
            Algorithm::AlphaBeta => "Alpha-Beta",
        };
        Self {
            algorithm,
            evaluator,
            name: name.to_string(),
            nodes: 0,
        }
    }

    /// Nodes visited by the most recent search.
    pub fn last_nodes(&self) -> u64 {
        self.nodes
    }
}

impl<E: Evaluator> Engine for ClassicalEngine<E> {
    fn search(
        &mut self,
        grid: &Grid,
        computer_moves_first: bool,
    ) -> Result<SearchResult, SearchError> {
        self.nodes = 0;
        let result = search_with(self.algorithm, computer_moves_first, grid, &self.evaluator)?;
        self.nodes = result.nodes;
        Ok(result)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use eval::{Evaluator, LineCount, OpenLines};
pub use search::{search_alphabeta, search_minimax, search_with, Algorithm, DEPTH_BOUND};
