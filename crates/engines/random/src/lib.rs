//! Random Move Engine
//!
//! Picks uniformly at random among the empty cells.
//! Useful for:
//! - Exercising the match runner without a real search
//! - Baseline comparisons (the search engines should never lose to it)

use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;
use ttt_core::{check_searchable, Engine, Grid, SearchError, SearchResult};


/// An engine that plays random empty cells.
///
/// It does no evaluation and reports a single node per move.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible move sequence for tests and seeded matches.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Engine for RandomEngine {
    fn search(
        &mut self,
        grid: &Grid,
        _computer_moves_first: bool,
    ) -> Result<SearchResult, SearchError> {
        check_searchable(grid)?;

        let best_move = grid
            .empty_cells()
            .choose(&mut self.rng)
            .ok_or(SearchError::NoEmptyCells)?;

        Ok(SearchResult {
            best_move,
            score: 0,
            nodes: 1,
        })
    }

    fn name(&self) -> &str {
        "Random"
    }
}
