//! Side-by-side node counts for the two searches

use classical_engine::{search_alphabeta, search_minimax};
use ttt_core::{Grid, SearchError};

use crate::results::SearchComparison;

/// Runs minimax and alpha-beta on the same grid and reports both counts.
pub fn compare_searches(
    grid: &Grid,
    computer_moves_first: bool,
) -> Result<SearchComparison, SearchError> {
    let mm = search_minimax(computer_moves_first, grid)?;
    let ab = search_alphabeta(computer_moves_first, grid)?;

    Ok(SearchComparison {
        minimax_move: mm.best_move,
        minimax_nodes: mm.nodes,
        alphabeta_move: ab.best_move,
        alphabeta_nodes: ab.nodes,
    })
}
