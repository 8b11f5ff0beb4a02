pub mod board;
pub mod error;
pub mod perft;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::*;
pub use perft::{game_tree_size, perft, reachable_positions};
pub use types::*;

/// Score of a position the computer has won.
pub const WIN: i32 = i32::MAX;
/// Score of a position the computer has lost.
pub const LOSS: i32 = -i32::MAX;

// =============================================================================
// Engine trait — implemented by every move chooser (minimax, alpha-beta, random)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Chosen cell, always empty in the searched grid
    pub best_move: usize,
    /// Backing value of the chosen cell from the computer's perspective
    pub score: i32,
    /// Positions examined below the root
    pub nodes: u64,
}

/// Trait that all engines must implement.
///
/// The orchestration layer calls `search` once per computer turn and applies
/// the returned cell.
pub trait Engine: Send {
    /// Choose a move for the computer.
    ///
    /// # Arguments
    /// * `grid` - The current grid, never mutated
    /// * `computer_moves_first` - Whether the computer owns X for this match
    fn search(&mut self, grid: &Grid, computer_moves_first: bool)
        -> Result<SearchResult, SearchError>;

    /// Returns the engine's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}

/// Checks that a search can produce a meaningful move on `grid`.
pub fn check_searchable(grid: &Grid) -> Result<(), SearchError> {
    if let Some(winner) = grid.winner() {
        return Err(SearchError::GameOver { winner });
    }
    if grid.is_full() {
        return Err(SearchError::NoEmptyCells);
    }
    Ok(())
}
