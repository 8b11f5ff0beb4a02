//! Error types for grid parsing and search preconditions

use thiserror::Error;

use crate::types::Mark;

/// Reasons a search refuses to run on the grid it was handed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    #[error("grid has no empty cells")]
    NoEmptyCells,

    #[error("game already over: {winner} has three in a row")]
    GameOver { winner: Mark },

    #[error("engine chose cell {cell}, which is not an empty cell")]
    IllegalMove { cell: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseGridError {
    #[error("expected 9 cells, got {got}")]
    WrongLength { got: usize },

    #[error("invalid character '{character}' at position {position} (expected X, O, '.', '_' or '-')")]
    InvalidCharacter { character: char, position: usize },
}
