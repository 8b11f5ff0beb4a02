//! Match state for one human-versus-engine game
//!
//! Owns the grid history and the player assignment, asks an engine for a
//! move once per computer turn and applies it.

use std::fmt;

use rand::Rng;
use thiserror::Error;
use tracing::debug;
use ttt_core::{Engine, Grid, Mark, SearchError};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("cell {cell} is out of range (must be 0-8)")]
    OutOfRange { cell: usize },

    #[error("cell {cell} is already occupied")]
    Occupied { cell: usize },

    #[error("game already over")]
    GameOver,

    #[error("it is not the human's turn")]
    NotHumanTurn,

    #[error("it is not the computer's turn")]
    NotComputerTurn,

    #[error("no move #{index} in history (last is #{last})")]
    NoSuchMove { index: usize, last: usize },

    #[error("search failed: {0}")]
    Search(#[from] SearchError),
}

/// What the status line shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Winner(Mark),
    Draw,
    Next(Mark),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Winner(m) => write!(f, "Winner: {m}"),
            Status::Draw => write!(f, "Draw!"),
            Status::Next(m) => write!(f, "Next player: {m}"),
        }
    }
}

/// One computer move and the work it took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub cell: usize,
    pub mark: Mark,
    pub score: i32,
    pub nodes: u64,
}

#[derive(Debug, Clone)]
pub struct Game {
    history: Vec<Grid>,
    current_move: usize,
    computer_moves_first: bool,
    last_turn: Option<TurnReport>,
}

impl Game {
    pub fn new(computer_moves_first: bool) -> Self {
        Self {
            history: vec![Grid::empty()],
            current_move: 0,
            computer_moves_first,
            last_turn: None,
        }
    }

    /// New game with the first mover drawn at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.gen_bool(0.5))
    }

    pub fn current(&self) -> &Grid {
        &self.history[self.current_move]
    }

    pub fn current_move(&self) -> usize {
        self.current_move
    }

    pub fn history(&self) -> &[Grid] {
        &self.history
    }

    pub fn computer_moves_first(&self) -> bool {
        self.computer_moves_first
    }

    pub fn computer_mark(&self) -> Mark {
        Mark::computer(self.computer_moves_first)
    }

    pub fn human_mark(&self) -> Mark {
        self.computer_mark().other()
    }

    /// X moves on even move numbers.
    pub fn next_mark(&self) -> Mark {
        if self.current_move % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }

    pub fn is_computer_turn(&self) -> bool {
        self.next_mark() == self.computer_mark()
    }

    pub fn status(&self) -> Status {
        let grid = self.current();
        if let Some(winner) = grid.winner() {
            Status::Winner(winner)
        } else if grid.is_full() {
            Status::Draw
        } else {
            Status::Next(self.next_mark())
        }
    }

    pub fn is_over(&self) -> bool {
        !matches!(self.status(), Status::Next(_))
    }

    /// Most recent computer move, if any since the last restart or jump.
    pub fn last_turn(&self) -> Option<TurnReport> {
        self.last_turn
    }

    pub fn play_human(&mut self, cell: usize) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if self.is_computer_turn() {
            return Err(GameError::NotHumanTurn);
        }
        self.commit(cell, self.human_mark())
    }

    /// Runs one search on the current grid and applies the chosen cell.
    pub fn play_computer(&mut self, engine: &mut dyn Engine) -> Result<TurnReport, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if !self.is_computer_turn() {
            return Err(GameError::NotComputerTurn);
        }

        let result = engine.search(self.current(), self.computer_moves_first)?;
        let mark = self.computer_mark();
        self.commit(result.best_move, mark)?;

        let report = TurnReport {
            cell: result.best_move,
            mark,
            score: result.score,
            nodes: result.nodes,
        };
        debug!(
            engine = engine.name(),
            cell = report.cell,
            nodes = report.nodes,
            "computer moved"
        );
        self.last_turn = Some(report);
        Ok(report)
    }

    /// Rewinds to an earlier position. The next move played discards the
    /// moves after it. Clears the last computer turn.
    pub fn jump_to(&mut self, index: usize) -> Result<(), GameError> {
        let last = self.history.len() - 1;
        if index > last {
            return Err(GameError::NoSuchMove { index, last });
        }
        self.current_move = index;
        self.last_turn = None;
        Ok(())
    }

    /// Clears the history and draws a new first mover.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = Self::random(rng);
    }

    fn commit(&mut self, cell: usize, mark: Mark) -> Result<(), GameError> {
        if cell >= 9 {
            return Err(GameError::OutOfRange { cell });
        }
        let grid = self.current();
        if !grid.is_empty_cell(cell) {
            return Err(GameError::Occupied { cell });
        }

        let next = grid.with_mark(cell, mark);
        self.history.truncate(self.current_move + 1);
        self.history.push(next);
        self.current_move += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
