//! Tournament Runner for tic-tac-toe engines
//!
//! This crate provides infrastructure for:
//! - Playing a game against an engine, one search per computer turn
//! - Running matches between engines and tallying node counts
//! - Comparing minimax and alpha-beta on a single grid
//!
//! # Usage
//!
//! ```bash
//! # Run a match between alpha-beta and the random engine
//! cargo run -p tournament -- match alphabeta random --games 100
//!
//! # Compare both searches on one grid
//! cargo run -p tournament -- compare "XX.OO...."
//! ```

pub mod compare;
pub mod config;
pub mod game;
mod match_runner;
mod results;

pub use compare::compare_searches;
pub use config::{load_config, ConfigError, TournamentConfig};
pub use game::{Game, GameError, Status, TurnReport};
pub use match_runner::*;
pub use results::*;
