//! Static evaluation of cut-off positions.

use ttt_core::{Grid, Mark, LINES};

/// Score for a line the side owns with a single empty cell left.
const THREAT: i32 = 10;
/// Score for a line the side owns with two empty cells left.
const OPEN: i32 = 1;

/// Scores a non-terminal grid from the computer's perspective.
///
/// Only consulted when the search reaches the depth bound; won and drawn
/// grids are scored by the search itself.
pub trait Evaluator: Send + Sync {
    fn evaluate(&self, grid: &Grid, computer: Mark) -> i32;
}

/// Open-line potential: +10 per computer-only line one move from completion,
/// +1 per computer-only line with two cells open, mirrored for the opponent.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenLines;

impl Evaluator for OpenLines {
    fn evaluate(&self, grid: &Grid, computer: Mark) -> i32 {
        let mut score = 0i32;

        for line in &LINES {
            let (mine, theirs, empty) = tally(grid, line, computer);
            let potential = match empty {
                1 => THREAT,
                2 => OPEN,
                _ => 0,
            };
            if mine > 0 && theirs == 0 {
                score += potential;
            } else if theirs > 0 && mine == 0 {
                score -= potential;
            }
        }

        score
    }
}

/// Line count: lines holding only computer marks minus lines holding only
/// opponent marks, regardless of how many cells remain open.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineCount;

impl Evaluator for LineCount {
    fn evaluate(&self, grid: &Grid, computer: Mark) -> i32 {
        LINES
            .iter()
            .map(|line| match tally(grid, line, computer) {
                (m, 0, _) if m > 0 => 1,
                (0, t, _) if t > 0 => -1,
                _ => 0,
            })
            .sum()
    }
}

/// (computer marks, opponent marks, empty cells) on one line.
#[inline]
fn tally(grid: &Grid, line: &[usize; 3], computer: Mark) -> (u8, u8, u8) {
    line.iter()
        .fold((0, 0, 0), |(m, t, e), &idx| match grid.cell(idx) {
            Some(mark) if mark == computer => (m + 1, t, e),
            Some(_) => (m, t + 1, e),
            None => (m, t, e + 1),
        })
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
