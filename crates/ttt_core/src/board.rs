use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseGridError;
use crate::types::*;

/// The 8 winning lines: rows top to bottom, columns left to right, then
/// the main and anti diagonal. Terminal detection scans them in this order.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A 3x3 grid. Cell `i` sits at row `i / 3`, column `i % 3`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    pub cells: [Cell; 9],
}

impl Grid {
    pub fn empty() -> Self {
        Grid { cells: [None; 9] }
    }

    #[inline]
    pub fn cell(&self, idx: usize) -> Cell {
        self.cells[idx]
    }

    #[inline]
    pub fn is_empty_cell(&self, idx: usize) -> bool {
        self.cells.get(idx).is_some_and(|c| c.is_none())
    }

    /// Returns a copy with `mark` placed on `idx`. The receiver is untouched.
    #[inline]
    pub fn with_mark(&self, idx: usize, mark: Mark) -> Grid {
        let mut next = *self;
        next.cells[idx] = Some(mark);
        next
    }

    pub fn set(&mut self, idx: usize, mark: Mark) {
        self.cells[idx] = Some(mark);
    }

    /// Empty cell indices in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| i)
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&c| c == Some(mark)).count()
    }

    /// Mark of the first complete line found, in `LINES` order.
    pub fn winner(&self) -> Option<Mark> {
        LINES.iter().find_map(|&[a, b, c]| match self.cells[a] {
            Some(m) if self.cells[b] == Some(m) && self.cells[c] == Some(m) => Some(m),
            _ => None,
        })
    }

    /// Number of complete lines of either mark.
    pub fn winning_lines(&self) -> usize {
        LINES
            .iter()
            .filter(|&&[a, b, c]| {
                self.cells[a].is_some()
                    && self.cells[a] == self.cells[b]
                    && self.cells[b] == self.cells[c]
            })
            .count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    pub fn is_draw(&self) -> bool {
        self.winner().is_none() && self.is_full()
    }

    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Mark to move under normal alternation with X first.
    pub fn side_to_move(&self) -> Mark {
        if self.count(Mark::X) > self.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }

    /// Compact nine-character form, `.` for empty cells.
    pub fn to_compact(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.map_or('.', Mark::symbol))
            .collect()
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    /// Accepts nine cells of `X`, `O` or one of `.`, `_`, `-`. Whitespace and
    /// `/` row separators are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; 9];
        let mut n = 0;
        for (pos, ch) in s.chars().enumerate() {
            if ch.is_whitespace() || ch == '/' {
                continue;
            }
            let cell = match ch {
                'X' | 'x' => Some(Mark::X),
                'O' | 'o' => Some(Mark::O),
                '.' | '_' | '-' => None,
                _ => {
                    return Err(ParseGridError::InvalidCharacter {
                        character: ch,
                        position: pos,
                    })
                }
            };
            if n == 9 {
                return Err(ParseGridError::WrongLength { got: n + 1 });
            }
            cells[n] = cell;
            n += 1;
        }
        if n != 9 {
            return Err(ParseGridError::WrongLength { got: n });
        }
        Ok(Grid { cells })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            let line: Vec<String> = (0..3)
                .map(|col| {
                    self.cells[row * 3 + col]
                        .map_or_else(|| (row * 3 + col).to_string(), |m| m.to_string())
                })
                .collect();
            writeln!(f, " {} ", line.join(" | "))?;
            if row < 2 {
                writeln!(f, "---+---+---")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
