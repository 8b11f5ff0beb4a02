use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}
impl Mark {
    pub fn other(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    /// Mark owned by the computer for one match. X always moves first.
    pub fn computer(computer_moves_first: bool) -> Mark {
        if computer_moves_first {
            Mark::X
        } else {
            Mark::O
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single grid square: empty or holding one mark.
pub type Cell = Option<Mark>;

// Helpers
pub fn row_of(cell: usize) -> usize {
    cell / 3
}
pub fn col_of(cell: usize) -> usize {
    cell % 3
}
pub fn cell_at(row: usize, col: usize) -> Option<usize> {
    if row < 3 && col < 3 {
        Some(row * 3 + col)
    } else {
        None
    }
}

/// Human-friendly coordinate, columns `a..c` and rows `1..3` from the top.
pub fn cell_to_coord(cell: usize) -> String {
    let c = (b'a' + col_of(cell) as u8) as char;
    let r = (b'1' + row_of(cell) as u8) as char;
    format!("{c}{r}")
}

pub fn coord_to_cell(c: &str) -> Option<usize> {
    let b = c.as_bytes();
    if b.len() != 2 {
        return None;
    }
    let f = b[0].to_ascii_lowercase();
    let r = b[1];
    if !(b'a'..=b'c').contains(&f) || !(b'1'..=b'3').contains(&r) {
        return None;
    }
    cell_at((r - b'1') as usize, (f - b'a') as usize)
}
