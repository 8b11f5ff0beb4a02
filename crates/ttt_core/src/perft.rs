use std::collections::HashSet;

use crate::board::Grid;

/// Pure perft leaf count.
/// Counts move sequences of exactly `depth` plies from `grid` under legal play,
/// with X and O alternating from `grid.side_to_move()`. Play stops at a won or
/// full grid, so finished games contribute nothing to deeper counts.
pub fn perft(grid: &Grid, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    if grid.winner().is_some() {
        return 0;
    }

    let mark = grid.side_to_move();
    grid.empty_cells()
        .map(|idx| perft(&grid.with_mark(idx, mark), depth - 1))
        .sum()
}

/// Total number of nodes in the game tree rooted at `grid`, root included.
pub fn game_tree_size(grid: &Grid) -> u64 {
    if grid.is_terminal() {
        return 1;
    }
    let mark = grid.side_to_move();
    1 + grid
        .empty_cells()
        .map(|idx| game_tree_size(&grid.with_mark(idx, mark)))
        .sum::<u64>()
}

/// Every distinct grid reachable from the empty grid by legal play,
/// the empty grid included. Sorted by number of marks, then by compact form.
pub fn reachable_positions() -> Vec<Grid> {
    fn walk(grid: Grid, seen: &mut HashSet<Grid>) {
        if !seen.insert(grid) || grid.is_terminal() {
            return;
        }
        let mark = grid.side_to_move();
        for idx in grid.empty_cells() {
            walk(grid.with_mark(idx, mark), seen);
        }
    }

    let mut seen = HashSet::with_capacity(6000);
    walk(Grid::empty(), &mut seen);

    let mut out: Vec<Grid> = seen.into_iter().collect();
    out.sort_by_key(|g| (9 - g.empty_count(), g.to_compact()));
    out
}
