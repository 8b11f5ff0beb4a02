//! Depth-bounded minimax, with and without alpha-beta pruning

use ttt_core::{check_searchable, Grid, Mark, SearchError, SearchResult, LOSS, WIN};

use crate::eval::{Evaluator, OpenLines};

/// Plies explored before the evaluator stands in for exact lookahead.
/// Nine plies cover every 3x3 game, so play at this bound is perfect.
pub const DEPTH_BOUND: u8 = 9;

/// Which tree search to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Minimax,
    AlphaBeta,
}

impl Algorithm {
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Minimax => "minimax",
            Algorithm::AlphaBeta => "alpha-beta",
        }
    }
}

/// Whose turn it is inside the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Computer to move
    Max,
    /// Opponent to move
    Min,
}

impl Mode {
    fn flip(self) -> Mode {
        match self {
            Mode::Max => Mode::Min,
            Mode::Min => Mode::Max,
        }
    }

    fn mark(self, computer: Mark) -> Mark {
        match self {
            Mode::Max => computer,
            Mode::Min => computer.other(),
        }
    }

    /// Starting value of the running extremum.
    fn worst(self) -> i32 {
        match self {
            Mode::Max => LOSS,
            Mode::Min => WIN,
        }
    }

    fn better(self, a: i32, b: i32) -> i32 {
        match self {
            Mode::Max => a.max(b),
            Mode::Min => a.min(b),
        }
    }
}

/// Fixed inputs shared by every node of one search.
struct Context<'a, E: ?Sized> {
    computer: Mark,
    bound: u8,
    evaluator: &'a E,
}

/// Runs minimax with open-line evaluation at the depth bound.
pub fn search_minimax(computer_moves_first: bool, grid: &Grid) -> Result<SearchResult, SearchError> {
    search_with(Algorithm::Minimax, computer_moves_first, grid, &OpenLines)
}

/// Runs alpha-beta with open-line evaluation at the depth bound.
pub fn search_alphabeta(
    computer_moves_first: bool,
    grid: &Grid,
) -> Result<SearchResult, SearchError> {
    search_with(Algorithm::AlphaBeta, computer_moves_first, grid, &OpenLines)
}

/// Searches `grid` for the computer's move with the given algorithm and evaluator.
///
/// # Errors
/// `SearchError::NoEmptyCells` on a full grid, `SearchError::GameOver` when a
/// line is already complete.
pub fn search_with<E: Evaluator + ?Sized>(
    algorithm: Algorithm,
    computer_moves_first: bool,
    grid: &Grid,
    evaluator: &E,
) -> Result<SearchResult, SearchError> {
    let result = search_to(algorithm, computer_moves_first, grid, DEPTH_BOUND, evaluator)?;
    tracing::debug!(
        algorithm = algorithm.label(),
        grid = %grid.to_compact(),
        best_move = result.best_move,
        score = result.score,
        nodes = result.nodes,
        "search finished"
    );
    Ok(result)
}

/// Search with an explicit depth bound.
pub(crate) fn search_to<E: Evaluator + ?Sized>(
    algorithm: Algorithm,
    computer_moves_first: bool,
    grid: &Grid,
    bound: u8,
    evaluator: &E,
) -> Result<SearchResult, SearchError> {
    check_searchable(grid)?;

    let ctx = Context {
        computer: Mark::computer(computer_moves_first),
        bound,
        evaluator,
    };

    match algorithm {
        Algorithm::Minimax => root_minimax(grid, &ctx),
        Algorithm::AlphaBeta => root_alphabeta(grid, &ctx),
    }
}

/// Tries every empty cell in ascending order. A later cell only replaces the
/// recorded best on a strictly greater value, so the first cell wins ties.
fn root_minimax<E: Evaluator + ?Sized>(
    grid: &Grid,
    ctx: &Context<'_, E>,
) -> Result<SearchResult, SearchError> {
    let mut best: Option<(usize, i32)> = None;
    let mut nodes = 0u64;

    for idx in grid.empty_cells() {
        let child = grid.with_mark(idx, ctx.computer);
        let (score, n) = minimax(&child, Mode::Min, 1, ctx);
        nodes += n;

        if best.map_or(true, |(_, b)| score > b) {
            best = Some((idx, score));
        }
    }

    let (best_move, score) = best.ok_or(SearchError::NoEmptyCells)?;
    Ok(SearchResult {
        best_move,
        score,
        nodes,
    })
}

/// Alpha is carried across root children rather than reset for each one.
/// The best move starts on the first empty cell and moves only when a child
/// beats alpha strictly.
fn root_alphabeta<E: Evaluator + ?Sized>(
    grid: &Grid,
    ctx: &Context<'_, E>,
) -> Result<SearchResult, SearchError> {
    let mut best_move = grid.empty_cells().next().ok_or(SearchError::NoEmptyCells)?;
    let mut alpha = LOSS;
    let beta = WIN;
    let mut nodes = 0u64;

    for idx in grid.empty_cells() {
        let child = grid.with_mark(idx, ctx.computer);
        let (score, n) = alphabeta(&child, Mode::Min, 1, alpha, beta, ctx);
        nodes += n;

        if score > alpha {
            alpha = score;
            best_move = idx;
        }
    }

    Ok(SearchResult {
        best_move,
        score: alpha,
        nodes,
    })
}

/// Value of a node that needs no further expansion: a win, a loss, a draw,
/// or a position at the depth bound.
#[inline]
fn leaf_value<E: Evaluator + ?Sized>(grid: &Grid, depth: u8, ctx: &Context<'_, E>) -> Option<i32> {
    if let Some(winner) = grid.winner() {
        return Some(if winner == ctx.computer { WIN } else { LOSS });
    }
    if grid.is_full() {
        return Some(0);
    }
    if depth >= ctx.bound {
        return Some(ctx.evaluator.evaluate(grid, ctx.computer));
    }
    None
}

/// Returns (value, nodes visited in this subtree including `grid`).
fn minimax<E: Evaluator + ?Sized>(
    grid: &Grid,
    mode: Mode,
    depth: u8,
    ctx: &Context<'_, E>,
) -> (i32, u64) {
    let mut nodes = 1u64;
    if let Some(value) = leaf_value(grid, depth, ctx) {
        return (value, nodes);
    }

    let mark = mode.mark(ctx.computer);
    let mut best = mode.worst();

    for idx in grid.empty_cells() {
        let (value, n) = minimax(&grid.with_mark(idx, mark), mode.flip(), depth + 1, ctx);
        nodes += n;
        best = mode.better(best, value);
    }

    (best, nodes)
}

/// Fail-soft alpha-beta. Bounds travel by value; pruned children are neither
/// visited nor counted.
fn alphabeta<E: Evaluator + ?Sized>(
    grid: &Grid,
    mode: Mode,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    ctx: &Context<'_, E>,
) -> (i32, u64) {
    let mut nodes = 1u64;
    if let Some(value) = leaf_value(grid, depth, ctx) {
        return (value, nodes);
    }

    let mark = mode.mark(ctx.computer);
    let mut best = mode.worst();

    for idx in grid.empty_cells() {
        let (value, n) = alphabeta(
            &grid.with_mark(idx, mark),
            mode.flip(),
            depth + 1,
            alpha,
            beta,
            ctx,
        );
        nodes += n;
        best = mode.better(best, value);

        match mode {
            Mode::Max => {
                if best >= beta {
                    return (best, nodes); // Beta cutoff
                }
                alpha = alpha.max(best);
            }
            Mode::Min => {
                if best <= alpha {
                    return (best, nodes); // Alpha cutoff
                }
                beta = beta.min(best);
            }
        }
    }

    (best, nodes)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
