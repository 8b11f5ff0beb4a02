//! Minimax and alpha-beta compared on every reachable position
//!
//! Both searches run at the full depth bound for each non-terminal grid
//! and for both player assignments.

use rayon::prelude::*;

use classical_engine::{search_alphabeta, search_minimax};
use ttt_core::{reachable_positions, Grid};

fn searchable_positions() -> Vec<Grid> {
    reachable_positions()
        .into_iter()
        .filter(|g| !g.is_terminal())
        .collect()
}

#[test]
fn alphabeta_matches_minimax_everywhere() {
    let positions = searchable_positions();
    assert_eq!(positions.len(), 4_520);

    let pruned: usize = positions
        .par_iter()
        .map(|g| {
            let mut pruned = 0;
            for first in [true, false] {
                let mm = search_minimax(first, g).unwrap();
                let ab = search_alphabeta(first, g).unwrap();

                assert!(
                    mm.best_move == ab.best_move,
                    "Move mismatch for '{}' (computer first: {}): minimax {}, alpha-beta {}",
                    g.to_compact(),
                    first,
                    mm.best_move,
                    ab.best_move
                );
                assert_eq!(mm.score, ab.score, "score mismatch for '{}'", g.to_compact());
                assert!(
                    ab.nodes <= mm.nodes,
                    "Alpha-beta visited more nodes for '{}': {} > {}",
                    g.to_compact(),
                    ab.nodes,
                    mm.nodes
                );
                if ab.nodes < mm.nodes {
                    pruned += 1;
                }
            }
            pruned
        })
        .sum();

    assert!(pruned > 0, "no cutoff fired on any position");
}

#[test]
fn chosen_cell_is_empty_and_nodes_positive() {
    searchable_positions().par_iter().for_each(|g| {
        for first in [true, false] {
            for result in [search_minimax(first, g), search_alphabeta(first, g)] {
                let result = result.unwrap();
                assert!(g.is_empty_cell(result.best_move), "'{}'", g.to_compact());
                assert!(result.nodes >= 1);
            }
        }
    });
}
