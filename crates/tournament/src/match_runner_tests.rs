use super::*;
use classical_engine::ClassicalEngine;
use random_engine::RandomEngine;
use ttt_core::SearchResult;

/// Answers cell 0 whatever the grid holds.
struct FirstCell;

impl Engine for FirstCell {
    fn search(&mut self, _grid: &Grid, _first: bool) -> Result<SearchResult, SearchError> {
        Ok(SearchResult {
            best_move: 0,
            score: 0,
            nodes: 1,
        })
    }

    fn name(&self) -> &str {
        "FirstCell"
    }
}

#[test]
fn test_self_play_is_all_draws() {
    let mut engine1 = ClassicalEngine::alphabeta();
    let mut engine2 = ClassicalEngine::minimax();

    let config = MatchConfig {
        num_games: 2,
        verbose: false,
        ..Default::default()
    };

    let runner = MatchRunner::new(config);
    let result = runner.run_match(&mut engine1, &mut engine2).unwrap();

    assert_eq!(result.total_games(), 2);
    assert_eq!(result.draws, 2);
    assert_eq!(result.engine1_moves + result.engine2_moves, 18);
    // Alpha-beta prunes, so it searched less than minimax.
    assert!(result.engine1_nodes < result.engine2_nodes);
}

#[test]
fn test_search_never_loses_to_random() {
    let mut search = ClassicalEngine::alphabeta();
    let mut random = RandomEngine::seeded(11);

    let result = quick_match(&mut search, &mut random, 20, Some(5)).unwrap();

    assert_eq!(result.total_games(), 20);
    assert_eq!(result.losses, 0);
    assert_eq!(result.engine2_nodes, result.engine2_moves as u64);
}

#[test]
fn test_random_first_mover_assignment() {
    let mut a = RandomEngine::seeded(1);
    let mut b = RandomEngine::seeded(2);

    let config = MatchConfig {
        num_games: 30,
        alternate_first: false,
        seed: Some(9),
        verbose: false,
    };
    let result = MatchRunner::new(config).run_match(&mut a, &mut b).unwrap();
    assert_eq!(result.total_games(), 30);
}

#[test]
fn test_play_game_records_both_sides() {
    let runner = MatchRunner::new(MatchConfig::default());
    let mut x = ClassicalEngine::alphabeta();
    let mut o = ClassicalEngine::alphabeta();

    let record = runner.play_game(&mut x, &mut o).unwrap();
    assert_eq!(record.result, GameResult::Draw);
    assert!(record.final_grid.is_draw());
    assert_eq!(record.x_moves, 5);
    assert_eq!(record.o_moves, 4);
}

#[test]
fn test_play_game_rejects_occupied_cell() {
    let runner = MatchRunner::new(MatchConfig::default());
    let mut x = FirstCell;
    let mut o = FirstCell;

    let err = runner.play_game(&mut x, &mut o).unwrap_err();
    assert_eq!(err, SearchError::IllegalMove { cell: 0 });
}

#[test]
fn test_run_match_stops_on_illegal_move() {
    let mut search = ClassicalEngine::alphabeta();
    let mut cheat = FirstCell;

    let result = quick_match(&mut search, &mut cheat, 4, Some(3));
    assert!(matches!(result, Err(SearchError::IllegalMove { cell: 0 })));
}
