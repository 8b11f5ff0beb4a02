use super::*;
use classical_engine::ClassicalEngine;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_computer_first_takes_x() {
    let mut game = Game::new(true);
    assert_eq!(game.computer_mark(), Mark::X);
    assert!(game.is_computer_turn());
    assert_eq!(game.play_human(0), Err(GameError::NotHumanTurn));

    let mut engine = ClassicalEngine::alphabeta();
    let report = game.play_computer(&mut engine).unwrap();
    assert_eq!(report.mark, Mark::X);
    assert_eq!(game.current().cell(report.cell), Some(Mark::X));
    assert!(report.nodes > 0);
    assert_eq!(game.last_turn(), Some(report));
    assert_eq!(game.status(), Status::Next(Mark::O));
}

#[test]
fn test_human_move_validation() {
    let mut game = Game::new(false);
    assert_eq!(game.play_human(9), Err(GameError::OutOfRange { cell: 9 }));
    game.play_human(4).unwrap();
    assert_eq!(game.current().cell(4), Some(Mark::X));
    assert!(game.is_computer_turn());

    let mut engine = ClassicalEngine::minimax();
    let report = game.play_computer(&mut engine).unwrap();
    assert_ne!(report.cell, 4);
    assert_eq!(
        game.play_human(report.cell),
        Err(GameError::Occupied { cell: report.cell })
    );
    assert_eq!(
        game.play_computer(&mut engine),
        Err(GameError::NotComputerTurn)
    );
}

#[test]
fn test_jump_to_truncates_future_on_next_move() {
    let mut game = Game::new(false);
    let mut engine = ClassicalEngine::alphabeta();
    game.play_human(0).unwrap();
    game.play_computer(&mut engine).unwrap();
    game.play_human(8).unwrap();
    assert_eq!(game.history().len(), 4);

    game.jump_to(1).unwrap();
    assert_eq!(game.current_move(), 1);
    assert!(game.is_computer_turn());
    assert_eq!(game.history().len(), 4);

    game.play_computer(&mut engine).unwrap();
    assert_eq!(game.history().len(), 3);
    assert_eq!(game.current_move(), 2);

    assert_eq!(
        game.jump_to(7),
        Err(GameError::NoSuchMove { index: 7, last: 2 })
    );
}

#[test]
fn test_jump_to_clears_last_turn() {
    let mut game = Game::new(true);
    let mut engine = ClassicalEngine::alphabeta();
    game.play_computer(&mut engine).unwrap();
    assert!(game.last_turn().is_some());

    game.jump_to(0).unwrap();
    assert_eq!(*game.current(), Grid::empty());
    assert_eq!(game.last_turn(), None);

    // A failed jump leaves a fresh report in place.
    game.play_computer(&mut engine).unwrap();
    assert!(game.jump_to(5).is_err());
    assert!(game.last_turn().is_some());
}

#[test]
fn test_computer_never_loses_to_scripted_human() {
    // Human (X) always takes the lowest free cell.
    let mut game = Game::new(false);
    let mut engine = ClassicalEngine::alphabeta();
    while !game.is_over() {
        if game.is_computer_turn() {
            game.play_computer(&mut engine).unwrap();
        } else {
            let cell = game.current().empty_cells().next().unwrap();
            game.play_human(cell).unwrap();
        }
    }
    assert_ne!(game.status(), Status::Winner(Mark::X));
    assert_eq!(game.play_human(0), Err(GameError::GameOver));
}

#[test]
fn test_restart_clears_history() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut game = Game::new(false);
    game.play_human(4).unwrap();
    game.restart(&mut rng);
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.current_move(), 0);
    assert_eq!(*game.current(), Grid::empty());
    assert_eq!(game.last_turn(), None);
}

#[test]
fn test_status_display() {
    assert_eq!(Status::Winner(Mark::O).to_string(), "Winner: O");
    assert_eq!(Status::Draw.to_string(), "Draw!");
    assert_eq!(Status::Next(Mark::X).to_string(), "Next player: X");
}
