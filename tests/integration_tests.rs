//! Integration tests for the drop controller and game session

use std::time::Duration;

use tui_well::core::{Board, ScoreRecord};
use tui_well::engine::{
    drop_piece, play_game, Deadline, DropController, DropOutcome, DropState, NullRenderer,
    ScriptedInput, Session,
};
use tui_well::types::{InputEvent, PieceKind, FIRST_PLAYABLE_COL, LAST_PLAYABLE_COL};

const INTERVAL: Duration = Duration::from_secs(1);

fn fill_row_except(board: &mut Board, row: i8, gap: &[i8]) {
    for col in FIRST_PLAYABLE_COL..=LAST_PLAYABLE_COL {
        if !gap.contains(&col) {
            board.set(row, col, PieceKind::Z);
        }
    }
}

#[test]
fn test_blocked_spawn_is_game_over() {
    let mut board = Board::new();
    for row in 0..4 {
        fill_row_except(&mut board, row, &[]);
    }
    let before = board.clone();

    let outcome = drop_piece(
        &mut board,
        PieceKind::T,
        INTERVAL,
        &mut ScriptedInput::default(),
        &mut NullRenderer,
    )
    .unwrap();

    assert_eq!(outcome, DropOutcome::GameOver);
    assert_eq!(board, before);
}

#[test]
fn test_i_piece_with_gravity_only_lands_on_the_floor() {
    let mut board = Board::new();
    let outcome = drop_piece(
        &mut board,
        PieceKind::I,
        INTERVAL,
        &mut ScriptedInput::default(),
        &mut NullRenderer,
    )
    .unwrap();

    assert_eq!(outcome, DropOutcome::Locked { row: 19 });
    for col in 7..=10 {
        assert_eq!(board.get(21, col), Some(Some(PieceKind::I)), "col {col}");
    }
    assert_eq!(board.occupied_count(), 4);
}

#[test]
fn test_lateral_moves_shift_before_landing() {
    let mut board = Board::new();
    let mut input = ScriptedInput::from_events([
        InputEvent::MoveLeft,
        InputEvent::MoveLeft,
        InputEvent::MoveLeft,
    ]);
    let outcome = drop_piece(&mut board, PieceKind::O, INTERVAL, &mut input, &mut NullRenderer).unwrap();

    // O occupies box columns 1-2, so anchor 4 puts it on columns 5-6.
    assert_eq!(outcome, DropOutcome::Locked { row: 19 });
    assert!(board.is_occupied(21, 5));
    assert!(board.is_occupied(20, 6));
    assert_eq!(board.occupied_count(), 4);
}

#[test]
fn test_move_into_wall_is_ignored() {
    let mut board = Board::new();
    let mut input = ScriptedInput::from_events(std::iter::repeat(InputEvent::MoveLeft).take(20));
    drop_piece(&mut board, PieceKind::I, INTERVAL, &mut input, &mut NullRenderer).unwrap();

    for col in FIRST_PLAYABLE_COL..FIRST_PLAYABLE_COL + 4 {
        assert!(board.is_occupied(21, col));
    }
    assert!(!board.is_occupied(21, 0));
}

#[test]
fn test_only_gravity_restarts_the_interval() {
    let mut board = Board::new();
    let mut renderer = NullRenderer;
    let mut controller = DropController::spawn(&board, PieceKind::T, &mut renderer).unwrap();

    for event in [InputEvent::MoveLeft, InputEvent::MoveRight, InputEvent::Rotate] {
        let deadline = controller.tick(&mut board, Some(event), &mut renderer).unwrap();
        assert_eq!(deadline, Deadline::Keep, "{event:?}");
    }

    let row = controller.piece().row;
    let deadline = controller
        .tick(&mut board, Some(InputEvent::SoftDrop), &mut renderer)
        .unwrap();
    assert_eq!(deadline, Deadline::Restart);
    assert_eq!(controller.piece().row, row + 1);

    let deadline = controller.tick(&mut board, None, &mut renderer).unwrap();
    assert_eq!(deadline, Deadline::Restart);
    assert_eq!(controller.piece().row, row + 2);
}

#[test]
fn test_pause_suspends_gravity() {
    let mut board = Board::new();
    let mut renderer = NullRenderer;
    let mut controller = DropController::spawn(&board, PieceKind::L, &mut renderer).unwrap();
    let start = controller.piece();

    controller
        .tick(&mut board, Some(InputEvent::Pause), &mut renderer)
        .unwrap();
    assert_eq!(controller.state(), DropState::Paused);

    for event in [None, Some(InputEvent::SoftDrop), Some(InputEvent::MoveLeft)] {
        controller.tick(&mut board, event, &mut renderer).unwrap();
    }
    assert_eq!(controller.piece(), start);

    let deadline = controller
        .tick(&mut board, Some(InputEvent::Pause), &mut renderer)
        .unwrap();
    assert_eq!(deadline, Deadline::Restart);
    assert_eq!(controller.state(), DropState::Falling);
}

#[test]
fn test_dropped_piece_completes_a_row() {
    // Seed 3 starts with an I piece.
    let mut session = Session::new(0, 3);
    assert_eq!(session.upcoming(), PieceKind::I);
    fill_row_except(session.board_mut(), 21, &[8]);

    // Upright I falls down column 8.
    let mut input = ScriptedInput::from_events([InputEvent::Rotate]);
    let outcome = session.play_piece(&mut input, &mut NullRenderer).unwrap();

    assert_eq!(outcome, DropOutcome::Locked { row: 18 });
    let record = session.record();
    assert_eq!(record.lines, 1);
    assert_eq!(record.points, 10);
    // The three minos above the cleared row moved down one.
    for row in 19..=21 {
        assert!(session.board().is_occupied(row, 8));
    }
    assert_eq!(session.board().occupied_count(), 3);
}

#[test]
fn test_quit_ends_the_game_with_the_current_record() {
    let mut input = ScriptedInput::from_events([InputEvent::Quit]);
    let record = play_game(2, 7, &mut input, &mut NullRenderer).unwrap();
    assert_eq!(record, ScoreRecord::new(2));
}

#[test]
fn test_gravity_only_game_tops_out() {
    let mut session = Session::new(0, 11);
    let record = session
        .play(&mut ScriptedInput::default(), &mut NullRenderer)
        .unwrap();

    assert_eq!(record.points, 0);
    assert!(session.pieces_locked() > 0);
    // Nothing moved sideways, so nothing ever left the middle columns.
    for row in 0..22 {
        assert!(!session.board().is_occupied(row, 1));
        assert!(!session.board().is_occupied(row, 15));
    }
}
