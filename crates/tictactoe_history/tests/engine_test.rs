//! Tests for engine operations, history and time-travel.

use tictactoe_history::{
    Board, GameEngine, IgnoreReason, JumpError, MoveLabel, Placement, Player, Position, Square,
    Status,
};

fn play(engine: &mut GameEngine, moves: &[Position]) {
    for pos in moves {
        assert!(
            engine.apply_move(*pos).is_placed(),
            "move {pos} should be accepted"
        );
    }
}

#[test]
fn test_double_click_places_once() {
    let mut engine = GameEngine::new();
    engine.apply_move(Position::Center);
    let board_after_first = *engine.current_board();

    let second = engine.apply_move(Position::Center);

    assert_eq!(
        second,
        Placement::Ignored(IgnoreReason::Occupied(Position::Center))
    );
    assert_eq!(engine.current_board(), &board_after_first);
    assert_eq!(engine.current_board().occupied_count(), 1);
    assert_eq!(engine.history_len(), 2);
}

#[test]
fn test_move_after_win_is_ignored() {
    let mut engine = GameEngine::new();
    play(
        &mut engine,
        &[
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ],
    );
    assert_eq!(engine.status(), Status::Winner(Player::X));
    let board = *engine.current_board();
    let len = engine.history_len();

    assert_eq!(
        engine.apply_move(Position::BottomLeft),
        Placement::Ignored(IgnoreReason::GameOver)
    );
    assert_eq!(engine.history_len(), len);
    assert_eq!(engine.current_board(), &board);
}

#[test]
fn test_move_on_earlier_step_of_won_game_is_accepted() {
    let mut engine = GameEngine::new();
    play(
        &mut engine,
        &[
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ],
    );
    engine.jump_to(4).unwrap();
    assert_eq!(engine.status(), Status::NextPlayer(Player::X));
    assert!(engine.apply_move(Position::BottomRight).is_placed());
    assert_eq!(engine.history_len(), 6);
    assert_eq!(engine.status(), Status::NextPlayer(Player::O));
}

#[test]
fn test_jump_then_move_truncates_future() {
    let mut engine = GameEngine::new();
    play(
        &mut engine,
        &[
            Position::Center,
            Position::TopLeft,
            Position::BottomRight,
            Position::TopRight,
            Position::BottomLeft,
        ],
    );
    assert_eq!(engine.history_len(), 6);

    engine.jump_to(2).unwrap();
    assert_eq!(engine.history_len(), 6);
    assert_eq!(engine.next_player(), Player::X);

    let placement = engine.apply_move(Position::MiddleLeft);

    assert_eq!(
        placement,
        Placement::Placed {
            step: 3,
            mark: Player::X,
            position: Position::MiddleLeft
        }
    );
    assert_eq!(engine.history_len(), 4);
    assert_eq!(engine.current_step(), 3);
    let board = engine.current_board();
    assert_eq!(board.get(Position::MiddleLeft), Square::Occupied(Player::X));
    assert_eq!(board.get(Position::BottomRight), Square::Empty);
    assert_eq!(board.get(Position::TopRight), Square::Empty);
    assert_eq!(board.occupied_count(), 3);
}

#[test]
fn test_jump_out_of_range_leaves_state() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[Position::Center, Position::TopLeft]);
    let before = engine.state().clone();

    assert_eq!(
        engine.jump_to(3),
        Err(JumpError::StepOutOfRange { step: 3, len: 3 })
    );
    assert_eq!(engine.state(), &before);
}

#[test]
fn test_new_game_preserves_sort_order() {
    let mut engine = GameEngine::new();
    engine.toggle_sort_order();
    assert!(engine.sort_ascending());
    play(
        &mut engine,
        &[Position::Center, Position::TopLeft, Position::BottomRight],
    );

    engine.new_game();

    assert_eq!(engine.history_len(), 1);
    assert_eq!(engine.current_step(), 0);
    assert!(engine.sort_ascending());
    assert_eq!(engine.current_board(), &Board::new());
    assert_eq!(engine.status(), Status::NextPlayer(Player::X));
}

#[test]
fn test_move_list_orders_are_reverses() {
    let mut engine = GameEngine::with_sort_order(true);
    play(
        &mut engine,
        &[Position::Center, Position::TopLeft, Position::BottomRight],
    );
    engine.jump_to(1).unwrap();

    let ascending = engine.ordered_move_list();
    engine.toggle_sort_order();
    let descending = engine.ordered_move_list();

    let steps: Vec<usize> = ascending.iter().map(|e| e.step()).collect();
    assert_eq!(steps, vec![0, 1, 2, 3]);

    let mut reversed = descending.clone();
    reversed.reverse();
    assert_eq!(reversed, ascending);

    let mut descending_steps: Vec<usize> = descending.iter().map(|e| e.step()).collect();
    descending_steps.sort_unstable();
    assert_eq!(descending_steps, steps);
}

#[test]
fn test_move_list_labels_and_highlight() {
    let mut engine = GameEngine::with_sort_order(true);
    play(&mut engine, &[Position::TopRight, Position::BottomLeft]);
    engine.jump_to(1).unwrap();

    let entries = engine.ordered_move_list();
    assert_eq!(entries[0].label(), MoveLabel::Start);
    assert_eq!(entries[0].description(), "Go to game start");
    assert_eq!(entries[1].label().to_string(), "X (3, 1)");
    assert_eq!(entries[2].label().to_string(), "O (1, 3)");
    assert_eq!(entries[2].description(), "Go to move #2");

    let current: Vec<usize> = entries
        .iter()
        .filter(|e| e.is_current())
        .map(|e| e.step())
        .collect();
    assert_eq!(current, vec![1]);
}

#[test]
fn test_default_list_is_newest_first() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[Position::Center]);
    let steps: Vec<usize> = engine.ordered_move_list().iter().map(|e| e.step()).collect();
    assert_eq!(steps, vec![1, 0]);
}

#[test]
fn test_draw_status() {
    let mut engine = GameEngine::new();
    // X O X / X O O / O X X
    play(
        &mut engine,
        &[
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::Center,
            Position::MiddleLeft,
            Position::MiddleRight,
            Position::BottomCenter,
            Position::BottomLeft,
            Position::BottomRight,
        ],
    );
    assert_eq!(engine.status(), Status::Draw);
    assert_eq!(engine.status().to_string(), "Draw: Cat's game");
    assert_eq!(engine.winning_line(), None);
}

#[test]
fn test_winning_line_follows_displayed_step() {
    let mut engine = GameEngine::new();
    play(
        &mut engine,
        &[
            Position::TopLeft,
            Position::Center,
            Position::MiddleLeft,
            Position::TopRight,
            Position::BottomLeft,
        ],
    );
    assert_eq!(engine.winning_line(), Some([0, 3, 6]));

    engine.jump_to(3).unwrap();
    assert_eq!(engine.winning_line(), None);
    assert_eq!(engine.status(), Status::NextPlayer(Player::O));
}
