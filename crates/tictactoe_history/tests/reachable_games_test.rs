//! Walks every reachable game and checks the engine at each node.

use tictactoe_history::invariants::{EngineInvariants, InvariantSet};
use tictactoe_history::{GameEngine, Placement, Player, Position, Square, Status};

/// Nodes in the full game tree, counting the empty board.
const REACHABLE_GAMES: usize = 549_946;

fn expected_player(step: usize) -> Player {
    if step % 2 == 0 { Player::X } else { Player::O }
}

fn check_node(engine: &GameEngine) {
    let step = engine.current_step();
    assert!(EngineInvariants::check_all(engine.state()).is_ok());
    assert_eq!(engine.history_len(), step + 1);
    assert_eq!(engine.next_player(), expected_player(step));

    match engine.status() {
        Status::NextPlayer(player) => {
            assert_eq!(player, expected_player(step));
            assert!(!engine.valid_moves().is_empty());
        }
        Status::Winner(player) => {
            assert_eq!(player, expected_player(step + 1));
            assert!(engine.valid_moves().is_empty());
        }
        Status::Draw => {
            assert_eq!(step, 9);
            assert!(engine.valid_moves().is_empty());
        }
    }

    let mut flipped = engine.clone();
    flipped.toggle_sort_order();
    let mut reversed = flipped.ordered_move_list();
    reversed.reverse();
    assert_eq!(reversed, engine.ordered_move_list());
}

/// Jumps halfway back, plays the first free cell and checks the tail is cut.
fn check_truncation(engine: &GameEngine) {
    let step = engine.current_step();
    if step == 0 {
        return;
    }
    let target = step / 2;

    let mut rewound = engine.clone();
    rewound.jump_to(target).unwrap();
    assert_eq!(rewound.history_len(), engine.history_len());
    assert_eq!(rewound.next_player(), expected_player(target));

    let free = Position::ALL
        .into_iter()
        .find(|pos| rewound.current_board().get(*pos) == Square::Empty)
        .unwrap();
    assert_eq!(
        rewound.apply_move(free),
        Placement::Placed {
            step: target + 1,
            mark: expected_player(target),
            position: free,
        }
    );
    assert_eq!(rewound.history_len(), target + 2);
    assert_eq!(
        rewound.state().history()[..=target],
        engine.state().history()[..=target]
    );
    assert!(EngineInvariants::check_all(rewound.state()).is_ok());
}

fn walk(engine: &GameEngine, visited: &mut usize) {
    *visited += 1;
    check_node(engine);
    check_truncation(engine);

    for pos in engine.valid_moves() {
        let mut child = engine.clone();
        assert!(child.apply_move(pos).is_placed());
        walk(&child, visited);
    }
}

#[test]
fn test_every_reachable_game() {
    let mut visited = 0;
    walk(&GameEngine::new(), &mut visited);
    assert_eq!(visited, REACHABLE_GAMES);
}
