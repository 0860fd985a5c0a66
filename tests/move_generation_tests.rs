
use chess_rules::{
    game::GameState,
    types::{MoveStatus, Position, Side},
};
use test_utils::*;

#[test]
fn test_starting_position_has_exactly_twenty_first_moves() {
    let game = GameState::new();
    let mut moves: Vec<(Position, Position)> = Vec::new();

    for rank in 0..8 {
        for file in 0..8 {
            let origin = Position::new(rank, file);
            for target in game.legal_targets(origin) {
                moves.push((origin, target));
            }
        }
    }

    assert_eq!(moves.len(), 20);

    // No duplicates
    let mut deduped = moves.clone();
    deduped.sort_by_key(|(from, to)| (from.rank, from.file, to.rank, to.file));
    deduped.dedup();
    assert_eq!(deduped.len(), 20);

    // Every pawn has a single and a double push, every knight two hops
    for file in ["a", "b", "c", "d", "e", "f", "g", "h"] {
        assert_eq!(
            targets_of(&game, &format!("{file}2")),
            vec![format!("{file}3"), format!("{file}4")]
        );
    }
    assert_eq!(targets_of(&game, "b1"), vec!["a3", "c3"]);
    assert_eq!(targets_of(&game, "g1"), vec!["f3", "h3"]);
}

#[test]
fn test_rook_on_open_board_reaches_fourteen_squares() {
    let game = game_from("8/8/8/8/3R4/8/8/8 w - - 0 1");
    let targets = game.legal_targets(sq("d4"));

    assert_eq!(targets.len(), 14);
    for square in ["d1", "d8", "a4", "h4", "d5", "e4"] {
        assert!(targets.contains(&sq(square)), "missing {square}");
    }
    assert!(!targets.contains(&sq("d4")));
}

#[test]
fn test_rook_ray_includes_enemy_blocker_and_stops() {
    let game = game_from("8/3p4/8/8/3R4/8/8/8 w - - 0 1");
    let targets = game.legal_targets(sq("d4"));

    assert!(targets.contains(&sq("d7")), "capture square excluded");
    assert!(!targets.contains(&sq("d8")), "ray continued past blocker");
    assert_eq!(targets.len(), 13);
}

#[test]
fn test_rook_ray_excludes_friendly_blocker_and_stops() {
    let game = game_from("8/3P4/8/8/3R4/8/8/8 w - - 0 1");
    let targets = game.legal_targets(sq("d4"));

    assert!(!targets.contains(&sq("d7")));
    assert!(!targets.contains(&sq("d8")));
    assert_eq!(targets.len(), 12);
}

#[test]
fn test_bishop_and_queen_ray_counts_on_open_board() {
    let bishop = game_from("8/8/8/8/3B4/8/8/8 w - - 0 1");
    assert_eq!(bishop.legal_targets(sq("d4")).len(), 13);

    let queen = game_from("8/8/8/8/3Q4/8/8/8 w - - 0 1");
    assert_eq!(queen.legal_targets(sq("d4")).len(), 27);
}

#[test]
fn test_knight_in_corner_has_two_moves() {
    let game = game_from("8/8/8/8/8/8/8/N7 w - - 0 1");
    assert_eq!(targets_of(&game, "a1"), vec!["b3", "c2"]);
}

#[test]
fn test_knight_jumps_over_occupants() {
    let game = GameState::new();
    // b1 is boxed in by pawns yet reaches a3 and c3
    assert_eq!(targets_of(&game, "b1"), vec!["a3", "c3"]);
}

#[test]
fn test_king_in_open_middle_has_eight_moves() {
    let game = game_from("8/8/8/8/4K3/8/8/8 w - - 0 1");
    assert_eq!(game.legal_targets(sq("e4")).len(), 8);
}

#[test]
fn test_king_can_capture_adjacent_enemy() {
    let game = game_from("8/8/8/8/4Kp2/8/8/8 w - - 0 1");
    assert!(game.legal_targets(sq("e4")).contains(&sq("f4")));
}

#[test]
fn test_pawn_forward_moves_are_blocked_by_any_occupant() {
    // Enemy directly ahead: no forward moves at all
    let game = game_from("8/8/8/8/8/4p3/4P3/8 w - - 0 1");
    assert!(game.legal_targets(sq("e2")).is_empty());

    // Enemy two ahead: single push only, no jump
    let game = game_from("8/8/8/8/4p3/8/4P3/8 w - - 0 1");
    assert_eq!(targets_of(&game, "e2"), vec!["e3"]);
}

#[test]
fn test_pawn_double_push_only_from_start_rank() {
    let game = game_from("8/8/8/8/8/4P3/8/8 w - - 0 1");
    assert_eq!(targets_of(&game, "e3"), vec!["e4"]);
}

#[test]
fn test_pawn_diagonal_requires_an_enemy() {
    // Empty diagonals are geometric candidates but not legal moves
    let game = game_from("8/8/8/8/8/8/4P3/8 w - - 0 1");
    assert_eq!(targets_of(&game, "e2"), vec!["e3", "e4"]);

    // An enemy on d3 makes that diagonal a capture
    let game = game_from("8/8/8/8/8/3p4/4P3/8 w - - 0 1");
    assert_eq!(targets_of(&game, "e2"), vec!["d3", "e3", "e4"]);

    // A friend on d3 does not
    let game = game_from("8/8/8/8/8/3P4/4P3/8 w - - 0 1");
    assert_eq!(targets_of(&game, "e2"), vec!["e3", "e4"]);
}

#[test]
fn test_black_pawns_move_down_the_board() {
    let game = game_from("8/4p3/8/8/8/8/8/8 b - - 0 1");
    assert_eq!(targets_of(&game, "e7"), vec!["e5", "e6"]);
}

#[test]
fn test_wrong_turn_and_empty_square_yield_no_targets() {
    let game = GameState::new();

    // Black piece while White is to move
    assert!(game.legal_targets(sq("e7")).is_empty());
    // Empty square
    assert!(game.legal_targets(sq("e4")).is_empty());
    // Off-board coordinates
    assert!(game.legal_targets(Position::new(-1, 3)).is_empty());
    assert!(game.legal_targets(Position::new(3, 8)).is_empty());
}

#[test]
fn test_occupancy_validator_verdicts() {
    let game = GameState::new();

    // Empty square
    assert_eq!(
        game.board.validate_move(Side::White, sq("e4")),
        MoveStatus::Valid
    );
    // Enemy-occupied
    assert_eq!(
        game.board.validate_move(Side::White, sq("e7")),
        MoveStatus::ValidStop
    );
    // Friendly-occupied
    assert_eq!(
        game.board.validate_move(Side::White, sq("e2")),
        MoveStatus::Invalid
    );
    // Off-board
    assert_eq!(
        game.board.validate_move(Side::White, Position::new(8, 0)),
        MoveStatus::Invalid
    );
    assert_eq!(
        game.board.validate_move(Side::White, Position::new(0, -1)),
        MoveStatus::Invalid
    );
}
