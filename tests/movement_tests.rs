//! End-to-end movement scenarios on real boards.

use fiery_dragons::board::{Board, CaveId, Dragon, DragonId, Position};
use fiery_dragons::core::{GameConfig, PlayerId};
use fiery_dragons::movement::{MoveRule, Movement};

fn place(board: &mut Board, id: u32, pos: Position, remaining: u32) -> Dragon {
    let mut dragon = Dragon::new(DragonId(id), PlayerId(0), CaveId(0), remaining);
    dragon.move_to(pos, board);
    dragon
}

/// Tile 5, ten steps to go, a three-step card: plain move along the track.
#[test]
fn test_forward_along_track() {
    let mut board = Board::new(&GameConfig::new(2).with_animal_count(4)).unwrap();
    let mut dragon = place(&mut board, 0, Position::Volcano(5), 10);

    let outcome =
        Movement::resolve(MoveRule::Forward, &dragon, 3, &board).execute(&mut dragon, &mut board);

    assert_eq!(outcome.destination, Some(Position::Volcano(8)));
    assert_eq!(outcome.remaining_steps, 7);
    assert!(!outcome.end_turn);
    assert!(!outcome.end_game);
    assert!(board.is_vacant(Position::Volcano(5)));
    assert!(!board.is_vacant(Position::Volcano(8)));
}

/// Same dragon with exactly three steps left and its home cave beside tile 7.
#[test]
fn test_forward_exact_count_wins() {
    let config = GameConfig::new(2).with_cave_positions(vec![-1, -8, -13, -19]);
    let mut board = Board::new(&config).unwrap();
    let mut dragon = Dragon::new(DragonId(1), PlayerId(1), CaveId(1), 3);
    dragon.move_to(Position::Volcano(5), &mut board);

    let outcome =
        Movement::resolve(MoveRule::Forward, &dragon, 3, &board).execute(&mut dragon, &mut board);

    assert!(outcome.end_game);
    assert_eq!(outcome.destination, Some(Position::Cave(dragon.home())));
    assert_eq!(dragon.position(), Some(Position::Cave(CaveId(1))));
    assert_eq!(board.encode(Position::Cave(CaveId(1))), -8);
    assert_eq!(dragon.remaining_steps(), 0);
}

#[test]
fn test_forward_overshoot_ends_turn() {
    let mut board = Board::new(&GameConfig::new(2)).unwrap();
    let mut dragon = place(&mut board, 0, Position::Volcano(5), 2);

    let outcome =
        Movement::resolve(MoveRule::Forward, &dragon, 3, &board).execute(&mut dragon, &mut board);

    assert_eq!(outcome.destination, None);
    assert!(outcome.end_turn);
    assert!(!outcome.end_game);
    assert_eq!(dragon.position(), Some(Position::Volcano(5)));
    assert_eq!(dragon.remaining_steps(), 2);
}

#[test]
fn test_blocked_forward_keeps_dragon_in_place() {
    let mut board = Board::new(&GameConfig::new(2)).unwrap();
    let _blocker = place(&mut board, 1, Position::Volcano(8), 10);
    let mut dragon = place(&mut board, 0, Position::Volcano(5), 10);

    let outcome =
        Movement::resolve(MoveRule::Forward, &dragon, 3, &board).execute(&mut dragon, &mut board);

    assert!(outcome.end_turn);
    assert_eq!(dragon.position(), Some(Position::Volcano(5)));
    assert_eq!(dragon.remaining_steps(), 10);
    assert_eq!(board.occupied_count(), 2);
}

#[test]
fn test_plain_backward_blocked_vs_sliding() {
    let mut board = Board::new(&GameConfig::new(2)).unwrap();
    let _blocker = place(&mut board, 1, Position::Volcano(3), 10);
    let dragon = place(&mut board, 0, Position::Volcano(5), 10);

    let mut plain = dragon.clone();
    let mut plain_board = board.clone();
    let outcome = Movement::resolve(MoveRule::Backward, &plain, 2, &plain_board)
        .execute(&mut plain, &mut plain_board);
    assert!(outcome.end_turn);
    assert_eq!(plain.position(), Some(Position::Volcano(5)));

    let mut sliding = dragon;
    let outcome = Movement::resolve(MoveRule::SpecialBackward, &sliding, 2, &board)
        .execute(&mut sliding, &mut board);
    assert!(!outcome.end_turn);
    assert_eq!(outcome.destination, Some(Position::Volcano(2)));
    // Two steps back plus one for the tile skipped.
    assert_eq!(sliding.remaining_steps(), 13);
}

/// Every tile of a four-tile track is taken: sliding back finds nowhere.
#[test]
fn test_sliding_backward_pigeonhole() {
    let mut board = Board::new(&GameConfig::new(4).with_track_size(4)).unwrap();
    let mut dragons: Vec<_> = (0..4)
        .map(|t| place(&mut board, t, Position::Volcano(t as usize), 10))
        .collect();

    let dragon = &mut dragons[1];
    let outcome = Movement::resolve(MoveRule::SpecialBackward, dragon, 1, &board)
        .execute(dragon, &mut board);

    assert_eq!(outcome.destination, None);
    assert!(outcome.end_turn);
    assert_eq!(board.occupied_count(), 4);
}

#[test]
fn test_teleport_then_leave_cave() {
    let mut board = Board::new(&GameConfig::new(2)).unwrap();
    let mut dragon = place(&mut board, 0, Position::Volcano(5), 10);

    let outcome = Movement::resolve(MoveRule::TeleportToCave, &dragon, 1, &board)
        .execute(&mut dragon, &mut board);
    assert_eq!(outcome.destination, Some(Position::Cave(CaveId(0))));
    // Five tiles back to the cave's tile, plus one to step inside.
    assert_eq!(dragon.remaining_steps(), 16);

    let outcome =
        Movement::resolve(MoveRule::Forward, &dragon, 2, &board).execute(&mut dragon, &mut board);
    assert_eq!(outcome.destination, Some(Position::Volcano(1)));
    assert_eq!(dragon.remaining_steps(), 14);
    assert!(board.is_vacant(Position::Cave(CaveId(0))));
}

#[test]
fn test_teleport_skips_occupied_caves() {
    let mut board = Board::new(&GameConfig::new(2)).unwrap();
    let _home = place(&mut board, 1, Position::Cave(CaveId(1)), 10);
    let mut dragon = place(&mut board, 0, Position::Volcano(8), 10);

    let outcome = Movement::resolve(MoveRule::TeleportToCave, &dragon, 1, &board)
        .execute(&mut dragon, &mut board);

    assert_eq!(outcome.destination, Some(Position::Cave(CaveId(0))));
    assert_eq!(dragon.remaining_steps(), 10 + 8 + 1);
}

#[test]
fn test_lifted_dragon_does_not_move() {
    let mut board = Board::new(&GameConfig::new(2)).unwrap();
    let mut dragon = place(&mut board, 0, Position::Volcano(5), 10);
    dragon.lift(&mut board);

    for rule in [
        MoveRule::Forward,
        MoveRule::Backward,
        MoveRule::SpecialBackward,
        MoveRule::TeleportToCave,
    ] {
        let outcome =
            Movement::resolve(rule, &dragon, 1, &board).execute(&mut dragon, &mut board);
        assert_eq!(outcome.destination, None);
        assert_eq!(dragon.position(), None);
    }
    assert_eq!(board.occupied_count(), 0);
}
