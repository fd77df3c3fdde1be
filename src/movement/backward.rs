//! Backward movement for pirate cards, plain and sliding.

use super::Movement;
use crate::board::{wrap, Board, Position};

/// Backward destination from `origin`. Each step back adds one to the
/// steps still needed. A dragon inside a cave is safe and does not move.
pub(super) fn destination(m: &mut Movement, origin: Position, board: &Board) -> Option<Position> {
    match origin {
        Position::Volcano(tile) => {
            m.remaining_steps = m.remaining_steps.saturating_add(m.step);
            Some(Position::Volcano(wrap(tile as i64 - m.step as i64, board.track_size())))
        }
        Position::Cave(_) => None,
    }
}

/// Sliding validity check: starting at `destination`, walk back one tile
/// at a time until a free tile turns up, charging a step per tile skipped.
///
/// Gives up on reaching the dragon's own tile, which only happens when
/// every other tile is taken.
pub(super) fn settle(m: &mut Movement, destination: Position, board: &Board) -> Option<Position> {
    let (Position::Volcano(mut candidate), Some(Position::Volcano(origin))) =
        (destination, m.origin)
    else {
        return board.is_vacant(destination).then_some(destination);
    };

    let n = board.track_size();
    while candidate != origin {
        if board.is_vacant(Position::Volcano(candidate)) {
            return Some(Position::Volcano(candidate));
        }
        candidate = wrap(candidate as i64 - 1, n);
        m.remaining_steps = m.remaining_steps.saturating_add(1);
    }
    None
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, CaveId, Dragon, DragonId, Position};
    use crate::core::{GameConfig, PlayerId};
    use crate::movement::{MoveRule, Movement};

    fn place(board: &mut Board, id: u32, pos: Position, remaining: u32) -> Dragon {
        let mut dragon = Dragon::new(DragonId(id), PlayerId(id as u8), CaveId(id), remaining);
        dragon.move_to(pos, board);
        dragon
    }

    #[test]
    fn test_backward_wraps_past_zero() {
        let mut board = Board::new(&GameConfig::new(2)).unwrap();
        let dragon = place(&mut board, 0, Position::Volcano(1), 5);
        let m = Movement::resolve(MoveRule::Backward, &dragon, 2, &board);

        assert_eq!(m.destination(), Some(Position::Volcano(23)));
        assert_eq!(m.remaining_steps(), 7);
    }

    #[test]
    fn test_backward_from_cave_is_a_no_op() {
        let mut board = Board::new(&GameConfig::new(2)).unwrap();
        let dragon = place(&mut board, 0, Position::Cave(CaveId(0)), 26);

        for rule in [MoveRule::Backward, MoveRule::SpecialBackward] {
            let m = Movement::resolve(rule, &dragon, 2, &board);
            assert_eq!(m.destination(), None);
            assert!(!m.ends_turn());
            assert_eq!(m.remaining_steps(), 26);
        }
    }

    #[test]
    fn test_special_backward_slides_past_blockers() {
        let mut board = Board::new(&GameConfig::new(3)).unwrap();
        let mut mover = place(&mut board, 0, Position::Volcano(10), 8);
        place(&mut board, 1, Position::Volcano(8), 8);
        place(&mut board, 2, Position::Volcano(7), 8);

        let outcome = Movement::resolve(MoveRule::SpecialBackward, &mover, 2, &board)
            .execute(&mut mover, &mut board);

        assert_eq!(outcome.destination, Some(Position::Volcano(6)));
        assert_eq!(mover.remaining_steps(), 12);
        assert!(!outcome.end_turn);
        assert_eq!(board.occupied_count(), 3);
    }

    #[test]
    fn test_special_backward_gives_up_on_full_track() {
        // Four tiles, four dragons: nowhere to go.
        let config = GameConfig::new(4).with_track_size(4);
        let mut board = Board::new(&config).unwrap();
        let mut dragons: Vec<Dragon> = (0..4)
            .map(|i| place(&mut board, i, Position::Volcano(i as usize), 6))
            .collect();

        let mover = &mut dragons[2];
        let outcome = Movement::resolve(MoveRule::SpecialBackward, mover, 1, &board)
            .execute(mover, &mut board);

        assert_eq!(outcome.destination, None);
        assert!(outcome.end_turn);
        assert_eq!(mover.position(), Some(Position::Volcano(2)));
        assert_eq!(mover.remaining_steps(), 6);
        assert_eq!(board.occupied_count(), 4);
    }

    #[test]
    fn test_special_backward_full_lap_lands_on_self() {
        // A step of exactly one lap points back at the dragon's own tile.
        let mut board = Board::new(&GameConfig::new(2).with_track_size(12).with_animal_count(4))
            .unwrap();
        let mut dragon = place(&mut board, 0, Position::Volcano(3), 4);

        let outcome = Movement::resolve(MoveRule::SpecialBackward, &dragon, 12, &board)
            .execute(&mut dragon, &mut board);

        assert_eq!(outcome.destination, None);
        assert!(outcome.end_turn);
    }

    #[test]
    fn test_backward_saturates_remaining_steps() {
        let mut board = Board::new(&GameConfig::new(2)).unwrap();
        let _blocker = place(&mut board, 1, Position::Volcano(3), 8);
        let mut dragon = place(&mut board, 0, Position::Volcano(5), u32::MAX - 1);

        let outcome = Movement::resolve(MoveRule::SpecialBackward, &dragon, 2, &board)
            .execute(&mut dragon, &mut board);

        assert_eq!(outcome.destination, Some(Position::Volcano(2)));
        assert_eq!(dragon.remaining_steps(), u32::MAX);
    }
}
