//! Forward movement for matching animal cards.

use super::Movement;
use crate::board::{wrap, Board, Position};

/// Forward destination from `origin`.
///
/// On the track, the step count is compared with the steps still needed:
/// more overshoots and ends the turn, fewer moves along the track, and an
/// exact match enters the cave beside the last tile walked and wins.
/// Leaving a cave lands on the tile `step - 1` past the cave's own tile.
pub(super) fn destination(m: &mut Movement, origin: Position, board: &Board) -> Option<Position> {
    let n = board.track_size();
    let step = m.step;

    if step > m.remaining_steps {
        m.end_turn = true;
        return None;
    }

    match origin {
        Position::Volcano(tile) if step < m.remaining_steps => {
            m.remaining_steps -= step;
            Some(Position::Volcano(wrap(tile as i64 + step as i64, n)))
        }
        Position::Volcano(tile) => {
            let last = wrap(tile as i64 + step as i64 - 1, n);
            match board.cave_at(last) {
                Some(cave) => {
                    m.remaining_steps = 0;
                    m.end_game = true;
                    Some(Position::Cave(cave))
                }
                // No cave to finish in; treated like a blocked landing.
                None => {
                    m.end_turn = true;
                    None
                }
            }
        }
        Position::Cave(cave) => {
            let exit = board.cave_tile(cave);
            m.remaining_steps -= step;
            Some(Position::Volcano(wrap(exit as i64 + step as i64 - 1, n)))
        }
    }
}
