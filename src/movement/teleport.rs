//! Spirit-card teleport back to the nearest empty cave.

use super::Movement;
use crate::board::{wrap, Board, Position};

/// Scan backward from the tile behind `origin` for a tile whose cave is
/// empty. Every tile probed costs one step, and entering the cave costs one
/// more. The scan stops after one lap, so it probes at most `track_size - 1`
/// tiles. Dragons already in a cave stay put.
pub(super) fn destination(m: &mut Movement, origin: Position, board: &Board) -> Option<Position> {
    let Position::Volcano(start) = origin else {
        return None;
    };

    let n = board.track_size();
    let mut tile = wrap(start as i64 - 1, n);
    m.remaining_steps = m.remaining_steps.saturating_add(1);

    while tile != start {
        if let Some(cave) = board.cave_at(tile) {
            let target = Position::Cave(cave);
            if board.is_vacant(target) {
                m.remaining_steps = m.remaining_steps.saturating_add(1);
                return Some(target);
            }
        }
        tile = wrap(tile as i64 - 1, n);
        m.remaining_steps = m.remaining_steps.saturating_add(1);
    }
    None
}
