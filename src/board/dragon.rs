//! Dragon pieces and the move-commit path.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::position::{CaveId, Position};
use super::track::Board;
use crate::core::{GameConfig, PlayerId};

/// Stable dragon identity: `seat * dragons_per_player + k`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DragonId(pub u32);

impl DragonId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for DragonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Dragon({})", self.0)
    }
}

/// Home cave for the `index`-th dragon under `config`.
///
/// Dragons take the cave with their own index. On an evenly spaced board
/// with exactly two dragons, the second one starts across the track in
/// cave 2 instead. Explicit cave lists are taken as given.
#[must_use]
pub fn home_cave(index: usize, config: &GameConfig) -> CaveId {
    if config.cave_positions.is_none() && config.dragon_count() == 2 && index == 1 {
        CaveId(2)
    } else {
        CaveId(index as u32)
    }
}

/// A dragon piece.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dragon {
    id: DragonId,
    owner: PlayerId,
    home: CaveId,
    position: Option<Position>,
    remaining_steps: u32,
}

impl Dragon {
    /// A dragon that has not been placed yet.
    pub fn new(id: DragonId, owner: PlayerId, home: CaveId, remaining_steps: u32) -> Self {
        Self {
            id,
            owner,
            home,
            position: None,
            remaining_steps,
        }
    }

    #[must_use]
    pub fn id(&self) -> DragonId {
        self.id
    }

    #[must_use]
    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    #[must_use]
    pub fn home(&self) -> CaveId {
        self.home
    }

    /// Current position, or `None` while lifted off the board.
    #[must_use]
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// Steps still needed to get back into a cave and win.
    #[must_use]
    pub fn remaining_steps(&self) -> u32 {
        self.remaining_steps
    }

    pub fn set_remaining_steps(&mut self, steps: u32) {
        self.remaining_steps = steps;
    }

    /// Commit a move: vacate the current place (if any), occupy
    /// `destination`, and remember it.
    ///
    /// Does not check that `destination` is vacant; movement rules do that
    /// before committing.
    pub fn move_to(&mut self, destination: Position, board: &mut Board) {
        if let Some(current) = self.position {
            board.set_occupied(current, false);
        }
        board.set_occupied(destination, true);
        trace!(dragon = %self.id, from = ?self.position, to = %destination, "commit");
        self.position = Some(destination);
    }

    /// Take the dragon off the board, vacating its place.
    pub fn lift(&mut self, board: &mut Board) -> Option<Position> {
        let current = self.position.take();
        if let Some(pos) = current {
            board.set_occupied(pos, false);
        }
        current
    }
}
