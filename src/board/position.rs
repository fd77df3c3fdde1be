//! Where a dragon stands.
//!
//! Inside the engine a position is a tagged enum, so a cave can never be
//! mistaken for a tile. Snapshots and UI callers use the signed form
//! instead: `p >= 0` is volcano tile `p`, and `p < 0` is the cave bound to
//! tile `-p - 1`. Converting between the two needs the board, because only
//! the board knows which cave sits next to which tile (see
//! [`Board::encode`](super::Board::encode) and
//! [`Board::decode`](super::Board::decode)).

use serde::{Deserialize, Serialize};

/// Index of a cave, in board layout order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CaveId(pub u32);

impl CaveId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CaveId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cave({})", self.0)
    }
}

/// A place a dragon can occupy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// On the volcano tile with this track index.
    Volcano(usize),
    /// Inside this cave.
    Cave(CaveId),
}

impl Position {
    #[must_use]
    pub const fn is_cave(self) -> bool {
        matches!(self, Position::Cave(_))
    }

    /// The tile index, when on the track.
    #[must_use]
    pub const fn tile(self) -> Option<usize> {
        match self {
            Position::Volcano(tile) => Some(tile),
            Position::Cave(_) => None,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::Volcano(tile) => write!(f, "tile {}", tile),
            Position::Cave(cave) => write!(f, "{}", cave),
        }
    }
}

/// Wrap a possibly negative track offset onto `0..track_size`.
#[must_use]
pub fn wrap(index: i64, track_size: usize) -> usize {
    index.rem_euclid(track_size as i64) as usize
}
