//! # fiery-dragons
//!
//! Rules engine for a Fiery Dragons style race game: dragons leave their
//! home caves, run a lap of a circular volcano track by matching chit cards,
//! and win by walking back into their own cave with an exact count.
//!
//! ## Architecture
//!
//! - **Tagged positions**: a dragon stands on `Position::Volcano(tile)` or
//!   `Position::Cave(id)`. The signed integer form (`-(tile + 1)` for a
//!   cave) only appears at the snapshot boundary.
//!
//! - **Two-phase movement**: [`Movement::resolve`] computes a destination
//!   from the current board; [`Movement::execute`] commits it or aborts.
//!   [`Dragon::move_to`] is the only place occupancy changes.
//!
//! - **Seeded setup**: tile animals and card order come from named
//!   ChaCha8 streams, so a seed rebuilds the same board and deck.
//!
//! ## Modules
//!
//! - `core`: players, RNG, configuration, errors
//! - `board`: track, caves, animals, positions, dragons
//! - `movement`: the forward, backward, sliding and teleport rules
//! - `cards`: chit cards and the standard deck
//! - `game`: turn coordination, snapshots, self-play

pub mod board;
pub mod cards;
pub mod core;
pub mod game;
pub mod movement;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameConfig, GameError, GameRng, PenaltyRule, PlayerId, PlayerMap, SnapshotError,
};

pub use crate::board::{Animal, Board, CaveId, Dragon, DragonId, Position};

pub use crate::cards::ChitCard;

pub use crate::movement::{MoveOutcome, MoveRule, Movement};

pub use crate::game::{
    play_out, DragonPicker, FirstEligible, Game, GameSnapshot, PlayoutReport, TurnOutcome,
};
