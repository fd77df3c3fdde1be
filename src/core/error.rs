//! Error types for the setup and persistence boundary.
//!
//! Rule outcomes (blocked moves, overshoots, exhausted searches) are not
//! errors; they come back as `MoveOutcome` values. These enums cover inputs
//! that never reach the rules: bad configurations, inconsistent snapshots,
//! and illegal reveals.

use thiserror::Error;

/// A `GameConfig` that cannot produce a playable board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("track size {track_size} is not a positive multiple of the zone width {zone_width}")]
    TrackNotZoned { track_size: usize, zone_width: usize },

    #[error("animal count must be between 1 and {max}, got {got}")]
    AnimalCount { got: usize, max: usize },

    #[error("track size {track_size} is not divisible by animal count {animal_count}")]
    TrackNotDivisible { track_size: usize, animal_count: usize },

    #[error("at least one player is required")]
    NoPlayers,

    #[error("at most {max} players are supported, got {got}")]
    TooManyPlayers { got: usize, max: usize },

    #[error("each player needs at least one dragon")]
    NoDragons,

    #[error("{caves} caves do not fit on a track of {track_size} tiles")]
    TooManyCaves { caves: usize, track_size: usize },

    #[error("expected {expected} cave positions, got {got}")]
    CaveCount { expected: usize, got: usize },

    #[error("cave position {0} is not a cave encoding inside the track")]
    CavePosition(i32),

    #[error("two caves share tile {0}")]
    DuplicateCave(usize),
}

/// A snapshot that cannot be restored.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("expected {expected} {what} records, got {got}")]
    RecordCount {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("tile {tile} cave link {stored:?} does not match the rebuilt board ({rebuilt:?})")]
    CaveLink {
        tile: usize,
        stored: Option<u32>,
        rebuilt: Option<u32>,
    },

    #[error("dragon {dragon} has undecodable position {position}")]
    Position { dragon: u32, position: i32 },

    #[error("dragon {dragon} would share position {position} with another dragon")]
    Collision { dragon: u32, position: i32 },

    #[error("current player {0} is out of range")]
    CurrentPlayer(u8),

    #[error("{recorded} cards recorded as revealed this turn, but {face_up} are face up")]
    CardsRevealed { recorded: usize, face_up: usize },

    #[error("every card is face up in an unfinished game")]
    TableExhausted,

    #[error("winner {0} is not a dragon in this game")]
    Winner(u32),

    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary encoding failed: {0}")]
    Binary(#[from] bincode::Error),
}

/// An illegal request made to a running game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("the game is already over")]
    GameOver,

    #[error("card index {index} is out of range for {len} cards")]
    CardOutOfRange { index: usize, len: usize },

    #[error("card {0} is already face up")]
    AlreadyRevealed(usize),
}
