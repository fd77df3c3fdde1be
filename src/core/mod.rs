//! Core engine types: players, configuration, RNG, errors.
//!
//! Nothing here knows about tiles or dragons beyond the constants the
//! configuration has to check against.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{GameConfig, PenaltyRule, MAX_PLAYERS, MIN_CAVES};
pub use error::{ConfigError, GameError, SnapshotError};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
