//! Game configuration.
//!
//! The setup layer describes a game with `GameConfig` and calls
//! [`GameConfig::validate`] before anything is built. The board and rules
//! assume a validated configuration and do not re-check it.
//!
//! ```
//! use fiery_dragons::core::{GameConfig, PenaltyRule};
//!
//! let config = GameConfig::new(3)
//!     .with_seed(99)
//!     .with_track_size(24)
//!     .with_penalty_rule(PenaltyRule::Backward);
//!
//! assert!(config.validate().is_ok());
//! assert_eq!(config.cave_count(), 4);
//! assert_eq!(config.cave_tiles().unwrap(), vec![0, 6, 12, 18]);
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::board::animal::REGULAR_ANIMALS;
use crate::board::track::ZONE_WIDTH;

/// Fewer caves than this are never laid out, whatever the player count.
pub const MIN_CAVES: usize = 4;

/// Seats are stored as `u8`.
pub const MAX_PLAYERS: usize = u8::MAX as usize;

/// Which backward rule a pirate card applies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PenaltyRule {
    /// Move back; a blocked landing tile ends the turn.
    Backward,
    /// Move back; a blocked landing tile pushes the dragon further back to
    /// the first free tile.
    #[default]
    SpecialBackward,
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of volcano tiles on the circular track.
    pub track_size: usize,

    /// Number of regular animals used to label tiles and caves (1-4).
    pub animal_count: usize,

    /// Number of players.
    pub player_count: usize,

    /// Dragons owned by each player.
    pub dragons_per_player: usize,

    /// Seed for tile and chit-card shuffles.
    pub seed: u64,

    /// Signed cave encodings (`-(tile + 1)`), one per cave. `None` spaces the
    /// caves evenly around the track.
    pub cave_positions: Option<Vec<i32>>,

    /// Rule applied by pirate cards.
    pub penalty_rule: PenaltyRule,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            track_size: 24,
            animal_count: REGULAR_ANIMALS.len(),
            player_count: 2,
            dragons_per_player: 1,
            seed: 0,
            cave_positions: None,
            penalty_rule: PenaltyRule::default(),
        }
    }
}

impl GameConfig {
    /// Default 24-tile game for `player_count` players.
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_track_size(mut self, track_size: usize) -> Self {
        self.track_size = track_size;
        self
    }

    #[must_use]
    pub fn with_animal_count(mut self, animal_count: usize) -> Self {
        self.animal_count = animal_count;
        self
    }

    #[must_use]
    pub fn with_dragons_per_player(mut self, dragons: usize) -> Self {
        self.dragons_per_player = dragons;
        self
    }

    /// Place caves explicitly, using signed encodings.
    #[must_use]
    pub fn with_cave_positions(mut self, positions: Vec<i32>) -> Self {
        self.cave_positions = Some(positions);
        self
    }

    #[must_use]
    pub fn with_penalty_rule(mut self, rule: PenaltyRule) -> Self {
        self.penalty_rule = rule;
        self
    }

    /// Total dragons across all players.
    #[must_use]
    pub fn dragon_count(&self) -> usize {
        self.player_count * self.dragons_per_player
    }

    /// One cave per dragon, never fewer than [`MIN_CAVES`].
    #[must_use]
    pub fn cave_count(&self) -> usize {
        self.dragon_count().max(MIN_CAVES)
    }

    /// Steps a dragon must travel from its home cave to get back in: out onto
    /// the adjacent tile, once around, and back in.
    #[must_use]
    pub fn initial_remaining_steps(&self) -> u32 {
        self.track_size as u32 + 2
    }

    /// Tile each cave is bound to, in cave order.
    pub fn cave_tiles(&self) -> Result<Vec<usize>, ConfigError> {
        let count = self.cave_count();
        if count > self.track_size {
            return Err(ConfigError::TooManyCaves {
                caves: count,
                track_size: self.track_size,
            });
        }

        let Some(positions) = &self.cave_positions else {
            let distance = self.track_size / count;
            return Ok((0..count).map(|i| i * distance).collect());
        };

        if positions.len() != count {
            return Err(ConfigError::CaveCount {
                expected: count,
                got: positions.len(),
            });
        }

        let mut seen = FxHashSet::default();
        let mut tiles = Vec::with_capacity(count);
        for &raw in positions {
            if raw >= 0 || (-(raw as i64) - 1) as usize >= self.track_size {
                return Err(ConfigError::CavePosition(raw));
            }
            let tile = (-(raw as i64) - 1) as usize;
            if !seen.insert(tile) {
                return Err(ConfigError::DuplicateCave(tile));
            }
            tiles.push(tile);
        }
        Ok(tiles)
    }

    /// Reject configurations the board cannot be built from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.track_size == 0 || self.track_size % ZONE_WIDTH != 0 {
            return Err(ConfigError::TrackNotZoned {
                track_size: self.track_size,
                zone_width: ZONE_WIDTH,
            });
        }
        if self.animal_count == 0 || self.animal_count > REGULAR_ANIMALS.len() {
            return Err(ConfigError::AnimalCount {
                got: self.animal_count,
                max: REGULAR_ANIMALS.len(),
            });
        }
        if self.track_size % self.animal_count != 0 {
            return Err(ConfigError::TrackNotDivisible {
                track_size: self.track_size,
                animal_count: self.animal_count,
            });
        }
        if self.player_count == 0 {
            return Err(ConfigError::NoPlayers);
        }
        if self.player_count > MAX_PLAYERS {
            return Err(ConfigError::TooManyPlayers {
                got: self.player_count,
                max: MAX_PLAYERS,
            });
        }
        if self.dragons_per_player == 0 {
            return Err(ConfigError::NoDragons);
        }
        self.cave_tiles().map(|_| ())
    }
}
