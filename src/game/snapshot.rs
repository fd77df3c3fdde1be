//! Saving and restoring games.
//!
//! A [`GameSnapshot`] is a flat, serde-friendly record of everything a
//! running [`Game`] holds. Positions use the signed board encoding (tile
//! index, or `-(tile + 1)` for the cave beside a tile). Restoring rebuilds
//! the board from the recorded configuration and seed, checks the recorded
//! topology against it, then replays every dragon onto its recorded place.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::session::Game;
use crate::board::{DragonId, Position};
use crate::core::{GameConfig, PenaltyRule, PlayerId, SnapshotError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragonRecord {
    pub board_position: i32,
    pub remaining_steps: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub revealed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileRecord {
    pub cave: Option<u32>,
}

/// Serializable state of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub seed: u64,
    pub player_count: usize,
    pub dragons_per_player: usize,
    pub track_size: usize,
    pub animal_count: usize,
    pub penalty_rule: PenaltyRule,
    pub current_player: u8,
    pub cards_revealed: usize,
    pub dragons: Vec<DragonRecord>,
    pub cards: Vec<CardRecord>,
    pub tiles: Vec<TileRecord>,
    /// Signed encoding of every cave, in cave order.
    pub caves: Vec<i32>,
    /// Whether `caves` came from an explicit cave list rather than even
    /// spacing. Home caves depend on it.
    pub explicit_caves: bool,
    pub winner: Option<u32>,
}

impl GameSnapshot {
    /// The configuration this snapshot was taken under.
    #[must_use]
    pub fn config(&self) -> GameConfig {
        GameConfig {
            track_size: self.track_size,
            animal_count: self.animal_count,
            player_count: self.player_count,
            dragons_per_player: self.dragons_per_player,
            seed: self.seed,
            cave_positions: self.explicit_caves.then(|| self.caves.clone()),
            penalty_rule: self.penalty_rule,
        }
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

fn check_count(what: &'static str, expected: usize, got: usize) -> Result<(), SnapshotError> {
    if expected == got {
        Ok(())
    } else {
        Err(SnapshotError::RecordCount {
            what,
            expected,
            got,
        })
    }
}

impl Game {
    /// Capture the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        let board = &self.board;
        let dragons = self
            .dragons
            .iter()
            .map(|d| DragonRecord {
                // Dragons are only lifted mid-restore; fall back to home.
                board_position: board.encode(d.position().unwrap_or(Position::Cave(d.home()))),
                remaining_steps: d.remaining_steps(),
            })
            .collect();

        GameSnapshot {
            seed: self.config.seed,
            player_count: self.config.player_count,
            dragons_per_player: self.config.dragons_per_player,
            track_size: self.config.track_size,
            animal_count: self.config.animal_count,
            penalty_rule: self.config.penalty_rule,
            current_player: self.current_player.0,
            cards_revealed: self.cards_revealed,
            dragons,
            cards: self
                .cards
                .iter()
                .map(|c| CardRecord {
                    revealed: c.is_revealed(),
                })
                .collect(),
            tiles: board
                .volcanoes()
                .iter()
                .map(|v| TileRecord {
                    cave: v.cave().map(|c| c.0),
                })
                .collect(),
            caves: board
                .caves()
                .iter()
                .map(|c| board.encode(Position::Cave(c.id())))
                .collect(),
            explicit_caves: self.config.cave_positions.is_some(),
            winner: self.winner.map(|w| w.0),
        }
    }

    /// Rebuild a game from `snapshot`.
    ///
    /// Every dragon is lifted off the board before any is placed again, so a
    /// dragon may be restored onto a place another dragon started on. Two
    /// dragons recorded on the same place are rejected. The move history is
    /// not part of a snapshot and starts empty.
    pub fn restore(snapshot: &GameSnapshot) -> Result<Self, SnapshotError> {
        let mut game = Game::new(snapshot.config())?;

        check_count("dragon", game.dragons.len(), snapshot.dragons.len())?;
        check_count("card", game.cards.len(), snapshot.cards.len())?;
        check_count("tile", game.board.track_size(), snapshot.tiles.len())?;

        for (tile, (record, volcano)) in snapshot.tiles.iter().zip(game.board.volcanoes()).enumerate() {
            let rebuilt = volcano.cave().map(|c| c.0);
            if record.cave != rebuilt {
                return Err(SnapshotError::CaveLink {
                    tile,
                    stored: record.cave,
                    rebuilt,
                });
            }
        }

        if usize::from(snapshot.current_player) >= snapshot.player_count {
            return Err(SnapshotError::CurrentPlayer(snapshot.current_player));
        }
        game.current_player = PlayerId(snapshot.current_player);

        for (card, record) in game.cards.iter_mut().zip(&snapshot.cards) {
            if record.revealed {
                card.reveal();
            } else {
                card.hide();
            }
        }
        let face_up = game.cards.iter().filter(|c| c.is_revealed()).count();
        if face_up != snapshot.cards_revealed {
            return Err(SnapshotError::CardsRevealed {
                recorded: snapshot.cards_revealed,
                face_up,
            });
        }
        // Only a winning reveal leaves the whole table face up.
        if face_up == game.cards.len() && snapshot.winner.is_none() {
            return Err(SnapshotError::TableExhausted);
        }
        game.cards_revealed = face_up;

        let Game { board, dragons, .. } = &mut game;
        for dragon in dragons.iter_mut() {
            dragon.lift(board);
        }
        for (dragon, record) in dragons.iter_mut().zip(&snapshot.dragons) {
            let position = board
                .decode(record.board_position)
                .ok_or(SnapshotError::Position {
                    dragon: dragon.id().0,
                    position: record.board_position,
                })?;
            if !board.is_vacant(position) {
                return Err(SnapshotError::Collision {
                    dragon: dragon.id().0,
                    position: record.board_position,
                });
            }
            dragon.set_remaining_steps(record.remaining_steps);
            dragon.move_to(position, board);
        }

        if let Some(w) = snapshot.winner {
            if w as usize >= game.dragons.len() {
                return Err(SnapshotError::Winner(w));
            }
            game.winner = Some(DragonId(w));
        }
        game.history = Vector::new();

        debug!(seed = snapshot.seed, player = %game.current_player, "game restored");
        Ok(game)
    }
}
