//! Movement resolution.
//!
//! A [`Movement`] is built fresh for every card that moves a dragon. It
//! computes its destination as soon as it is constructed
//! ([`Movement::resolve`]) and then either commits or aborts in
//! [`Movement::execute`]. The rule family is a closed enum; each variant's
//! destination logic lives in its own submodule.
//!
//! | Rule | Trigger | Blocked landing |
//! |---|---|---|
//! | `Forward` | matching animal card | turn ends |
//! | `Backward` | pirate card | turn ends |
//! | `SpecialBackward` | pirate card | keep sliding back to a free tile |
//! | `TeleportToCave` | spirit card | n/a, scan only stops at empty caves |
//!
//! ## Example
//!
//! ```
//! use fiery_dragons::board::{Board, CaveId, Dragon, DragonId, Position};
//! use fiery_dragons::core::{GameConfig, PlayerId};
//! use fiery_dragons::movement::{MoveRule, Movement};
//!
//! let mut board = Board::new(&GameConfig::new(2)).unwrap();
//! let mut dragon = Dragon::new(DragonId::new(0), PlayerId::new(0), CaveId::new(0), 10);
//! dragon.move_to(Position::Volcano(5), &mut board);
//!
//! let outcome = Movement::resolve(MoveRule::Forward, &dragon, 3, &board)
//!     .execute(&mut dragon, &mut board);
//!
//! assert_eq!(outcome.destination, Some(Position::Volcano(8)));
//! assert_eq!(dragon.remaining_steps(), 7);
//! assert!(!outcome.end_turn);
//! ```

mod backward;
mod forward;
mod teleport;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Board, Dragon, DragonId, Position};

/// The movement rule a card applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveRule {
    Forward,
    Backward,
    SpecialBackward,
    TeleportToCave,
}

/// What happened when a movement was executed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub rule: MoveRule,
    pub dragon: DragonId,
    /// Where the dragon stood before the move.
    pub from: Option<Position>,
    /// Where the dragon ended up, or `None` if it did not move.
    pub destination: Option<Position>,
    /// The dragon's remaining steps after the move.
    pub remaining_steps: u32,
    pub end_turn: bool,
    pub end_game: bool,
}

/// One pending resolution of a rule for a dragon.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Movement {
    rule: MoveRule,
    dragon: DragonId,
    step: u32,
    origin: Option<Position>,
    remaining_steps: u32,
    destination: Option<Position>,
    end_turn: bool,
    end_game: bool,
}

impl Movement {
    /// Compute where `dragon` would go under `rule` with `step` steps.
    ///
    /// Nothing on the board changes until [`execute`](Self::execute). A
    /// dragon that is lifted off the board resolves to no movement.
    pub fn resolve(rule: MoveRule, dragon: &Dragon, step: u32, board: &Board) -> Self {
        let mut movement = Self {
            rule,
            dragon: dragon.id(),
            step,
            origin: dragon.position(),
            remaining_steps: dragon.remaining_steps(),
            destination: None,
            end_turn: false,
            end_game: false,
        };

        if let Some(origin) = movement.origin {
            movement.destination = match rule {
                MoveRule::Forward => forward::destination(&mut movement, origin, board),
                MoveRule::Backward | MoveRule::SpecialBackward => {
                    backward::destination(&mut movement, origin, board)
                }
                MoveRule::TeleportToCave => teleport::destination(&mut movement, origin, board),
            };
        }

        debug!(
            rule = ?movement.rule,
            dragon = %movement.dragon,
            step,
            origin = ?movement.origin,
            destination = ?movement.destination,
            remaining = movement.remaining_steps,
            "resolved movement"
        );
        movement
    }

    #[must_use]
    pub fn rule(&self) -> MoveRule {
        self.rule
    }

    #[must_use]
    pub fn step(&self) -> u32 {
        self.step
    }

    /// Destination computed at construction, before validity checks.
    #[must_use]
    pub fn destination(&self) -> Option<Position> {
        self.destination
    }

    #[must_use]
    pub fn remaining_steps(&self) -> u32 {
        self.remaining_steps
    }

    #[must_use]
    pub fn ends_turn(&self) -> bool {
        self.end_turn
    }

    #[must_use]
    pub fn ends_game(&self) -> bool {
        self.end_game
    }

    /// Validate the destination against current occupancy and commit it.
    ///
    /// A blocked destination aborts the move: the dragon stays put, its
    /// remaining steps are untouched, the turn ends and the game does not.
    /// `SpecialBackward` searches for a free tile instead of aborting, and
    /// `TeleportToCave` already only stops at empty caves.
    pub fn execute(mut self, dragon: &mut Dragon, board: &mut Board) -> MoveOutcome {
        debug_assert_eq!(dragon.id(), self.dragon, "movement executed on another dragon");

        if let Some(destination) = self.destination {
            let settled = match self.rule {
                MoveRule::TeleportToCave => Some(destination),
                MoveRule::SpecialBackward => backward::settle(&mut self, destination, board),
                MoveRule::Forward | MoveRule::Backward => {
                    board.is_vacant(destination).then_some(destination)
                }
            };

            match settled {
                Some(destination) => {
                    dragon.move_to(destination, board);
                    dragon.set_remaining_steps(self.remaining_steps);
                    self.destination = Some(destination);
                }
                None => {
                    debug!(dragon = %self.dragon, blocked = %destination, "movement aborted");
                    self.destination = None;
                    self.end_turn = true;
                    self.end_game = false;
                }
            }
        }

        MoveOutcome {
            rule: self.rule,
            dragon: self.dragon,
            from: self.origin,
            destination: self.destination,
            remaining_steps: dragon.remaining_steps(),
            end_turn: self.end_turn,
            end_game: self.end_game,
        }
    }
}
