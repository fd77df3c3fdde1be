//! Chit cards: the face-down memory tiles players flip each turn.

use serde::{Deserialize, Serialize};

use crate::board::Animal;
use crate::core::PenaltyRule;
use crate::movement::MoveRule;

/// A chit card: an animal icon shown `value` times.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChitCard {
    animal: Animal,
    value: u32,
    revealed: bool,
}

impl ChitCard {
    /// A face-down card.
    pub fn new(animal: Animal, value: u32) -> Self {
        Self {
            animal,
            value,
            revealed: false,
        }
    }

    #[must_use]
    pub fn animal(&self) -> Animal {
        self.animal
    }

    /// Number of icons on the card, which is the step count it moves.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    pub fn hide(&mut self) {
        self.revealed = false;
    }

    /// Pirate and spirit cards apply to any dragon, not just matching ones.
    #[must_use]
    pub fn is_penalty(&self) -> bool {
        !self.animal.is_regular()
    }

    /// Whether a dragon standing on a place labelled `animal` may act on
    /// this card.
    #[must_use]
    pub fn matches(&self, animal: Animal) -> bool {
        self.is_penalty() || self.animal == animal
    }

    /// Movement rule this card triggers.
    #[must_use]
    pub fn rule(&self, penalty: PenaltyRule) -> MoveRule {
        match self.animal {
            Animal::DragonSpirit => MoveRule::TeleportToCave,
            Animal::DragonPirate => match penalty {
                PenaltyRule::Backward => MoveRule::Backward,
                PenaltyRule::SpecialBackward => MoveRule::SpecialBackward,
            },
            _ => MoveRule::Forward,
        }
    }
}

impl std::fmt::Display for ChitCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x{}", self.animal, self.value)
    }
}
