//! Animal labels shared by tiles, caves and chit cards.

use serde::{Deserialize, Serialize};

/// The icon printed on a tile, cave or chit card.
///
/// The four regular animals label the board. The last two only appear on
/// penalty chit cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Animal {
    Bat,
    BabyDragon,
    Salamander,
    Spider,
    DragonPirate,
    DragonSpirit,
}

/// Animals that label tiles and caves, in label-index order.
pub const REGULAR_ANIMALS: [Animal; 4] = [
    Animal::Bat,
    Animal::BabyDragon,
    Animal::Salamander,
    Animal::Spider,
];

impl Animal {
    /// The `index`-th regular animal, wrapping past the end.
    #[must_use]
    pub const fn regular(index: usize) -> Animal {
        REGULAR_ANIMALS[index % REGULAR_ANIMALS.len()]
    }

    /// True for animals that appear on the board.
    #[must_use]
    pub const fn is_regular(self) -> bool {
        !matches!(self, Animal::DragonPirate | Animal::DragonSpirit)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Animal::Bat => "bat",
            Animal::BabyDragon => "baby dragon",
            Animal::Salamander => "salamander",
            Animal::Spider => "spider",
            Animal::DragonPirate => "dragon pirate",
            Animal::DragonSpirit => "dragon spirit",
        }
    }
}

impl std::fmt::Display for Animal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
