//! The standard chit-card deck.

use super::chit::ChitCard;
use crate::board::{Animal, REGULAR_ANIMALS};
use crate::core::GameRng;

/// Highest icon count on a regular animal card.
pub const MAX_CARD_VALUE: u32 = 3;

/// Number of dragon spirit cards in the deck.
pub const SPIRIT_CARDS: usize = 2;

/// The 16 standard cards in a fixed order: one card per regular animal and
/// value 1-3, pirate cards for values 1 and 2, and two spirit cards.
#[must_use]
pub fn standard_deck() -> Vec<ChitCard> {
    let mut cards = Vec::with_capacity(16);
    for value in 1..=MAX_CARD_VALUE {
        cards.extend(REGULAR_ANIMALS.iter().map(|&animal| ChitCard::new(animal, value)));
        if value < MAX_CARD_VALUE {
            cards.push(ChitCard::new(Animal::DragonPirate, value));
        }
    }
    cards.extend((0..SPIRIT_CARDS).map(|_| ChitCard::new(Animal::DragonSpirit, 1)));
    cards
}

/// The standard deck laid out face down, shuffled with the `"chit_cards"`
/// stream of `seed`.
#[must_use]
pub fn shuffled_deck(seed: u64) -> Vec<ChitCard> {
    let mut cards = standard_deck();
    GameRng::new(seed).for_context("chit_cards").shuffle(&mut cards);
    cards
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_deck_composition() {
        let deck = standard_deck();
        assert_eq!(deck.len(), 16);

        for animal in REGULAR_ANIMALS {
            let mut values: Vec<_> = deck
                .iter()
                .filter(|c| c.animal() == animal)
                .map(|c| c.value())
                .collect();
            values.sort_unstable();
            assert_eq!(values, vec![1, 2, 3]);
        }

        let pirates: Vec<_> = deck
            .iter()
            .filter(|c| c.animal() == Animal::DragonPirate)
            .map(|c| c.value())
            .collect();
        assert_eq!(pirates, vec![1, 2]);

        let spirits = deck.iter().filter(|c| c.animal() == Animal::DragonSpirit).count();
        assert_eq!(spirits, SPIRIT_CARDS);
        assert!(deck.iter().all(|c| !c.is_revealed()));
    }

    #[test]
    fn test_shuffle_is_seeded() {
        assert_eq!(shuffled_deck(5), shuffled_deck(5));
        assert_ne!(shuffled_deck(5), standard_deck());
    }
}
