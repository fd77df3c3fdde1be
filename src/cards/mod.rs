//! Chit cards and the deck they are dealt from.
//!
//! A card's animal decides which dragons may act on it and which movement
//! rule it triggers; its value is the step count.

pub mod chit;
pub mod deck;

pub use chit::ChitCard;
pub use deck::{shuffled_deck, standard_deck, MAX_CARD_VALUE, SPIRIT_CARDS};
