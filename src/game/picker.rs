//! Choosing which of a player's dragons acts on a card.

use crate::board::DragonId;

/// Picks one dragon out of those eligible for the revealed card.
///
/// `eligible` is never empty when this is called. Returning `None`, or an
/// id that is not in `eligible`, forfeits the card and ends the turn.
pub trait DragonPicker {
    fn pick(&mut self, eligible: &[DragonId]) -> Option<DragonId>;
}

/// Always takes the first eligible dragon (lowest id).
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstEligible;

impl DragonPicker for FirstEligible {
    fn pick(&mut self, eligible: &[DragonId]) -> Option<DragonId> {
        eligible.first().copied()
    }
}

impl<F> DragonPicker for F
where
    F: FnMut(&[DragonId]) -> Option<DragonId>,
{
    fn pick(&mut self, eligible: &[DragonId]) -> Option<DragonId> {
        self(eligible)
    }
}
