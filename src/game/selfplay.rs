//! Random self-play.
//!
//! Flips random face-down cards and moves random eligible dragons until
//! someone wins or the reveal budget runs out. Used by the `autoplay`
//! binary, the benches, and the property tests.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use super::session::Game;
use crate::board::DragonId;
use crate::core::{GameRng, PlayerId};

/// Summary of one self-play run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayoutReport {
    pub reveals: usize,
    /// Number of times play passed to the next seat.
    pub turns: usize,
    pub winner: Option<DragonId>,
    pub winning_player: Option<PlayerId>,
}

/// Play `game` forward with random choices drawn from `rng`.
pub fn play_out(game: &mut Game, rng: &mut GameRng, max_reveals: usize) -> PlayoutReport {
    let mut reveals = 0;
    let mut turns = 0;

    while !game.is_over() && reveals < max_reveals {
        let face_down: SmallVec<[usize; 16]> = game.face_down().collect();
        let Some(&index) = rng.choose(&face_down) else {
            break;
        };

        let mut pick = |eligible: &[DragonId]| -> Option<DragonId> { rng.choose(eligible).copied() };
        let Ok(outcome) = game.reveal_with(index, &mut pick) else {
            break;
        };

        reveals += 1;
        if outcome.next_player != outcome.player || outcome.turn_ended {
            turns += 1;
        }
    }

    let report = PlayoutReport {
        reveals,
        turns,
        winner: game.winner(),
        winning_player: game.winning_player(),
    };
    debug!(?report, "playout finished");
    report
}
