//! Running a game: turn and card coordination, dragon selection, snapshots,
//! and random self-play.

pub mod picker;
pub mod selfplay;
pub mod session;
pub mod snapshot;

pub use picker::{DragonPicker, FirstEligible};
pub use selfplay::{play_out, PlayoutReport};
pub use session::{Eligible, Game, TurnOutcome};
pub use snapshot::{CardRecord, DragonRecord, GameSnapshot, TileRecord};
