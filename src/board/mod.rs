//! Board model: track topology, caves, occupancy, positions and dragons.
//!
//! This is the state every movement rule reads, and the commit path
//! ([`Dragon::move_to`]) is the only writer of occupancy.

pub mod animal;
pub mod dragon;
pub mod position;
pub mod track;

pub use animal::{Animal, REGULAR_ANIMALS};
pub use dragon::{home_cave, Dragon, DragonId};
pub use position::{wrap, CaveId, Position};
pub use track::{Board, Cave, Volcano, ZONE_WIDTH};
