//! The circular volcano track, its caves, and who is standing where.
//!
//! The track is `track_size` volcano tiles grouped into zones of
//! [`ZONE_WIDTH`]. Some tiles are bound to a cave; the tile stores the cave
//! id and the cave stores the tile, so either side can be resolved in O(1).
//!
//! Occupancy lives on the tiles and caves themselves. It is flipped only by
//! [`Dragon::move_to`](super::Dragon::move_to) and
//! [`Dragon::lift`](super::Dragon::lift): the number of occupied tiles and
//! caves always equals the number of dragons on the board.

use serde::{Deserialize, Serialize};

use super::animal::Animal;
use super::position::{CaveId, Position};
use crate::core::{ConfigError, GameConfig, GameRng};

/// Tiles per volcano zone.
pub const ZONE_WIDTH: usize = 3;

/// One tile of the track.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volcano {
    animal: Animal,
    cave: Option<CaveId>,
    occupied: bool,
}

impl Volcano {
    #[must_use]
    pub fn animal(&self) -> Animal {
        self.animal
    }

    /// The cave bound to this tile, if any.
    #[must_use]
    pub fn cave(&self) -> Option<CaveId> {
        self.cave
    }

    #[must_use]
    pub fn is_occupied(&self) -> bool {
        self.occupied
    }
}

/// A home cave beside one tile of the track.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cave {
    id: CaveId,
    animal: Animal,
    tile: usize,
    occupied: bool,
}

impl Cave {
    #[must_use]
    pub fn id(&self) -> CaveId {
        self.id
    }

    #[must_use]
    pub fn animal(&self) -> Animal {
        self.animal
    }

    /// The tile this cave opens onto.
    #[must_use]
    pub fn tile(&self) -> usize {
        self.tile
    }

    #[must_use]
    pub fn is_occupied(&self) -> bool {
        self.occupied
    }
}

/// Track topology plus occupancy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    volcanoes: Vec<Volcano>,
    caves: Vec<Cave>,
}

impl Board {
    /// Lay out an empty board for `config`.
    ///
    /// Tile animals are dealt in equal blocks and shuffled with the
    /// `"volcanoes"` stream of the config seed, so equal seeds give equal
    /// boards. Cave `i` is labelled with the `i`-th regular animal, wrapping
    /// after the fourth, whatever the label count.
    ///
    /// Only the cave layout is checked here; zone and animal divisibility
    /// are the caller's job (see [`GameConfig::validate`]).
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        let cave_tiles = config.cave_tiles()?;
        let size = config.track_size;
        let animal_count = config.animal_count.max(1);

        let mut animals: Vec<Animal> = (0..size)
            .map(|t| Animal::regular(t * animal_count / size))
            .collect();
        GameRng::new(config.seed)
            .for_context("volcanoes")
            .shuffle(&mut animals);

        let mut volcanoes: Vec<Volcano> = animals
            .into_iter()
            .map(|animal| Volcano {
                animal,
                cave: None,
                occupied: false,
            })
            .collect();

        let caves = cave_tiles
            .into_iter()
            .enumerate()
            .map(|(i, tile)| {
                let id = CaveId(i as u32);
                volcanoes[tile].cave = Some(id);
                Cave {
                    id,
                    animal: Animal::regular(i),
                    tile,
                    occupied: false,
                }
            })
            .collect();

        Ok(Self { volcanoes, caves })
    }

    #[must_use]
    pub fn track_size(&self) -> usize {
        self.volcanoes.len()
    }

    /// `(zone index, offset within zone)` of a tile.
    #[must_use]
    pub const fn zone_of(tile: usize) -> (usize, usize) {
        (tile / ZONE_WIDTH, tile % ZONE_WIDTH)
    }

    /// Volcano zones in track order.
    pub fn zones(&self) -> impl Iterator<Item = &[Volcano]> {
        self.volcanoes.chunks(ZONE_WIDTH)
    }

    #[must_use]
    pub fn volcanoes(&self) -> &[Volcano] {
        &self.volcanoes
    }

    #[must_use]
    pub fn volcano(&self, tile: usize) -> &Volcano {
        &self.volcanoes[tile]
    }

    #[must_use]
    pub fn caves(&self) -> &[Cave] {
        &self.caves
    }

    #[must_use]
    pub fn cave(&self, id: CaveId) -> &Cave {
        &self.caves[id.index()]
    }

    /// The tile cave `id` opens onto.
    #[must_use]
    pub fn cave_tile(&self, id: CaveId) -> usize {
        self.caves[id.index()].tile
    }

    /// The cave bound to `tile`, if any.
    #[must_use]
    pub fn cave_at(&self, tile: usize) -> Option<CaveId> {
        self.volcanoes[tile].cave
    }

    /// Animal label of the tile or cave at `pos`.
    #[must_use]
    pub fn animal_at(&self, pos: Position) -> Animal {
        match pos {
            Position::Volcano(tile) => self.volcanoes[tile].animal,
            Position::Cave(id) => self.caves[id.index()].animal,
        }
    }

    /// True when a dragon may enter `pos`.
    #[must_use]
    pub fn is_vacant(&self, pos: Position) -> bool {
        match pos {
            Position::Volcano(tile) => !self.volcanoes[tile].occupied,
            Position::Cave(id) => !self.caves[id.index()].occupied,
        }
    }

    /// Tiles and caves currently holding a dragon.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.volcanoes.iter().filter(|v| v.occupied).count()
            + self.caves.iter().filter(|c| c.occupied).count()
    }

    pub(crate) fn set_occupied(&mut self, pos: Position, occupied: bool) {
        match pos {
            Position::Volcano(tile) => self.volcanoes[tile].occupied = occupied,
            Position::Cave(id) => self.caves[id.index()].occupied = occupied,
        }
    }

    /// Signed encoding of `pos`: the tile index, or `-(tile + 1)` for a cave.
    #[must_use]
    pub fn encode(&self, pos: Position) -> i32 {
        match pos {
            Position::Volcano(tile) => tile as i32,
            Position::Cave(id) => -(self.caves[id.index()].tile as i32 + 1),
        }
    }

    /// Inverse of [`encode`](Self::encode).
    ///
    /// Returns `None` for tiles off the track and for negative values whose
    /// tile has no cave.
    #[must_use]
    pub fn decode(&self, raw: i32) -> Option<Position> {
        if raw >= 0 {
            let tile = raw as usize;
            return (tile < self.track_size()).then_some(Position::Volcano(tile));
        }
        let tile = (-(raw as i64) - 1) as usize;
        self.volcanoes.get(tile)?.cave.map(Position::Cave)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::animal::REGULAR_ANIMALS;

    fn board(seed: u64) -> Board {
        Board::new(&GameConfig::new(2).with_seed(seed)).unwrap()
    }

    #[test]
    fn test_zones_split_track_in_threes() {
        let board = board(1);
        assert_eq!(board.zones().count(), 8);
        assert!(board.zones().all(|z| z.len() == ZONE_WIDTH));
        assert_eq!(Board::zone_of(0), (0, 0));
        assert_eq!(Board::zone_of(7), (2, 1));
        assert_eq!(Board::zone_of(23), (7, 2));
    }

    #[test]
    fn test_animals_are_dealt_evenly() {
        let board = board(9);
        for animal in REGULAR_ANIMALS {
            let count = board.volcanoes().iter().filter(|v| v.animal() == animal).count();
            assert_eq!(count, 6);
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        assert_eq!(board(11), board(11));
        assert_ne!(board(11).volcanoes(), board(12).volcanoes());
    }

    #[test]
    fn test_caves_link_both_ways() {
        let board = board(0);
        assert_eq!(board.caves().len(), 4);
        for cave in board.caves() {
            assert_eq!(board.cave_at(cave.tile()), Some(cave.id()));
            assert_eq!(cave.animal(), Animal::regular(cave.id().index()));
        }
        let linked = board.volcanoes().iter().filter(|v| v.cave().is_some()).count();
        assert_eq!(linked, 4);
    }

    #[test]
    fn test_cave_animals_ignore_label_count() {
        let board = Board::new(&GameConfig::new(6).with_animal_count(2)).unwrap();
        let animals: Vec<_> = board.caves().iter().map(Cave::animal).collect();
        assert_eq!(
            animals,
            vec![
                Animal::Bat,
                Animal::BabyDragon,
                Animal::Salamander,
                Animal::Spider,
                Animal::Bat,
                Animal::BabyDragon
            ]
        );
        assert_eq!(board.cave_tile(CaveId(5)), 20);
    }

    #[test]
    fn test_signed_encoding_round_trips() {
        let board = board(0);
        for tile in 0..board.track_size() {
            let pos = Position::Volcano(tile);
            assert_eq!(board.decode(board.encode(pos)), Some(pos));
        }
        for cave in board.caves() {
            let pos = Position::Cave(cave.id());
            assert_eq!(board.encode(pos), -(cave.tile() as i32 + 1));
            assert_eq!(board.decode(board.encode(pos)), Some(pos));
        }
    }

    #[test]
    fn test_decode_rejects_unknown_places() {
        let board = board(0);
        assert_eq!(board.decode(24), None);
        // tile 1 has no cave with even spacing
        assert_eq!(board.decode(-2), None);
        assert_eq!(board.decode(-25), None);
    }

    #[test]
    fn test_occupancy_flags() {
        let mut board = board(0);
        let cave = Position::Cave(CaveId(1));
        assert!(board.is_vacant(Position::Volcano(0)));
        board.set_occupied(Position::Volcano(0), true);
        board.set_occupied(cave, true);
        assert!(!board.is_vacant(Position::Volcano(0)));
        assert!(!board.is_vacant(cave));
        assert_eq!(board.occupied_count(), 2);
    }
}
