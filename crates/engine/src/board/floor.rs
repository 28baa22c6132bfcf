//! Floor line: penalty row for tiles that did not fit anywhere.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::RulesError;
use crate::tiles::{ColoredTile, Tile};

pub const FLOOR_CAPACITY: usize = 7;

/// Floor penalties (fixed table), one entry per occupied slot
pub const FLOOR_PENALTY: [i32; FLOOR_CAPACITY] = [-1, -1, -2, -2, -2, -3, -3];

/// Cumulative penalty for `occupied` floor slots.
pub fn floor_penalty(occupied: usize) -> i32 {
    FLOOR_PENALTY.iter().take(occupied).sum()
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "FloorLineSnapshot")]
pub struct FloorLine {
    tiles: Vec<Tile>,
}

#[derive(Deserialize)]
struct FloorLineSnapshot {
    tiles: Vec<Tile>,
}

impl TryFrom<FloorLineSnapshot> for FloorLine {
    type Error = RulesError;

    fn try_from(snapshot: FloorLineSnapshot) -> Result<Self, Self::Error> {
        FloorLine::new(&snapshot.tiles)
    }
}

impl FloorLine {
    pub fn new(tiles: &[Tile]) -> Result<FloorLine, RulesError> {
        if tiles.len() > FLOOR_CAPACITY {
            return Err(RulesError::FloorLineOverCapacity {
                actual: tiles.len(),
                capacity: FLOOR_CAPACITY,
            });
        }
        let markers = tiles.iter().filter(|tile| tile.is_marker()).count();
        if markers > 1 {
            return Err(RulesError::DuplicateMarker(markers));
        }
        Ok(FloorLine {
            tiles: tiles.to_vec(),
        })
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn has_marker(&self) -> bool {
        self.tiles.iter().any(|tile| tile.is_marker())
    }

    pub fn colored_tiles(&self) -> impl Iterator<Item = ColoredTile> + '_ {
        self.tiles.iter().filter_map(|tile| tile.color())
    }

    /// Penalty for the tiles currently on the line (zero or negative).
    pub fn penalty(&self) -> i32 {
        floor_penalty(self.tiles.len())
    }

    /// Append tiles in order, up to capacity.
    ///
    /// Colored tiles past the seventh slot leave play and are returned as the
    /// second element. The starting player marker is never lost: on a full
    /// line it takes the last slot and the colored tile there drops instead.
    pub fn add(&self, incoming: &[Tile]) -> (FloorLine, Vec<ColoredTile>) {
        let mut tiles = self.tiles.clone();
        let mut dropped = Vec::new();

        for &tile in incoming {
            if tiles.len() < FLOOR_CAPACITY {
                tiles.push(tile);
                continue;
            }
            match tile {
                Tile::Colored(color) => dropped.push(color),
                Tile::StartingPlayerMarker => {
                    if let Some(Tile::Colored(color)) = tiles.pop() {
                        dropped.push(color);
                    }
                    tiles.push(Tile::StartingPlayerMarker);
                }
            }
        }

        if !dropped.is_empty() {
            warn!(count = dropped.len(), "floor line full, tiles dropped from play");
        }

        (FloorLine { tiles }, dropped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ColoredTile::*;

    #[test]
    fn test_penalty_table() {
        let expected = [0, -1, -2, -4, -6, -8, -11, -14];
        for (occupied, &penalty) in expected.iter().enumerate() {
            assert_eq!(floor_penalty(occupied), penalty, "{occupied} slots");
        }
        // Slots beyond capacity never add more
        assert_eq!(floor_penalty(9), -14);
    }

    #[test]
    fn test_new_enforces_capacity_and_single_marker() {
        assert!(FloorLine::new(&[Tile::Colored(Red); 7]).is_ok());
        assert_eq!(
            FloorLine::new(&[Tile::Colored(Red); 8]),
            Err(RulesError::FloorLineOverCapacity {
                actual: 8,
                capacity: 7
            })
        );
        assert_eq!(
            FloorLine::new(&[Tile::StartingPlayerMarker, Tile::StartingPlayerMarker]),
            Err(RulesError::DuplicateMarker(2))
        );
    }

    #[test]
    fn test_add_drops_overflow() {
        let floor = FloorLine::new(&[Tile::Colored(Blue); 5]).unwrap();
        let (floor, dropped) = floor.add(&[Tile::Colored(Red); 4]);

        assert_eq!(floor.len(), FLOOR_CAPACITY);
        assert_eq!(dropped, vec![Red, Red]);
        assert_eq!(floor.penalty(), -14);
    }

    #[test]
    fn test_marker_displaces_last_tile_on_full_line() {
        let floor = FloorLine::new(&[Tile::Colored(Blue); 7]).unwrap();
        let (floor, dropped) = floor.add(&[Tile::Colored(Red), Tile::StartingPlayerMarker]);

        assert_eq!(floor.len(), FLOOR_CAPACITY);
        assert!(floor.has_marker());
        assert_eq!(floor.tiles()[6], Tile::StartingPlayerMarker);
        assert_eq!(dropped, vec![Red, Blue]);
    }

    #[test]
    fn test_deserialize_rejects_invalid_floor() {
        let floor = FloorLine::new(&[Tile::StartingPlayerMarker, Tile::Colored(Red)]).unwrap();
        let json = serde_json::to_value(&floor).unwrap();
        assert_eq!(serde_json::from_value::<FloorLine>(json.clone()).unwrap(), floor);

        let mut two_markers = json;
        two_markers["tiles"][1] = two_markers["tiles"][0].clone();
        assert!(serde_json::from_value::<FloorLine>(two_markers).is_err());

        let full = FloorLine::new(&[Tile::Colored(Blue); 7]).unwrap();
        let mut overfull = serde_json::to_value(&full).unwrap();
        let tiles = overfull["tiles"].as_array_mut().unwrap();
        let first = tiles[0].clone();
        tiles.push(first);
        let err = serde_json::from_value::<FloorLine>(overfull).unwrap_err();
        assert!(err.to_string().contains("capacity"), "{err}");
    }
}
