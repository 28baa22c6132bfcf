//! Tile pools a player drafts from: factory displays and the table center.

use serde::{Deserialize, Serialize};

use crate::error::RulesError;
use crate::tiles::ColoredTile;

pub const FACTORY_CAPACITY: usize = 4;

/// Identifies one factory display for the duration of a round.
///
/// Two displays holding identical tiles are still different displays.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct DisplayId(pub u8);

/// A factory display: a pot of four tiles, emptied completely by any pick.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FactoryDisplaySnapshot")]
pub struct FactoryDisplay {
    id: DisplayId,
    tiles: Vec<ColoredTile>,
}

/// Wire form. A restored display may be short (1 to 3 tiles) since an
/// exhausted supply deals those, but never empty or over capacity.
#[derive(Deserialize)]
struct FactoryDisplaySnapshot {
    id: DisplayId,
    tiles: Vec<ColoredTile>,
}

impl TryFrom<FactoryDisplaySnapshot> for FactoryDisplay {
    type Error = RulesError;

    fn try_from(snapshot: FactoryDisplaySnapshot) -> Result<Self, Self::Error> {
        match snapshot.tiles.len() {
            FACTORY_CAPACITY => FactoryDisplay::new(snapshot.id, &snapshot.tiles),
            1..FACTORY_CAPACITY => Ok(FactoryDisplay::short(snapshot.id, snapshot.tiles)),
            actual => Err(RulesError::FactoryDisplaySize {
                expected: FACTORY_CAPACITY,
                actual,
            }),
        }
    }
}

impl FactoryDisplay {
    pub fn new(id: DisplayId, tiles: &[ColoredTile]) -> Result<FactoryDisplay, RulesError> {
        if tiles.len() != FACTORY_CAPACITY {
            return Err(RulesError::FactoryDisplaySize {
                expected: FACTORY_CAPACITY,
                actual: tiles.len(),
            });
        }
        Ok(FactoryDisplay {
            id,
            tiles: tiles.to_vec(),
        })
    }

    /// Display filled from an exhausted supply (fewer than four tiles).
    pub(crate) fn short(id: DisplayId, tiles: Vec<ColoredTile>) -> FactoryDisplay {
        debug_assert!(!tiles.is_empty() && tiles.len() < FACTORY_CAPACITY);
        FactoryDisplay { id, tiles }
    }

    pub fn id(&self) -> DisplayId {
        self.id
    }

    pub fn tiles(&self) -> &[ColoredTile] {
        &self.tiles
    }

    pub fn count(&self, color: ColoredTile) -> usize {
        self.tiles.iter().filter(|&&tile| tile == color).count()
    }

    pub fn contains(&self, color: ColoredTile) -> bool {
        self.tiles.contains(&color)
    }
}

/// Every factory display still on the table this round.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct FactoryDisplays {
    displays: Vec<FactoryDisplay>,
}

impl FactoryDisplays {
    pub fn new(displays: impl IntoIterator<Item = FactoryDisplay>) -> Self {
        FactoryDisplays {
            displays: displays.into_iter().collect(),
        }
    }

    pub fn get(&self, id: DisplayId) -> Option<&FactoryDisplay> {
        self.displays.iter().find(|display| display.id == id)
    }

    pub fn contains(&self, id: DisplayId) -> bool {
        self.get(id).is_some()
    }

    /// The collection without display `id` (unchanged if it is absent).
    pub fn remove(&self, id: DisplayId) -> FactoryDisplays {
        FactoryDisplays {
            displays: self
                .displays
                .iter()
                .filter(|display| display.id != id)
                .cloned()
                .collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &FactoryDisplay> {
        self.displays.iter()
    }

    pub fn len(&self) -> usize {
        self.displays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.displays.is_empty()
    }

    pub fn tile_count(&self) -> usize {
        self.displays.iter().map(|display| display.tiles.len()).sum()
    }
}

/// Shared pool in the middle of the table.
///
/// `Unpicked` still holds the starting player marker; the first pick from it
/// hands the marker out and turns it `Picked` for the rest of the round.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum TableCenter {
    Unpicked { tiles: Vec<ColoredTile> },
    Picked { tiles: Vec<ColoredTile> },
}

impl Default for TableCenter {
    fn default() -> Self {
        TableCenter::Unpicked { tiles: Vec::new() }
    }
}

impl TableCenter {
    pub fn tiles(&self) -> &[ColoredTile] {
        match self {
            TableCenter::Unpicked { tiles } | TableCenter::Picked { tiles } => tiles,
        }
    }

    pub fn count(&self, color: ColoredTile) -> usize {
        self.tiles().iter().filter(|&&tile| tile == color).count()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles().is_empty()
    }

    pub fn is_picked(&self) -> bool {
        matches!(self, TableCenter::Picked { .. })
    }

    /// Whether the starting player marker is still waiting here.
    pub fn has_marker(&self) -> bool {
        !self.is_picked()
    }

    /// Remove every tile of `color`. The result is always `Picked`.
    pub fn pick(&self, color: ColoredTile) -> TableCenter {
        TableCenter::Picked {
            tiles: self
                .tiles()
                .iter()
                .copied()
                .filter(|&tile| tile != color)
                .collect(),
        }
    }

    /// Append leftovers from a factory display, keeping the current variant.
    pub fn add(&self, extra: &[ColoredTile]) -> TableCenter {
        let mut tiles = self.tiles().to_vec();
        tiles.extend_from_slice(extra);
        match self {
            TableCenter::Unpicked { .. } => TableCenter::Unpicked { tiles },
            TableCenter::Picked { .. } => TableCenter::Picked { tiles },
        }
    }
}

/// Where a player drafts from.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum TilePool {
    FactoryDisplay(DisplayId),
    TableCenter,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ColoredTile::*;

    #[test]
    fn test_factory_display_requires_four_tiles() {
        assert!(FactoryDisplay::new(DisplayId(0), &[Blue, Blue, Red, Red]).is_ok());
        assert_eq!(
            FactoryDisplay::new(DisplayId(0), &[Blue, Blue, Red]),
            Err(RulesError::FactoryDisplaySize {
                expected: 4,
                actual: 3
            })
        );
        assert!(FactoryDisplay::new(DisplayId(0), &[Blue; 5]).is_err());
    }

    #[test]
    fn test_remove_only_drops_matching_id() {
        let a = FactoryDisplay::new(DisplayId(0), &[Blue, Blue, Black, Black]).unwrap();
        let b = FactoryDisplay::new(DisplayId(1), &[Blue, Blue, Black, Black]).unwrap();
        let displays = FactoryDisplays::new([a.clone(), b]);

        let remaining = displays.remove(DisplayId(1));

        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining.get(DisplayId(0)), Some(&a));
        assert_eq!(displays.len(), 2);
    }

    #[test]
    fn test_table_center_pick_transitions_to_picked() {
        let center = TableCenter::Unpicked {
            tiles: vec![Blue, Black, Blue],
        };
        assert!(center.has_marker());

        let picked = center.pick(Blue);
        assert_eq!(picked, TableCenter::Picked { tiles: vec![Black] });
        assert!(!picked.has_marker());

        // Picking again never goes back to unpicked
        assert!(picked.pick(Black).is_picked());
    }

    #[test]
    fn test_table_center_add_keeps_variant() {
        let unpicked = TableCenter::default().add(&[Red]);
        assert_eq!(unpicked, TableCenter::Unpicked { tiles: vec![Red] });

        let picked = TableCenter::Picked { tiles: vec![] }.add(&[Red, Red]);
        assert_eq!(picked.count(Red), 2);
        assert!(picked.is_picked());
    }

    #[test]
    fn test_deserialize_checks_display_size() {
        let display = FactoryDisplay::new(DisplayId(2), &[Blue, Red, Red, White]).unwrap();
        let json = serde_json::to_value(&display).unwrap();
        assert_eq!(serde_json::from_value::<FactoryDisplay>(json.clone()).unwrap(), display);

        // A short display is what an exhausted supply deals
        let mut short = json.clone();
        short["tiles"].as_array_mut().unwrap().truncate(2);
        let restored = serde_json::from_value::<FactoryDisplay>(short).unwrap();
        assert_eq!(restored.tiles(), &[Blue, Red]);

        let mut empty = json.clone();
        empty["tiles"].as_array_mut().unwrap().clear();
        assert!(serde_json::from_value::<FactoryDisplay>(empty).is_err());

        let mut five = json;
        let tiles = five["tiles"].as_array_mut().unwrap();
        let first = tiles[0].clone();
        tiles.push(first);
        assert!(serde_json::from_value::<FactoryDisplay>(five).is_err());
    }
}
