//! Tiles and the tile supply (bag and discard).

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::RulesError;

pub const TILE_COLORS: usize = 5;
pub const TILES_PER_COLOR: usize = 20;
pub const TOTAL_TILES: usize = TILE_COLORS * TILES_PER_COLOR;

/// Tile colors (order fixed for serialization)
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum ColoredTile {
    Black = 0,
    White = 1,
    Blue = 2,
    Yellow = 3,
    Red = 4,
}

impl ColoredTile {
    pub fn index(self) -> usize {
        self as usize
    }
}

pub const ALL_COLORS: [ColoredTile; TILE_COLORS] = [
    ColoredTile::Black,
    ColoredTile::White,
    ColoredTile::Blue,
    ColoredTile::Yellow,
    ColoredTile::Red,
];

/// Token that can sit in a floor line or be handed out by the table center
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Tile {
    Colored(ColoredTile),
    StartingPlayerMarker,
}

impl Tile {
    pub fn color(self) -> Option<ColoredTile> {
        match self {
            Tile::Colored(color) => Some(color),
            Tile::StartingPlayerMarker => None,
        }
    }

    pub fn is_marker(self) -> bool {
        matches!(self, Tile::StartingPlayerMarker)
    }
}

impl From<ColoredTile> for Tile {
    fn from(color: ColoredTile) -> Self {
        Tile::Colored(color)
    }
}

/// Counts per color, indexed by `ColoredTile::index`.
pub fn color_counts<'a>(tiles: impl IntoIterator<Item = &'a ColoredTile>) -> [usize; TILE_COLORS] {
    let mut counts = [0; TILE_COLORS];
    for tile in tiles {
        counts[tile.index()] += 1;
    }
    counts
}

// =============================================================================
// Selection strategy (source of randomness for bag draws)
// =============================================================================

/// Picks one tile out of the bag's current contents.
///
/// The engine never decides *how* a tile is drawn; it hands the candidates to
/// the strategy once per draw. Candidates are never empty.
pub trait SelectionStrategy {
    fn choose_one(&mut self, candidates: &[ColoredTile]) -> ColoredTile;
}

impl<F> SelectionStrategy for F
where
    F: FnMut(&[ColoredTile]) -> ColoredTile,
{
    fn choose_one(&mut self, candidates: &[ColoredTile]) -> ColoredTile {
        self(candidates)
    }
}

/// Uniform draw backed by any `rand` generator.
#[derive(Clone, Debug)]
pub struct RandomSelection<R> {
    rng: R,
}

impl<R: Rng> RandomSelection<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> SelectionStrategy for RandomSelection<R> {
    fn choose_one(&mut self, candidates: &[ColoredTile]) -> ColoredTile {
        let pick = self.rng.random_range(0..candidates.len());
        candidates[pick]
    }
}

// =============================================================================
// Bag and discard
// =============================================================================

/// The bag factory displays are filled from. Unordered; never holds the marker.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TileBag {
    tiles: Vec<ColoredTile>,
}

impl Default for TileBag {
    /// A full bag: 20 tiles of every color.
    fn default() -> Self {
        let tiles = ALL_COLORS
            .iter()
            .flat_map(|&color| std::iter::repeat_n(color, TILES_PER_COLOR))
            .collect();
        TileBag { tiles }
    }
}

impl TileBag {
    pub fn new(tiles: impl IntoIterator<Item = ColoredTile>) -> Self {
        TileBag {
            tiles: tiles.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        TileBag { tiles: Vec::new() }
    }

    pub fn tiles(&self) -> &[ColoredTile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn add(&self, tiles: &[ColoredTile]) -> TileBag {
        let mut next = self.tiles.clone();
        next.extend_from_slice(tiles);
        TileBag { tiles: next }
    }

    /// Draw one tile chosen by `strategy`.
    ///
    /// An empty bag yields `(None, unchanged bag)`.
    pub fn pull(
        &self,
        strategy: &mut impl SelectionStrategy,
    ) -> Result<(Option<ColoredTile>, TileBag), RulesError> {
        if self.tiles.is_empty() {
            return Ok((None, self.clone()));
        }

        let selected = strategy.choose_one(&self.tiles);
        let position = self
            .tiles
            .iter()
            .position(|&tile| tile == selected)
            .ok_or(RulesError::SelectionOutsideBag(selected))?;

        let mut remaining = self.tiles.clone();
        remaining.swap_remove(position);
        trace!(tile = ?selected, remaining = remaining.len(), "drew tile from bag");

        Ok((Some(selected), TileBag { tiles: remaining }))
    }
}

/// Tiles removed from play until the bag runs dry.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TileDiscard {
    tiles: Vec<ColoredTile>,
}

impl TileDiscard {
    pub fn new(tiles: impl IntoIterator<Item = ColoredTile>) -> Self {
        TileDiscard {
            tiles: tiles.into_iter().collect(),
        }
    }

    pub fn tiles(&self) -> &[ColoredTile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn add(&self, tiles: &[ColoredTile]) -> TileDiscard {
        let mut next = self.tiles.clone();
        next.extend_from_slice(tiles);
        TileDiscard { tiles: next }
    }

    /// Same as `add` for `count` copies of one color.
    pub fn add_repeated(&self, color: ColoredTile, count: usize) -> TileDiscard {
        let mut next = self.tiles.clone();
        next.extend(std::iter::repeat_n(color, count));
        TileDiscard { tiles: next }
    }
}

/// Move every discarded tile back into the bag.
pub fn reset_tile_bag(bag: &TileBag, discard: &TileDiscard) -> (TileBag, TileDiscard) {
    trace!(refilled = discard.len(), "refilling tile bag from discard");
    (bag.add(discard.tiles()), TileDiscard::default())
}
