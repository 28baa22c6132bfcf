//! Factory offer: drafting tiles from a pool onto a pattern line.

use serde::{Deserialize, Serialize};

use crate::board::{Board, FloorLine};
use crate::factory::{FactoryDisplays, TableCenter, TilePool};
use crate::tiles::{ColoredTile, Tile};

/// Tiles taken from a pool together with the pools left behind.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SelectTiles {
    pub tiles: Vec<Tile>,
    pub factory_displays: FactoryDisplays,
    pub table_center: TableCenter,
}

/// Take every tile of `color` from `pool`.
///
/// Picking from a display sends its other tiles to the table center and
/// removes the display. The first pick from an unpicked center also yields the
/// starting player marker. `None` if the display is gone or `color` is absent.
pub fn select_tiles(
    factories: &FactoryDisplays,
    table_center: &TableCenter,
    pool: TilePool,
    color: ColoredTile,
) -> Option<SelectTiles> {
    match pool {
        TilePool::FactoryDisplay(id) => {
            let display = factories.get(id)?;
            let count = display.count(color);
            if count == 0 {
                return None;
            }

            let leftovers: Vec<ColoredTile> = display
                .tiles()
                .iter()
                .copied()
                .filter(|&tile| tile != color)
                .collect();

            Some(SelectTiles {
                tiles: vec![Tile::Colored(color); count],
                factory_displays: factories.remove(id),
                table_center: table_center.add(&leftovers),
            })
        }
        TilePool::TableCenter => {
            let count = table_center.count(color);
            if count == 0 {
                return None;
            }

            let mut tiles = vec![Tile::Colored(color); count];
            if table_center.has_marker() {
                tiles.push(Tile::StartingPlayerMarker);
            }

            Some(SelectTiles {
                tiles,
                factory_displays: factories.clone(),
                table_center: table_center.pick(color),
            })
        }
    }
}

/// A board after placement plus the colored tiles that overflowed the floor.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Placement {
    pub board: Board,
    pub dropped: Vec<ColoredTile>,
}

/// Colored tiles must all share one color; returns that color and the count.
fn single_color(tiles: &[Tile]) -> Option<(ColoredTile, usize)> {
    let mut colored = tiles.iter().filter_map(|tile| tile.color());
    let color = colored.next()?;
    let mut count = 1;
    for tile in colored {
        if tile != color {
            return None;
        }
        count += 1;
    }
    Some((color, count))
}

fn with_floor(board: &Board, floor_line: FloorLine) -> Board {
    Board::new(board.score, board.pattern_lines, floor_line, board.wall)
}

/// Like [`place_tiles`], also reporting tiles lost to floor overflow.
pub fn place_tiles_tracked(board: &Board, line_index: usize, tiles: &[Tile]) -> Option<Placement> {
    let (color, count) = single_color(tiles)?;
    let (pattern_lines, remainder) = board.pattern_lines.try_add(line_index, count, color)?;

    let mut to_floor = vec![Tile::Colored(color); remainder];
    if tiles.iter().any(|tile| tile.is_marker()) {
        to_floor.push(Tile::StartingPlayerMarker);
    }
    let (floor_line, dropped) = board.floor_line.add(&to_floor);

    Some(Placement {
        board: Board::new(board.score, pattern_lines, floor_line, board.wall),
        dropped,
    })
}

/// Put drafted tiles on pattern line `line_index`; whatever does not fit (and
/// the marker) goes to the floor line.
///
/// `None` if there are no colored tiles, they are mixed, the index is out of
/// range, or the line already holds another color.
pub fn place_tiles(board: &Board, line_index: usize, tiles: &[Tile]) -> Option<Board> {
    place_tiles_tracked(board, line_index, tiles).map(|placement| placement.board)
}

/// Send every drafted tile straight to the floor line.
pub fn place_tiles_on_floor(board: &Board, tiles: &[Tile]) -> Option<Placement> {
    single_color(tiles)?;
    let (floor_line, dropped) = board.floor_line.add(tiles);
    Some(Placement {
        board: with_floor(board, floor_line),
        dropped,
    })
}

/// The drafting phase is over once every display is gone and the picked
/// center is empty.
pub fn phase_end(factories: &FactoryDisplays, table_center: &TableCenter) -> bool {
    factories.is_empty() && table_center.is_picked() && table_center.is_empty()
}
